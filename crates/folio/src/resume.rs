//! Resume download.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use directories::UserDirs;
use tracing::info;

/// File name the resume is saved under, e.g. `Sharon_K_Varghese_Resume.pdf`.
pub fn resume_file_name(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{stem}_Resume.pdf")
    }
}

/// The user's download directory, or the current directory if unknown.
pub fn download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Copy `source` into `dest_dir` under the resume file name for `name`.
pub fn download(source: &Path, dest_dir: &Path, name: &str) -> Result<PathBuf> {
    if !source.is_file() {
        bail!("resume not found at {}", source.display());
    }
    fs::create_dir_all(dest_dir)
        .wrap_err_with(|| format!("failed to create {}", dest_dir.display()))?;

    let dest = dest_dir.join(resume_file_name(name));
    fs::copy(source, &dest).wrap_err_with(|| {
        format!("failed to copy {} to {}", source.display(), dest.display())
    })?;

    info!(from = %source.display(), to = %dest.display(), "resume downloaded");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_file_name() {
        assert_eq!(
            resume_file_name("Sharon K Varghese"),
            "Sharon_K_Varghese_Resume.pdf"
        );
        assert_eq!(resume_file_name("  "), "Resume.pdf");
    }

    #[test]
    fn test_download_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("resume.pdf");
        fs::write(&source, b"%PDF-1.7").unwrap();
        let dest_dir = dir.path().join("Downloads");

        let dest = download(&source, &dest_dir, "Ada Lovelace").unwrap();
        assert_eq!(dest, dest_dir.join("Ada_Lovelace_Resume.pdf"));
        assert_eq!(fs::read(&dest).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_download_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = download(&dir.path().join("nope.pdf"), dir.path(), "Ada").unwrap_err();
        assert!(err.to_string().contains("resume not found"));
    }
}
