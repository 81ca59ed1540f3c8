//! Page sections, in display order.

/// A section of the portfolio page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Stable anchor id.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Section> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}
