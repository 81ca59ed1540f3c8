//! Scoped mouse capture.

use std::io::{self, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use tracing::{debug, warn};

/// Keeps terminal mouse reporting enabled while alive.
///
/// Pointer signals only reach the application while capture is on, so this
/// guard is the listener registration for every pointer-driven effect.
/// Dropping it, on any exit path, detaches them.
#[derive(Debug)]
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    /// Turn on mouse reporting.
    pub fn enable() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        debug!("mouse capture enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        match execute!(stdout(), DisableMouseCapture) {
            Ok(()) => debug!("mouse capture disabled"),
            Err(err) => warn!(%err, "failed to disable mouse capture"),
        }
    }
}
