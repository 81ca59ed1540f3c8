//! Core types shared by the folio crates.
//!
//! Holds the theme and its palettes, the millisecond timers that drive every
//! animation, the per-frame element tree used for pointer hit testing, and the
//! page's section ids.

mod clock;
mod hit;
mod section;
mod theme;

pub use clock::{FrameClock, Timer};
pub use hit::{ElementId, ElementKind, HitMap};
pub use section::Section;
pub use theme::{Palette, Theme};
