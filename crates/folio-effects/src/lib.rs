//! Visual effects for the folio portfolio.
//!
//! Three independent effects, each owning its own state and driven by the
//! caller's millisecond clock: a drifting particle background, a pointer
//! trail overlay, and a typewriter headline. Each has an explicit `mount` /
//! `teardown` lifecycle; after teardown, advancing time changes nothing.

mod animations;
mod chars;
mod color;
mod pointer;
mod state;
mod typewriter;

pub use animations::particles::ParticleOptions;
pub use chars::CARET;
pub use color::blend;
pub use pointer::PointerTrail;
pub use state::ParticleAnimator;
pub use typewriter::{Phase, Typewriter, TypewriterOptions};
