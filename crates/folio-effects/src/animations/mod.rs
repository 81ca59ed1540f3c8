//! Stateful animations driven by the frame clock.

pub mod particles;
