//! Glyphs used by the overlay effects.

/// Inner dot of the pointer trail.
pub const POINTER_DOT: char = '●';

/// Caret drawn after the typewriter text.
pub const CARET: char = '▌';
