//! Color utility functions for translucent effects.

use ratatui::style::Color;

/// Composite `fg` at `opacity` over `bg`.
///
/// Terminals have no alpha channel, so translucency is baked into the color.
/// Only RGB colors can be blended; anything else is returned unchanged when
/// `opacity` is above one half and replaced by `bg` otherwise.
pub fn blend(fg: Color, bg: Color, opacity: f32) -> Color {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };

    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => Color::Rgb(
            mix(fr, br, opacity),
            mix(fg_, bg_, opacity),
            mix(fb, bb, opacity),
        ),
        _ if opacity > 0.5 => fg,
        _ => bg,
    }
}

fn mix(front: u8, back: u8, t: f32) -> u8 {
    let value = f32::from(back) + (f32::from(front) - f32::from(back)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
