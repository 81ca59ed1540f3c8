//! Pointer trail overlay: an outer ring and an inner dot that follow the mouse.

use folio_core::{ElementId, HitMap, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType},
};

use crate::chars::POINTER_DOT;
use crate::color::blend;

/// Ring size in cells (width, height) at rest.
pub const RING_SIZE: (u16, u16) = (5, 3);
/// Ring scale while hovering an interactive element.
pub const HOVER_SCALE: f32 = 1.5;
/// Ring opacity at rest.
pub const RING_OPACITY: f32 = 0.5;
/// Ring opacity while hovering.
pub const HOVER_RING_OPACITY: f32 = 0.8;
/// Duration of the hover transition.
pub const TRANSITION_MS: u64 = 150;

/// Pointer position, hover flag and the ring's hover transition.
#[derive(Debug, Default)]
pub struct PointerTrail {
    /// Last pointer cell; `None` until the first move.
    position: Option<(u16, u16)>,
    /// Is the pointer over a button or link?
    hovering: bool,
    /// Transition progress from rest (0.0) to hover (1.0).
    progress: f32,
    /// Time of the last transition step.
    last_update_ms: Option<u64>,
    mounted: bool,
}

impl PointerTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for pointer signals.
    pub fn mount(&mut self, now_ms: u64) {
        self.mounted = true;
        self.last_update_ms = Some(now_ms);
    }

    /// Stop listening. Pending transition steps are dropped.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.last_update_ms = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Pointer-move signal.
    pub fn on_move(&mut self, x: u16, y: u16) {
        if self.mounted {
            self.position = Some((x, y));
        }
    }

    /// Pointer-over signal for `target` as resolved in `map`.
    pub fn on_over<A>(&mut self, map: &HitMap<A>, target: Option<ElementId>) {
        if self.mounted {
            self.hovering = target.is_some_and(|id| map.is_within_interactive(id));
        }
    }

    /// Step the hover transition to `now_ms`.
    pub fn update(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        let last = self.last_update_ms.replace(now_ms).unwrap_or(now_ms);
        let step = now_ms.saturating_sub(last) as f32 / TRANSITION_MS as f32;
        let target = if self.hovering { 1.0 } else { 0.0 };
        self.progress = if self.progress < target {
            (self.progress + step).min(target)
        } else {
            (self.progress - step).max(target)
        };
    }

    /// Whether the hover transition is still moving.
    pub fn is_animating(&self) -> bool {
        let target = if self.hovering { 1.0 } else { 0.0 };
        self.mounted && self.progress != target
    }

    pub fn position(&self) -> Option<(u16, u16)> {
        self.position
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Current ring scale.
    pub fn scale(&self) -> f32 {
        1.0 + (HOVER_SCALE - 1.0) * ease(self.progress)
    }

    /// Current ring opacity.
    pub fn ring_opacity(&self) -> f32 {
        RING_OPACITY + (HOVER_RING_OPACITY - RING_OPACITY) * ease(self.progress)
    }

    /// Ring area centered on the pointer, clipped to `bounds`.
    pub fn ring_area(&self, bounds: Rect) -> Option<Rect> {
        let (x, y) = self.position?;
        let scale = self.scale();
        let width = odd((f32::from(RING_SIZE.0) * scale).round() as u16);
        let height = odd((f32::from(RING_SIZE.1) * scale).round() as u16);
        centered(x, y, width, height, bounds)
    }

    /// Dot cell, if it lies within `bounds`.
    pub fn dot_area(&self, bounds: Rect) -> Option<Rect> {
        let (x, y) = self.position?;
        centered(x, y, 1, 1, bounds)
    }

    /// Draw both markers over whatever is already in the frame.
    pub fn render(&self, frame: &mut Frame, theme: Theme) {
        if !self.mounted {
            return;
        }
        let palette = theme.palette();
        let bounds = frame.area();

        if let Some(ring) = self.ring_area(bounds) {
            let color = blend(palette.accent, palette.background, self.ring_opacity());
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(color));
            frame.render_widget(block, ring);
        }

        if let Some(dot) = self.dot_area(bounds)
            && let Some(cell) = frame.buffer_mut().cell_mut((dot.x, dot.y))
        {
            cell.set_char(POINTER_DOT).set_fg(palette.accent);
        }
    }
}

/// Ease-out quadratic.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Round up to an odd size so the marker has a center cell.
fn odd(n: u16) -> u16 {
    n.max(1) | 1
}

/// A `width` × `height` rect centered on `(cx, cy)`, clipped to `bounds`.
fn centered(cx: u16, cy: u16, width: u16, height: u16, bounds: Rect) -> Option<Rect> {
    let left = i32::from(cx) - i32::from(width / 2);
    let top = i32::from(cy) - i32::from(height / 2);
    let x0 = left.max(i32::from(bounds.left()));
    let y0 = top.max(i32::from(bounds.top()));
    let x1 = (left + i32::from(width)).min(i32::from(bounds.right()));
    let y1 = (top + i32::from(height)).min(i32::from(bounds.bottom()));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some(Rect::new(
        x0 as u16,
        y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ElementKind;
    use ratatui::{Terminal, backend::TestBackend};

    fn page() -> (HitMap, ElementId, ElementId, ElementId) {
        let mut map = HitMap::new();
        let root = map.push(ElementKind::Page, Rect::new(0, 0, 80, 24), None, None);
        let link = map.push(ElementKind::Link, Rect::new(10, 2, 8, 1), Some(root), None);
        let icon = map.push(ElementKind::Text, Rect::new(10, 2, 1, 1), Some(link), None);
        (map, root, link, icon)
    }

    fn mounted() -> PointerTrail {
        let mut trail = PointerTrail::new();
        trail.mount(0);
        trail
    }

    #[test]
    fn test_move_updates_position() {
        let mut trail = mounted();
        assert_eq!(trail.position(), None);
        trail.on_move(12, 7);
        assert_eq!(trail.position(), Some((12, 7)));
    }

    #[test]
    fn test_hover_follows_last_target() {
        let (map, root, link, icon) = page();
        let mut trail = mounted();
        trail.on_over(&map, Some(link));
        assert!(trail.is_hovering());
        trail.on_over(&map, Some(root));
        assert!(!trail.is_hovering());
        trail.on_over(&map, Some(icon));
        assert!(trail.is_hovering());
        trail.on_over(&map, None);
        assert!(!trail.is_hovering());
    }

    #[test]
    fn test_transition_reaches_hover_scale() {
        let (map, _, link, _) = page();
        let mut trail = mounted();
        trail.on_move(40, 12);
        trail.on_over(&map, Some(link));
        trail.update(75);
        assert!(trail.scale() > 1.0 && trail.scale() < HOVER_SCALE);
        assert!(trail.is_animating());
        trail.update(150);
        assert_eq!(trail.scale(), HOVER_SCALE);
        assert_eq!(trail.ring_opacity(), HOVER_RING_OPACITY);
        assert!(!trail.is_animating());
    }

    #[test]
    fn test_ring_centered_on_pointer() {
        let mut trail = mounted();
        trail.on_move(40, 12);
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(trail.ring_area(bounds), Some(Rect::new(38, 11, 5, 3)));
        assert_eq!(trail.dot_area(bounds), Some(Rect::new(40, 12, 1, 1)));
    }

    #[test]
    fn test_ring_enlarges_on_hover() {
        let (map, _, link, _) = page();
        let mut trail = mounted();
        trail.on_move(40, 12);
        trail.on_over(&map, Some(link));
        trail.update(1_000);
        let ring = trail.ring_area(Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(ring, Rect::new(36, 10, 9, 5));
    }

    #[test]
    fn test_ring_clipped_at_edges() {
        let mut trail = mounted();
        trail.on_move(0, 0);
        assert_eq!(
            trail.ring_area(Rect::new(0, 0, 80, 24)),
            Some(Rect::new(0, 0, 3, 2))
        );
    }

    #[test]
    fn test_teardown_ignores_signals_and_time() {
        let (map, _, link, _) = page();
        let mut trail = mounted();
        trail.on_move(5, 5);
        trail.teardown();
        trail.on_move(9, 9);
        trail.on_over(&map, Some(link));
        trail.update(10_000);
        assert_eq!(trail.position(), Some((5, 5)));
        assert!(!trail.is_hovering());
        assert_eq!(trail.scale(), 1.0);
    }

    #[test]
    fn test_render_draws_dot() {
        let mut trail = mounted();
        trail.on_move(4, 2);
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|frame| trail.render(frame, Theme::Dark))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(4, 2)].symbol(), "●");
        assert_eq!(buffer[(2, 1)].symbol(), "╭");
    }

    #[test]
    fn test_render_uses_theme_colors() {
        let mut trail = mounted();
        trail.on_move(4, 2);
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|frame| trail.render(frame, Theme::Light))
            .unwrap();

        let light = Theme::Light.palette();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(4, 2)].fg, light.accent);
        assert_eq!(
            buffer[(2, 1)].fg,
            blend(light.accent, light.background, RING_OPACITY)
        );
        assert_ne!(buffer[(4, 2)].fg, Theme::Dark.palette().accent);
    }
}
