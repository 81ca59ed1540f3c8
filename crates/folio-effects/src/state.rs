//! Particle background state management.

use folio_core::{FrameClock, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
};

use crate::animations::particles::{
    self, CELL_HEIGHT, CELL_WIDTH, Link, Particle, ParticleOptions,
};
use crate::color::blend;

/// Background particle animation.
///
/// Owns the point field, the drawing surface size and the frame clock that
/// advances the field once per display frame.
#[derive(Debug)]
pub struct ParticleAnimator {
    /// Current particles; empty until mounted.
    particles: Vec<Particle>,
    options: ParticleOptions,
    theme: Theme,
    /// Surface width in surface units.
    width: f64,
    /// Surface height in surface units.
    height: f64,
    frames: FrameClock,
    rng: fastrand::Rng,
    mounted: bool,
}

impl ParticleAnimator {
    /// Create an unmounted animator.
    pub fn new(options: ParticleOptions, fps: u32, theme: Theme, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            options,
            theme,
            width: 0.0,
            height: 0.0,
            frames: FrameClock::new(fps),
            rng: fastrand::Rng::with_seed(seed),
            mounted: false,
        }
    }

    /// Attach to a `cols` × `rows` terminal area and start the frame clock.
    pub fn mount(&mut self, cols: u16, rows: u16, now_ms: u64) {
        self.set_surface(cols, rows);
        self.regenerate();
        self.frames.start(now_ms);
        self.mounted = true;
    }

    /// Stop the frame clock and drop the field.
    pub fn teardown(&mut self) {
        self.frames.stop();
        self.particles.clear();
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Track a terminal resize. Existing particles are neither regenerated
    /// nor rescaled; the next frame wraps any that now lie outside.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if self.mounted {
            self.set_surface(cols, rows);
        }
    }

    /// Switch palettes. A changed theme regenerates the field.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        if self.mounted {
            self.regenerate();
        }
    }

    /// Advance the field by every frame due at `now_ms`.
    pub fn update(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        for _ in 0..self.frames.due_frames(now_ms) {
            particles::update(&mut self.particles, self.width, self.height);
        }
    }

    /// Milliseconds until the next frame is due, if running.
    pub fn next_frame_in(&self, now_ms: u64) -> Option<u64> {
        self.frames.until_next(now_ms)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current links between nearby particles.
    fn links(&self) -> Vec<Link> {
        particles::links(
            &self.particles,
            self.options.link_distance,
            self.options.max_line_opacity,
        )
    }

    /// Render the field over `area`, painting the theme background first.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.mounted || area.is_empty() || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        let palette = self.theme.palette();
        let surface = f64::from(palette.surface_opacity);
        let height = self.height;
        let links = self.links();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.background)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                // Canvas y grows upwards; the surface's grows downwards.
                for link in &links {
                    let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
                    let color = blend(
                        palette.accent,
                        palette.background,
                        (link.opacity * surface) as f32,
                    );
                    ctx.draw(&CanvasLine::new(a.x, height - a.y, b.x, height - b.y, color));
                }
                ctx.layer();
                for p in &self.particles {
                    let color = blend(
                        palette.accent,
                        palette.background,
                        (p.opacity * surface) as f32,
                    );
                    ctx.draw(&Points {
                        coords: &dot_coords(p, height),
                        color,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    fn set_surface(&mut self, cols: u16, rows: u16) {
        self.width = f64::from(cols) * CELL_WIDTH;
        self.height = f64::from(rows) * CELL_HEIGHT;
    }

    fn regenerate(&mut self) {
        self.particles =
            particles::init_particles(self.options.count, self.width, self.height, &mut self.rng);
    }
}

/// Radius above which a particle draws as a 2×2 block of Braille dots.
const LARGE_RADIUS: f64 = 1.5;

/// Distance between neighbouring Braille dots, in surface units. A cell
/// holds 2 × 4 dots, so both axes come out the same.
const DOT_PITCH: f64 = CELL_WIDTH / 2.0;

/// Canvas points for one particle, with `height` flipping the y axis.
fn dot_coords(p: &Particle, height: f64) -> Vec<(f64, f64)> {
    let (x, y) = (p.x, height - p.y);
    if p.radius > LARGE_RADIUS {
        vec![
            (x, y),
            (x + DOT_PITCH, y),
            (x, y - DOT_PITCH),
            (x + DOT_PITCH, y - DOT_PITCH),
        ]
    } else {
        vec![(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    fn animator() -> ParticleAnimator {
        ParticleAnimator::new(ParticleOptions::default(), 60, Theme::Dark, 1)
    }

    #[test]
    fn test_mount_scales_surface_to_cells() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        assert_eq!((anim.width, anim.height), (640.0, 384.0));
        assert_eq!(anim.particles.len(), 80);
    }

    #[test]
    fn test_update_moves_particles_per_frame() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        let before = anim.particles.clone();
        anim.update(0);
        assert_ne!(anim.particles, before);
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        let before = anim.particles.clone();
        anim.resize(40, 12);
        assert_eq!((anim.width, anim.height), (320.0, 192.0));
        assert_eq!(anim.particles, before);
    }

    #[test]
    fn test_wrap_invariant_after_shrink() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        anim.resize(10, 5);
        anim.update(0);
        let (w, h) = (anim.width, anim.height);
        for p in &anim.particles {
            assert!(p.x >= 0.0 && p.x < w);
            assert!(p.y >= 0.0 && p.y < h);
        }
    }

    #[test]
    fn test_theme_change_regenerates() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        let before = anim.particles.clone();
        anim.set_theme(Theme::Dark);
        assert_eq!(anim.particles, before);
        anim.set_theme(Theme::Light);
        assert_eq!(anim.theme(), Theme::Light);
        assert_ne!(anim.particles, before);
        assert_eq!(anim.particles.len(), 80);
    }

    #[test]
    fn test_teardown_stops_frames() {
        let mut anim = animator();
        anim.mount(80, 24, 0);
        anim.teardown();
        anim.update(10_000);
        assert!(anim.particles.is_empty());
        assert_eq!(anim.next_frame_in(10_000), None);
        assert!(!anim.is_mounted());
    }

    #[test]
    fn test_unmounted_update_is_noop() {
        let mut anim = animator();
        anim.update(1_000);
        anim.resize(80, 24);
        assert_eq!((anim.width, anim.height), (0.0, 0.0));
        assert!(anim.links().is_empty());
    }

    #[test]
    fn test_render_paints_background() {
        let mut anim = animator();
        anim.mount(20, 6, 0);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| anim.render(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, Theme::Dark.palette().background);
    }

    #[test]
    fn test_render_zero_area_is_noop() {
        let mut anim = animator();
        anim.mount(0, 0, 0);
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
        terminal
            .draw(|frame| anim.render(frame, frame.area()))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_large_particles_draw_a_block() {
        let small = Particle {
            x: 10.0,
            y: 20.0,
            dx: 0.0,
            dy: 0.0,
            radius: 1.0,
            opacity: 0.5,
        };
        let large = Particle {
            radius: 2.0,
            ..small
        };
        assert_eq!(dot_coords(&small, 100.0), vec![(10.0, 80.0)]);
        assert_eq!(
            dot_coords(&large, 100.0),
            vec![(10.0, 80.0), (14.0, 80.0), (10.0, 76.0), (14.0, 76.0)]
        );
    }

    /// Whether every channel of `c` lies between those of `a` and `b`.
    fn between(c: Color, a: Color, b: Color) -> bool {
        match (c, a, b) {
            (Color::Rgb(r, g, bl), Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                (r1.min(r2)..=r1.max(r2)).contains(&r)
                    && (g1.min(g2)..=g1.max(g2)).contains(&g)
                    && (b1.min(b2)..=b1.max(b2)).contains(&bl)
            }
            _ => false,
        }
    }

    #[test]
    fn test_light_theme_recolors_field() {
        let mut anim = animator();
        anim.mount(20, 6, 0);
        anim.set_theme(Theme::Light);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| anim.render(frame, frame.area()))
            .unwrap();

        let light = Theme::Light.palette();
        let buffer = terminal.backend().buffer();
        let mut drawn = 0;
        for y in 0..6 {
            for x in 0..20 {
                let cell = &buffer[(x, y)];
                assert_eq!(cell.bg, light.background);
                if cell.symbol() != " " {
                    drawn += 1;
                    assert!(
                        between(cell.fg, light.accent, light.background),
                        "cell ({x}, {y}) has fg {:?}",
                        cell.fg
                    );
                }
            }
        }
        assert!(drawn > 0);
    }
}
