//! Drifting particle field (stateful).

use fastrand::Rng;

/// Surface units per terminal cell, horizontally.
pub const CELL_WIDTH: f64 = 8.0;
/// Surface units per terminal cell, vertically.
pub const CELL_HEIGHT: f64 = 16.0;

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Horizontal drift per frame.
    pub dx: f64,
    /// Vertical drift per frame.
    pub dy: f64,
    /// Dot radius, fixed at creation. Radii above 1.5 draw as a 2×2 block
    /// of Braille dots, smaller ones as a single dot.
    pub radius: f64,
    /// Dot opacity in [0.2, 0.7), fixed at creation.
    pub opacity: f64,
}

/// Tunables for the particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleOptions {
    /// Number of particles.
    pub count: usize,
    /// Pairs closer than this are linked.
    pub link_distance: f64,
    /// Opacity of a link between two coincident particles.
    pub max_line_opacity: f64,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 80,
            link_distance: 120.0,
            max_line_opacity: 0.35,
        }
    }
}

/// A line between two particles, by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Scatter `count` particles uniformly over a `width` × `height` surface.
pub fn init_particles(count: usize, width: f64, height: f64, rng: &mut Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.f64() * width,
            y: rng.f64() * height,
            dx: rng.f64() * 0.5 - 0.25,
            dy: rng.f64() * 0.5 - 0.25,
            radius: rng.f64() * 2.0 + 0.5,
            opacity: rng.f64() * 0.5 + 0.2,
        })
        .collect()
}

/// Advance every particle by one frame, wrapping at the surface edges.
pub fn update(particles: &mut [Particle], width: f64, height: f64) {
    if !(width > 0.0 && height > 0.0) {
        return;
    }
    for p in particles {
        p.x = wrap(p.x + p.dx, width);
        p.y = wrap(p.y + p.dy, height);
    }
}

/// Map `value` into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Opacity of a link at `distance`, or `None` if the pair is too far apart.
///
/// Falls off linearly from `max_opacity` at distance zero towards zero at
/// `link_distance`, which itself is excluded.
pub fn link_opacity(distance: f64, link_distance: f64, max_opacity: f64) -> Option<f64> {
    if distance < link_distance && link_distance > 0.0 {
        Some(max_opacity * (1.0 - distance / link_distance))
    } else {
        None
    }
}

/// Every unordered pair closer than `link_distance`.
///
/// Quadratic in the particle count; the count is capped by the config layer.
pub fn links(particles: &[Particle], link_distance: f64, max_opacity: f64) -> Vec<Link> {
    let mut out = Vec::new();
    for (a, p) in particles.iter().enumerate() {
        for (offset, q) in particles[a + 1..].iter().enumerate() {
            let distance = (p.x - q.x).hypot(p.y - q.y);
            if let Some(opacity) = link_opacity(distance, link_distance, max_opacity) {
                out.push(Link {
                    a,
                    b: a + 1 + offset,
                    distance,
                    opacity,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            radius: 1.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_init_ranges() {
        let mut rng = Rng::with_seed(7);
        let particles = init_particles(200, 640.0, 384.0, &mut rng);
        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert!((0.0..640.0).contains(&p.x));
            assert!((0.0..384.0).contains(&p.y));
            assert!((-0.25..0.25).contains(&p.dx));
            assert!((-0.25..0.25).contains(&p.dy));
            assert!((0.5..2.5).contains(&p.radius));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_wrap_invariant_holds_after_many_ticks() {
        let mut rng = Rng::with_seed(42);
        let (w, h) = (160.0, 96.0);
        let mut particles = init_particles(80, w, h, &mut rng);
        for _ in 0..5_000 {
            update(&mut particles, w, h);
            for p in &particles {
                assert!(p.x >= 0.0 && p.x < w, "x out of bounds: {}", p.x);
                assert!(p.y >= 0.0 && p.y < h, "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn test_exit_left_reenters_right() {
        let mut particles = [Particle {
            dx: -0.25,
            dy: 0.25,
            ..at(0.1, 95.9)
        }];
        update(&mut particles, 100.0, 96.0);
        assert!((particles[0].x - 99.85).abs() < 1e-9);
        assert!((particles[0].y - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_tiny_negative() {
        assert_eq!(wrap(-1e-20, 100.0), 0.0);
    }

    #[test]
    fn test_update_zero_surface_is_noop() {
        let mut particles = [Particle { dx: 0.2, ..at(5.0, 5.0) }];
        update(&mut particles, 0.0, 10.0);
        assert_eq!(particles[0].x, 5.0);
    }

    #[test]
    fn test_no_links_for_zero_or_one_particle() {
        assert!(links(&[], 120.0, 0.1).is_empty());
        assert!(links(&[at(1.0, 1.0)], 120.0, 0.1).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let pair = [at(0.0, 0.0), at(120.0, 0.0)];
        assert!(links(&pair, 120.0, 0.1).is_empty());

        let pair = [at(0.0, 0.0), at(119.9, 0.0)];
        let found = links(&pair, 120.0, 0.1);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].a, found[0].b), (0, 1));
    }

    #[test]
    fn test_link_opacity_falls_off() {
        let near = link_opacity(10.0, 120.0, 0.1).unwrap();
        let mid = link_opacity(60.0, 120.0, 0.1).unwrap();
        let far = link_opacity(119.0, 120.0, 0.1).unwrap();
        assert!(near > mid && mid > far && far > 0.0);
        assert!((mid - 0.05).abs() < 1e-12);
        assert_eq!(link_opacity(0.0, 120.0, 0.1), Some(0.1));
        assert_eq!(link_opacity(120.0, 120.0, 0.1), None);
    }

    #[test]
    fn test_links_cover_every_close_pair() {
        let particles = [at(0.0, 0.0), at(30.0, 40.0), at(300.0, 0.0), at(310.0, 0.0)];
        let found = links(&particles, 120.0, 1.0);
        let pairs: Vec<_> = found.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (2, 3)]);
        assert!((found[0].distance - 50.0).abs() < 1e-12);
    }
}
