//! Background scene as plain draw commands.
//!
//! A frame depends only on the animation phase and the viewport size, so the
//! geometry is tested without a canvas.

use std::f64::consts::TAU;

use crate::utils::constants::PHASE_STEP;

pub const LINE_WIDTH: f64 = 0.5;
const GRID_SPACING: f64 = 60.0;
const DIAGONAL_SPACING: f64 = 120.0;
const DIAGONAL_SPEED: f64 = 30.0;
const RING_COUNT: usize = 3;
const PARTICLE_COUNT: usize = 20;
const PARTICLE_ALPHA: f64 = 0.3;
const GRID_ALPHA: f64 = 0.1;

/// `rgba()` in the emerald accent colour.
pub fn accent(alpha: f64) -> String {
    format!("rgba(16, 185, 129, {})", alpha)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Monotonic animation clock, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Phase(f64);

impl Phase {
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn step(self) -> Self {
        Self(self.0 + PHASE_STEP)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Line { from: Point, to: Point, alpha: f64 },
    Ring { center: Point, radius: f64, alpha: f64 },
    Dot { center: Point, radius: f64, alpha: f64 },
}

/// One frame: grid, scrolling diagonals, pulsing rings, orbiting particles.
pub fn compose(phase: Phase, viewport: Viewport) -> Vec<DrawOp> {
    let t = phase.value();
    let Viewport { width, height } = viewport;
    let mut ops = vec![DrawOp::Clear];

    let mut x = 0.0;
    while x < width {
        ops.push(DrawOp::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
            alpha: GRID_ALPHA,
        });
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y < height {
        ops.push(DrawOp::Line {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            alpha: GRID_ALPHA,
        });
        y += GRID_SPACING;
    }

    let offset = (t * DIAGONAL_SPEED) % DIAGONAL_SPACING;
    let mut i = -height - offset;
    while i < width + height {
        ops.push(DrawOp::Line {
            from: Point::new(i, 0.0),
            to: Point::new(i + height, height),
            alpha: 0.05 + (t + i * 0.01).sin() * 0.02,
        });
        i += DIAGONAL_SPACING;
    }

    let center = viewport.center();
    for ring in 0..RING_COUNT {
        let k = ring as f64;
        let pulse = (t + k * 0.5).sin() * 10.0;
        ops.push(DrawOp::Ring {
            center,
            radius: 200.0 + k * 150.0 + pulse,
            alpha: (0.08 - k * 0.02 + (t + k).sin() * 0.02).max(0.0),
        });
    }

    for particle in 0..PARTICLE_COUNT {
        let k = particle as f64;
        let angle = k / PARTICLE_COUNT as f64 * TAU + t * 0.5;
        let distance = 300.0 + (t * 2.0 + k).sin() * 50.0;
        ops.push(DrawOp::Dot {
            center: Point::new(
                center.x + angle.cos() * distance,
                center.y + angle.sin() * distance,
            ),
            radius: 2.0 + (t * 3.0 + k).sin(),
            alpha: PARTICLE_ALPHA,
        });
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(ops: &[DrawOp], pred: impl Fn(&DrawOp) -> bool) -> usize {
        ops.iter().filter(|op| pred(*op)).count()
    }

    #[test]
    fn test_small_viewport_layout() {
        let ops = compose(Phase::default(), Viewport { width: 120.0, height: 60.0 });

        assert_eq!(ops[0], DrawOp::Clear);
        // 2 vertical + 1 horizontal grid lines, 2 diagonals
        assert_eq!(count(&ops, |op| matches!(op, DrawOp::Line { .. })), 5);
        assert_eq!(count(&ops, |op| matches!(op, DrawOp::Ring { .. })), 3);
        assert_eq!(count(&ops, |op| matches!(op, DrawOp::Dot { .. })), 20);
    }

    #[test]
    fn test_geometry_bounds_over_time() {
        let viewport = Viewport { width: 1920.0, height: 1080.0 };
        let center = viewport.center();
        let mut phase = Phase::default();

        for _ in 0..5_000 {
            for op in compose(phase, viewport) {
                match op {
                    DrawOp::Clear => {}
                    DrawOp::Line { alpha, .. } => assert!((0.0..=1.0).contains(&alpha)),
                    DrawOp::Ring { center: c, radius, alpha } => {
                        assert_eq!(c, center);
                        assert!((190.0..=510.0).contains(&radius));
                        assert!((0.0..=0.1 + 1e-9).contains(&alpha));
                    }
                    DrawOp::Dot { center: c, radius, .. } => {
                        let distance = ((c.x - center.x).powi(2) + (c.y - center.y).powi(2)).sqrt();
                        assert!((249.9..=350.1).contains(&distance));
                        assert!((1.0..=3.0).contains(&radius));
                    }
                }
            }
            phase = phase.step();
        }
    }

    #[test]
    fn test_diagonals_scroll() {
        let viewport = Viewport { width: 600.0, height: 400.0 };
        let first_diagonal = |phase: Phase| {
            compose(phase, viewport)
                .into_iter()
                .filter_map(|op| match op {
                    DrawOp::Line { from, to, .. } if from.y == 0.0 && to.y == 400.0 && to.x != from.x => {
                        Some(from.x)
                    }
                    _ => None,
                })
                .next()
        };

        let start = first_diagonal(Phase::default()).unwrap();
        let later = first_diagonal(Phase(1.0)).unwrap();
        assert_eq!(start, -400.0);
        assert!((later - (-430.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_viewport_draws_no_grid() {
        let ops = compose(Phase::default(), Viewport::default());
        assert_eq!(count(&ops, |op| matches!(op, DrawOp::Line { .. })), 0);
        assert_eq!(ops.len(), 1 + 3 + 20);
    }

    #[test]
    fn test_phase_step() {
        let p = Phase::default().step().step();
        assert!((p.value() - 0.01).abs() < 1e-12);
        assert!(p > Phase::default());
    }
}
