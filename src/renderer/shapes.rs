//! Outline generation for entities and HUD primitives
//!
//! All outlines are returned in playfield coordinates, already rotated and
//! translated, so a host only has to stroke or fill the polygon.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::Serialize;

/// Rotate local-space points by `rotation` and move them to `center`
fn place(points: &[Vec2], center: Vec2, rotation: f32) -> Vec<Vec2> {
    let rot = Vec2::from_angle(rotation);
    points.iter().map(|p| center + rot.rotate(*p)).collect()
}

/// Arrowhead hull used by the ship, bullets and the boss.
///
/// Nose at `(r, 0)`, wings at `(-r, ±r)`, notch at `(-1.5r, 0)`.
pub fn arrowhead(center: Vec2, r: f32, rotation: f32) -> Vec<Vec2> {
    let local = [
        Vec2::new(r, 0.0),
        Vec2::new(-r, r),
        Vec2::new(-r - r / 2.0, 0.0),
        Vec2::new(-r, -r),
    ];
    place(&local, center, rotation)
}

/// Enemy dart: a narrow swept wing pointing along `rotation`
pub fn dart(center: Vec2, r: f32, rotation: f32) -> Vec<Vec2> {
    let buffer = r / 4.0;
    let local = [
        Vec2::ZERO,
        Vec2::new(-r / 2.0, -r / 2.0 - buffer),
        Vec2::new(r, 0.0),
        Vec2::new(-r / 2.0, r / 2.0 + buffer),
    ];
    place(&local, center, rotation)
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Guide lines running from just outside the ship to past the playfield edges
pub fn crosshair(center: Vec2, radius: f32, width: f32, height: f32) -> [Segment; 4] {
    let gap = radius * 1.5;
    [
        Segment {
            from: center + Vec2::new(gap, 0.0),
            to: center + Vec2::new(width, 0.0),
        },
        Segment {
            from: center - Vec2::new(gap, 0.0),
            to: center - Vec2::new(width, 0.0),
        },
        Segment {
            from: center + Vec2::new(0.0, gap),
            to: center + Vec2::new(0.0, height),
        },
        Segment {
            from: center - Vec2::new(0.0, gap),
            to: center - Vec2::new(0.0, height),
        },
    ]
}

/// A stroked circular arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    /// Start and end angle (radians, clockwise on screen)
    pub start: f32,
    pub end: f32,
    pub line_width: f32,
}

/// Radius of the innermost signal ring
pub const SIGNAL_FIRST_RING: f32 = 80.0;
/// Distance between signal rings
pub const SIGNAL_RING_SPACING: f32 = 50.0;
pub const SIGNAL_RING_WIDTH: f32 = 40.0;
pub const SIGNAL_DOT_RADIUS: f32 = 50.0;

/// Upper-half arcs of the signal indicator, innermost first
pub fn signal_rings(center: Vec2, count: usize) -> Vec<Arc> {
    (0..count)
        .map(|i| Arc {
            center,
            radius: SIGNAL_FIRST_RING + SIGNAL_RING_SPACING * i as f32,
            start: PI + 0.4,
            end: TAU - 0.4,
            line_width: SIGNAL_RING_WIDTH,
        })
        .collect()
}
