//! Candidate swing targets.

use std::collections::BTreeSet;

use crate::core::{GridCoord, GridPoint};

use super::biped::{BipedState, Side};
use super::limits::GaitLimits;

/// Sweep stride x separation around the support foot.
///
/// Returns rounded offsets relative to the swing foot, deduplicated and
/// ordered, keeping only those whose absolute position lies inside a grid
/// of `shape` (rows, cols). The left foot lands on the `(-sin, cos)` side
/// of the support heading, the right foot on the opposite side.
pub fn ideal_walk(state: &BipedState, limits: &GaitLimits, shape: (usize, usize)) -> Vec<GridCoord> {
    let step = limits.scan_step;
    if !(step.is_finite() && step > 0.0) || limits.max_stride < 0.0 {
        return Vec::new();
    }

    let support = state.support_foot();
    let swing = state.swing_foot().position;
    let forward = GridPoint::new(support.heading.cos(), support.heading.sin());
    let perp = match state.swing_side() {
        Side::Left => GridPoint::new(-forward.y, forward.x),
        Side::Right => GridPoint::new(forward.y, -forward.x),
    };

    let stride_steps = (limits.max_stride / step + 1e-9).floor() as usize;
    let sep_span = limits.max_separation - limits.min_separation;
    if sep_span < 0.0 {
        return Vec::new();
    }
    let sep_steps = (sep_span / step + 1e-9).floor() as usize;

    let (rows, cols) = (shape.0 as f64, shape.1 as f64);
    let mut offsets = BTreeSet::new();
    for i in 0..=stride_steps {
        let base = support.position + forward * (i as f64 * step);
        for j in 0..=sep_steps {
            let separation = limits.min_separation + j as f64 * step;
            let offset = (base + perp * separation - swing).round();
            let x = swing.x + offset.x as f64;
            let y = swing.y + offset.y as f64;
            if x >= 0.0 && x < rows && y >= 0.0 && y < cols {
                offsets.insert(offset);
            }
        }
    }
    offsets.into_iter().collect()
}

/// Goal itself when within `max_stride` of the support point, otherwise the
/// point `max_stride` along the support-to-goal direction.
///
/// The clamped point is rounded to a cell; if rounding pushes it past the
/// stride limit the offset is truncated toward the support instead.
pub fn direct_target(support: GridPoint, goal: GridPoint, max_stride: f64) -> GridCoord {
    let delta = goal - support;
    let distance = delta.length();
    if distance <= max_stride {
        return goal.round();
    }
    let reach = delta.normalize() * max_stride;
    let rounded = (support + reach).round();
    if support.distance(&GridPoint::from(rounded)) <= max_stride {
        return rounded;
    }
    let truncated = support + GridPoint::new(reach.x.trunc(), reach.y.trunc());
    truncated.round()
}
