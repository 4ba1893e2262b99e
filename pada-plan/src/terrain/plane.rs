//! Greedy upper-envelope plane fitting.
//!
//! Models a rigid sole resting on terrain: the fitted plane should touch the
//! highest points of the contact area rather than average through them.
//!
//! # Algorithm
//!
//! 1. Seed a triangle from the highest point, the point horizontally farthest
//!    from it, and the point that maximizes the triangle area with those two.
//! 2. Pick the point lying furthest above the current plane.
//! 3. Try swapping it into each triangle vertex and keep the swap that most
//!    reduces the summed distance of the remaining points to the plane.
//! 4. Stop when no point lies above, no swap improves, or after
//!    [`MAX_REFINE_ITERATIONS`] rounds.

use log::{debug, trace};
use std::cmp::Ordering;
use thiserror::Error;

use crate::core::{GridCoord, Point3};
use crate::grid::TerrainGrid;

/// Hard cap on refinement rounds
pub const MAX_REFINE_ITERATIONS: usize = 100;

/// Signed distance a point must exceed to count as "above" the plane
const ABOVE_EPS: f64 = 1e-9;

/// Cross-product magnitude below which three points are treated as collinear
const COLLINEAR_EPS: f64 = 1e-9;

/// Plane fitting failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaneFitError {
    #[error("plane fitting needs at least 3 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("point ({}, {}) is outside the grid", .0.x, .0.y)]
    OutOfBounds(GridCoord),

    #[error("point ({}, {}) is an obstacle", .0.x, .0.y)]
    ObstacleInArea(GridCoord),

    #[error("points are collinear")]
    Collinear,
}

/// Plane `A·x + B·y + C·z + D = 0` with a unit normal oriented so `C >= 0`.
///
/// The default plane has all coefficients zero and is degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    /// Plane through three points, `None` if they are collinear
    pub fn through(p1: &Point3, p2: &Point3, p3: &Point3) -> Option<Plane> {
        let mut plane = Plane::default();
        plane.define(p1, p2, p3).then_some(plane)
    }

    /// Redefine this plane through three points.
    ///
    /// Returns `false` and leaves the coefficients untouched when the points
    /// are collinear.
    pub fn define(&mut self, p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
        let n = p2.sub(p1).cross(&p3.sub(p1));
        let len = n.norm();
        if !len.is_finite() || len < COLLINEAR_EPS {
            return false;
        }

        let sign = if n.z < 0.0 { -1.0 } else { 1.0 };
        let scale = sign / len;
        self.a = n.x * scale;
        self.b = n.y * scale;
        self.c = n.z * scale;
        self.d = -(self.a * p1.x + self.b * p1.y + self.c * p1.z);
        true
    }

    /// True when the normal has (near) zero length
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal_vector().norm() < COLLINEAR_EPS
    }

    /// (A, B, C)
    #[inline]
    pub fn normal_vector(&self) -> Point3 {
        Point3::new(self.a, self.b, self.c)
    }

    /// Angle between the normal and vertical, in [0, π].
    ///
    /// 0 is level ground, π/2 a vertical wall. A zero normal yields 0.
    pub fn normal_angle(&self) -> f64 {
        let horizontal = self.a.hypot(self.b);
        if horizontal == 0.0 && self.c == 0.0 {
            return 0.0;
        }
        horizontal.atan2(self.c)
    }

    /// Signed distance, positive on the side the normal points to (up)
    #[inline]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        let len = self.normal_vector().norm();
        if len == 0.0 {
            return 0.0;
        }
        (self.a * p.x + self.b * p.y + self.c * p.z + self.d) / len
    }

    /// Unsigned distance
    #[inline]
    pub fn distance(&self, p: &Point3) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Height of the plane above `(x, y)`, `None` for a vertical plane
    pub fn z_at(&self, x: f64, y: f64) -> Option<f64> {
        if self.c.abs() < COLLINEAR_EPS {
            return None;
        }
        Some(-(self.a * x + self.b * y + self.d) / self.c)
    }
}

/// Fits supporting planes to contact areas on a terrain grid
pub struct PlaneFitter<'a> {
    grid: &'a TerrainGrid,
}

impl<'a> PlaneFitter<'a> {
    pub fn new(grid: &'a TerrainGrid) -> Self {
        Self { grid }
    }

    /// Fit a supporting plane to the given cells.
    ///
    /// Every cell must be inside the grid and passable. Exactly three cells
    /// define the plane directly with no refinement.
    pub fn fit(&self, area: &[GridCoord]) -> Result<Plane, PlaneFitError> {
        trace!("[PlaneFit] fit: {} points", area.len());

        if area.len() < 3 {
            debug!("[PlaneFit] FAILED: only {} points", area.len());
            return Err(PlaneFitError::TooFewPoints { found: area.len() });
        }

        let mut points = Vec::with_capacity(area.len());
        for &cell in area {
            let z = match self.grid.value(cell) {
                None => {
                    debug!("[PlaneFit] FAILED: ({},{}) out of bounds", cell.x, cell.y);
                    return Err(PlaneFitError::OutOfBounds(cell));
                }
                Some(v) if v.is_infinite() => {
                    debug!("[PlaneFit] FAILED: ({},{}) is an obstacle", cell.x, cell.y);
                    return Err(PlaneFitError::ObstacleInArea(cell));
                }
                Some(v) => v,
            };
            points.push(Point3::from_cell(cell, z));
        }

        // Highest first; stable so equal heights keep input order
        points.sort_by(|p, q| q.z.partial_cmp(&p.z).unwrap_or(Ordering::Equal));

        let mut vertices = seed_triangle(&points).ok_or_else(|| {
            debug!("[PlaneFit] FAILED: collinear area");
            PlaneFitError::Collinear
        })?;
        let mut plane = plane_of(&points, vertices).ok_or(PlaneFitError::Collinear)?;

        if points.len() == 3 {
            return Ok(plane);
        }

        let mut iterations = 0;
        while iterations < MAX_REFINE_ITERATIONS {
            iterations += 1;

            let Some(candidate) = highest_above(&points, vertices, &plane) else {
                break;
            };

            let current_total = total_distance(&points, vertices, &plane);
            let mut best: Option<([usize; 3], Plane, f64)> = None;

            for k in 0..3 {
                let mut trial = vertices;
                trial[k] = candidate;
                let Some(trial_plane) = plane_of(&points, trial) else {
                    continue;
                };
                let total = total_distance(&points, trial, &trial_plane);
                let improves = match &best {
                    Some((_, _, best_total)) => total < *best_total,
                    None => total < current_total,
                };
                if improves {
                    best = Some((trial, trial_plane, total));
                }
            }

            match best {
                Some((trial, trial_plane, _)) => {
                    vertices = trial;
                    plane = trial_plane;
                }
                None => break,
            }
        }

        trace!(
            "[PlaneFit] done after {} iterations, angle={:.4}",
            iterations,
            plane.normal_angle()
        );
        Ok(plane)
    }

    /// Angle between the fitted plane's normal and vertical
    pub fn stand_angle(&self, area: &[GridCoord]) -> Result<f64, PlaneFitError> {
        self.fit(area).map(|p| p.normal_angle())
    }
}

/// Indices of the seed triangle in a height-sorted point list
fn seed_triangle(points: &[Point3]) -> Option<[usize; 3]> {
    let top = &points[0];

    let mut far = 0;
    let mut far_dist = 0.0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let d = top.horizontal_distance(p);
        if d > far_dist {
            far = i;
            far_dist = d;
        }
    }
    if far == 0 {
        return None;
    }

    let edge = points[far].sub(top);
    let mut wide = 0;
    let mut wide_area = COLLINEAR_EPS;
    for (i, p) in points.iter().enumerate().skip(1) {
        if i == far {
            continue;
        }
        let area = edge.cross(&p.sub(top)).norm();
        if area > wide_area {
            wide = i;
            wide_area = area;
        }
    }
    if wide == 0 {
        return None;
    }

    Some([0, far, wide])
}

fn plane_of(points: &[Point3], v: [usize; 3]) -> Option<Plane> {
    Plane::through(&points[v[0]], &points[v[1]], &points[v[2]])
}

/// Non-vertex point with the greatest distance strictly above the plane
fn highest_above(points: &[Point3], vertices: [usize; 3], plane: &Plane) -> Option<usize> {
    let mut best = None;
    let mut best_dist = ABOVE_EPS;
    for (i, p) in points.iter().enumerate() {
        if vertices.contains(&i) {
            continue;
        }
        let d = plane.signed_distance(p);
        if d > best_dist {
            best = Some(i);
            best_dist = d;
        }
    }
    best
}

fn total_distance(points: &[Point3], vertices: [usize; 3], plane: &Plane) -> f64 {
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| !vertices.contains(i))
        .map(|(_, p)| plane.distance(p))
        .sum()
}
