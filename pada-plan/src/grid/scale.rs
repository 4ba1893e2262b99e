//! Fine-cell to coarse-block mapping.

use crate::core::GridCoord;

use super::error::GridError;

/// Slack applied before rounding so that strides like `1 / 0.3` map
/// cell boundaries consistently in both directions.
const BOUNDARY_EPS: f64 = 1e-9;

/// Many-to-one mapping from fine cells to coarse blocks.
///
/// A block covers `stride` fine cells along each axis. Fine cell `c` belongs
/// to block `floor(c / stride)`. The mapping is lossy: restoring a block gives
/// back a bounding pair of fine corners or a representative center, never
/// the exact input cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockScale {
    stride: f64,
}

impl BlockScale {
    /// Smallest accepted stride; finer blocks would blow up the coarse grid
    pub const MIN_STRIDE: f64 = 1e-3;

    /// Create from a block stride in fine cells (finite, at least [`Self::MIN_STRIDE`])
    pub fn new(stride: f64) -> Result<Self, GridError> {
        if stride.is_finite() && stride >= Self::MIN_STRIDE {
            Ok(Self { stride })
        } else {
            Err(GridError::InvalidScale(stride))
        }
    }

    /// Create from a down-scaling ratio, e.g. `0.5` halves each dimension
    pub fn from_ratio(ratio: f64) -> Result<Self, GridError> {
        if ratio.is_finite() && ratio > 0.0 {
            Self::new(1.0 / ratio)
        } else {
            Err(GridError::InvalidScale(ratio))
        }
    }

    /// Fine cells per block along each axis
    #[inline]
    pub fn stride(&self) -> f64 {
        self.stride
    }

    /// Down-scaling ratio (reciprocal of the stride)
    #[inline]
    pub fn ratio(&self) -> f64 {
        1.0 / self.stride
    }

    /// Block containing a fine cell
    #[inline]
    pub fn block_of(&self, cell: GridCoord) -> GridCoord {
        GridCoord::new(self.down(cell.x), self.down(cell.y))
    }

    /// Number of blocks needed to cover `len` fine cells.
    ///
    /// At least one block for any nonempty axis, at most `i32::MAX`.
    #[inline]
    pub fn coarse_len(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((len as f64 / self.stride) - BOUNDARY_EPS)
            .ceil()
            .clamp(1.0, i32::MAX as f64) as usize
    }

    /// Representative fine cell of a block, `floor((b + 0.5) · stride)`.
    ///
    /// Not clamped; callers clamp against their grid.
    #[inline]
    pub fn center_of(&self, block: GridCoord) -> GridCoord {
        GridCoord::new(
            ((block.x as f64 + 0.5) * self.stride).floor() as i32,
            ((block.y as f64 + 0.5) * self.stride).floor() as i32,
        )
    }

    /// Inclusive fine-cell corners `(min, max)` covered by a block.
    ///
    /// Not clamped. The max corner never precedes the min corner.
    pub fn corners(&self, block: GridCoord) -> (GridCoord, GridCoord) {
        let (x0, x1) = self.span(block.x);
        let (y0, y1) = self.span(block.y);
        (GridCoord::new(x0, y0), GridCoord::new(x1, y1))
    }

    /// Side of the roughness window used when down-sampling a block
    #[inline]
    pub fn window_side(&self) -> usize {
        (self.stride.floor() as usize).max(1)
    }

    #[inline]
    fn down(&self, v: i32) -> i32 {
        (v as f64 / self.stride + BOUNDARY_EPS).floor() as i32
    }

    #[inline]
    fn up(&self, b: i32) -> i32 {
        (b as f64 * self.stride - BOUNDARY_EPS).ceil() as i32
    }

    fn span(&self, b: i32) -> (i32, i32) {
        let lo = self.up(b);
        let hi = (self.up(b + 1) - 1).max(lo);
        (lo, hi)
    }
}
