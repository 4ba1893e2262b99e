//! Foot contact cell set.

use crate::core::{GridCoord, GridPoint};

/// Set of grid cells a foot touches.
///
/// Cells are kept sorted and deduplicated, so two footprints over the same
/// cells compare equal regardless of construction order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Footprint {
    cells: Vec<GridCoord>,
}

impl Footprint {
    /// Build from any cell list, dropping duplicates
    pub fn new(cells: impl IntoIterator<Item = GridCoord>) -> Self {
        let mut cells: Vec<GridCoord> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    /// Axis-aligned rectangle of cells with inclusive corners
    pub fn rect(min: GridCoord, max: GridCoord) -> Self {
        Self::new(
            (min.x..=max.x).flat_map(|x| (min.y..=max.y).map(move |y| GridCoord::new(x, y))),
        )
    }

    #[inline]
    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: GridCoord) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Shift every cell in place
    pub fn translate(&mut self, offset: GridCoord) {
        // uniform shift preserves sort order
        for c in &mut self.cells {
            *c = *c + offset;
        }
    }

    /// Shifted copy
    pub fn translated(&self, offset: GridCoord) -> Footprint {
        let mut out = self.clone();
        out.translate(offset);
        out
    }

    /// Mean cell position, `None` when empty
    pub fn centroid(&self) -> Option<GridPoint> {
        if self.cells.is_empty() {
            return None;
        }
        let n = self.cells.len() as f64;
        let sum = self
            .cells
            .iter()
            .fold(GridPoint::ZERO, |acc, c| acc + c.to_point());
        Some(sum * (1.0 / n))
    }
}
