use crate::error::KgResult;
use crate::geometry::{KeyGrid, RowSpec};
use std::fmt;

/// A grid specification bound to a character placement: the unit of
/// assessment. Immutable once constructed; the specification is retained so
/// trackers can build auxiliary grids with the same physical shape.
pub struct Layout {
    grid_spec: Vec<RowSpec>,
    grid: KeyGrid,
}

impl Layout {
    pub fn new(grid_spec: &[RowSpec], key_placement: &str) -> KgResult<Self> {
        let mut grid = KeyGrid::new(grid_spec)?;
        grid.fill_with(key_placement)?;
        Ok(Self {
            grid_spec: grid_spec.to_vec(),
            grid,
        })
    }

    pub fn grid(&self) -> &KeyGrid {
        &self.grid
    }

    pub fn grid_spec(&self) -> &[RowSpec] {
        &self.grid_spec
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
