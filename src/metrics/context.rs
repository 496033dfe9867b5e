use crate::config::AssessConfig;
use crate::error::{KeyGaugeError, KgResult};
use crate::geometry::{KeyCoord, KeyGrid};
use crate::layout::Layout;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Hand {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
}

/// One of the ten fingers. The column table below never assigns thumbs;
/// they rest on the space bar, which is not a grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    LeftThumb,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

impl Finger {
    pub fn hand(&self) -> Hand {
        match self {
            Self::LeftPinky | Self::LeftRing | Self::LeftMiddle | Self::LeftIndex
            | Self::LeftThumb => Hand::Left,
            _ => Hand::Right,
        }
    }

    /// Fixed column -> finger table for the ortho split shape. Columns past
    /// the table are unassigned.
    pub fn from_column(col: usize) -> Option<Self> {
        match col {
            0 => Some(Self::LeftPinky),
            1 => Some(Self::LeftRing),
            2 => Some(Self::LeftMiddle),
            3 | 4 => Some(Self::LeftIndex),
            5 | 6 => Some(Self::RightIndex),
            7 => Some(Self::RightMiddle),
            8 => Some(Self::RightRing),
            9 | 10 => Some(Self::RightPinky),
            _ => None,
        }
    }
}

/// Shared per-run state every tracker evaluates against: the assessed
/// layout, the auxiliary ease grid (same physical shape, filled with the
/// configured cost table), and the home row. Built once per assessment run.
pub struct MetricContext<'a> {
    layout: &'a Layout,
    ease_grid: KeyGrid,
    home_row: usize,
}

impl<'a> MetricContext<'a> {
    pub fn new(layout: &'a Layout, config: &AssessConfig) -> KgResult<Self> {
        if let Some(bad) = config
            .ease_placement
            .chars()
            .find(|c| *c != ' ' && !c.is_ascii_digit())
        {
            return Err(KeyGaugeError::Validation(format!(
                "ease placement must contain only digits and spaces, found {:?}",
                bad,
            )));
        }

        let mut ease_grid = KeyGrid::new(layout.grid_spec())?;
        ease_grid.fill_with(&config.ease_placement)?;

        Ok(Self {
            layout,
            ease_grid,
            home_row: config.home_row,
        })
    }

    /// Coordinate of `key` on the assessed layout, shift-normalized.
    pub fn coord(&self, key: char) -> Option<KeyCoord> {
        self.layout.grid().coord_of(key)
    }

    pub fn finger(&self, key: char) -> Option<Finger> {
        self.coord(key).and_then(|c| Finger::from_column(c.col))
    }

    pub fn hand(&self, key: char) -> Option<Hand> {
        self.finger(key).map(|f| f.hand())
    }

    pub fn same_finger(&self, a: char, b: char) -> bool {
        match (self.finger(a), self.finger(b)) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        }
    }

    /// Ease cost of the physical position holding `key`, lower is better.
    pub fn key_ease(&self, key: char) -> Option<u32> {
        let coord = self.coord(key)?;
        self.ease_grid.at(coord.row, coord.col)?.to_digit(10)
    }

    pub fn home_row_distance(&self, key: char) -> Option<usize> {
        self.coord(key).map(|c| c.row.abs_diff(self.home_row))
    }
}
