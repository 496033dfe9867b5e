use crate::error::{KeyGaugeError, KgResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of a grid specification.
///
/// `Split` rows carry independent left-hand and right-hand widths; `Uniform`
/// rows are a single unbroken run of keys. A specification must use one form
/// throughout; mixing them is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSpec {
    Uniform(usize),
    Split { left: usize, right: usize },
}

impl RowSpec {
    pub fn width(&self) -> usize {
        match self {
            Self::Uniform(w) => *w,
            Self::Split { left, right } => left + right,
        }
    }

    fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

/// A (row, column) position on the grid. Columns run continuously across the
/// left half, then the right half, of a split row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCoord {
    pub row: usize,
    pub col: usize,
}

impl KeyCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Stateful computation walked over every slot of a [`KeyGrid`] by
/// [`KeyGrid::apply`]. Visitors see slots in traversal order (row-major,
/// left hand then right) and are notified at the two structural boundaries.
/// A visitor never needs to know the grid dimensions.
pub trait GridVisitor {
    /// Called once per slot with its current character and coordinates.
    /// The returned character replaces the slot's contents.
    fn visit(&mut self, slot: char, coord: KeyCoord) -> char;

    /// Called between the left and right halves of a split row.
    fn hand_gap(&mut self) {}

    /// Called after the last slot of every row.
    fn row_end(&mut self) {}
}

/// Slot marker for a position no character has been placed on yet.
const EMPTY_SLOT: char = '\0';

#[derive(Debug)]
struct GridRow {
    left: Vec<char>,
    right: Vec<char>,
}

/// The physical key positions of a keyboard, split into left and right hand
/// segments per row, with bidirectional character <-> coordinate lookup.
///
/// The reverse index is derived state: it is rebuilt from the grid contents
/// after every placement, never patched incrementally.
#[derive(Debug)]
pub struct KeyGrid {
    rows: Vec<GridRow>,
    key_map: HashMap<char, KeyCoord>,
}

impl KeyGrid {
    /// Builds an empty grid from a specification. Every slot starts unfilled;
    /// call [`fill_with`](Self::fill_with) to place characters.
    ///
    /// Fails with `Config` on an empty or mixed split/uniform specification,
    /// and with `Unsupported` on an all-uniform one: uniform grids have no
    /// defined indexing semantics here and are rejected outright rather than
    /// silently mis-indexed.
    pub fn new(grid_spec: &[RowSpec]) -> KgResult<Self> {
        let first = grid_spec.first().ok_or_else(|| {
            KeyGaugeError::Config("grid specification must contain at least one row".to_string())
        })?;

        if grid_spec.iter().any(|r| r.is_split() != first.is_split()) {
            return Err(KeyGaugeError::Config(
                "grid specification mixes split and uniform row descriptors".to_string(),
            ));
        }

        if !first.is_split() {
            return Err(KeyGaugeError::Unsupported(
                "uniform (non-split) grid specifications are not implemented".to_string(),
            ));
        }

        let rows = grid_spec
            .iter()
            .map(|spec| match spec {
                RowSpec::Split { left, right } => GridRow {
                    left: vec![EMPTY_SLOT; *left],
                    right: vec![EMPTY_SLOT; *right],
                },
                RowSpec::Uniform(_) => unreachable!("uniform specs rejected above"),
            })
            .collect();

        Ok(Self {
            rows,
            key_map: HashMap::new(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of visitable key slots.
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|r| r.left.len() + r.right.len()).sum()
    }

    /// Forward lookup: the character at `(row, col)`, or `None` past the row
    /// count or the combined width of that row. Absence is a legitimate
    /// result at grid boundaries, not an error.
    pub fn at(&self, row: usize, col: usize) -> Option<char> {
        let r = self.rows.get(row)?;
        if col < r.left.len() {
            Some(r.left[col])
        } else {
            r.right.get(col - r.left.len()).copied()
        }
    }

    /// Reverse lookup: the coordinate bound to `key`, falling back to the
    /// shift-normalized counterpart when the exact character is absent. A
    /// shifted character reuses its base key's physical position.
    pub fn coord_of(&self, key: char) -> Option<KeyCoord> {
        self.key_map
            .get(&key)
            .or_else(|| unshift(key).and_then(|base| self.key_map.get(&base)))
            .copied()
    }

    /// Walks `visitor` over every slot: rows top to bottom; within a row the
    /// left half, then `hand_gap()`, then the right half; `row_end()` after
    /// each row. Each slot is replaced by the visitor's return value.
    ///
    /// This single traversal backs placement, reverse-index construction,
    /// rendering, and ease-grid filling.
    pub fn apply(&mut self, visitor: &mut dyn GridVisitor) {
        for (row_id, row) in self.rows.iter_mut().enumerate() {
            for (i, slot) in row.left.iter_mut().enumerate() {
                *slot = visitor.visit(*slot, KeyCoord::new(row_id, i));
            }
            visitor.hand_gap();
            let offset = row.left.len();
            for (i, slot) in row.right.iter_mut().enumerate() {
                *slot = visitor.visit(*slot, KeyCoord::new(row_id, offset + i));
            }
            visitor.row_end();
        }
    }

    /// Places `key_placement` onto the grid: non-space characters are
    /// assigned one per slot in traversal order; spaces are structural
    /// fillers and are skipped. The non-space length must exactly match the
    /// slot count. Rebuilds the reverse index on success.
    ///
    /// Example placement for a (5,5)/(5,6)/(5,5) grid:
    ///
    /// ```text
    /// "qwert yuiop"
    /// "asdfg hjkl;'"
    /// "zxcvb nm,./"
    /// ```
    pub fn fill_with(&mut self, key_placement: &str) -> KgResult<()> {
        let mut placer = KeyPlacer::new(key_placement);
        self.apply(&mut placer);

        if placer.exhausted {
            return Err(KeyGaugeError::Validation(format!(
                "key placement ran out of characters: {} needed, {} supplied",
                self.slot_count(),
                key_placement.chars().filter(|c| *c != ' ').count(),
            )));
        }
        if placer.keys.next().is_some() {
            return Err(KeyGaugeError::Validation(format!(
                "key placement has more characters than the grid's {} slots",
                self.slot_count(),
            )));
        }

        self.rebuild_key_map();
        Ok(())
    }

    /// All slot coordinates in traversal order.
    pub fn ordered_positions(&mut self) -> Vec<KeyCoord> {
        let mut recorder = PositionRecorder::default();
        self.apply(&mut recorder);
        recorder.positions
    }

    fn rebuild_key_map(&mut self) {
        let mut indexer = KeyIndexer::default();
        self.apply(&mut indexer);
        self.key_map = indexer.key_map;
    }
}

impl fmt::Display for KeyGrid {
    // fmt only gets &self, so rendering walks the rows directly rather than
    // going through apply; the shape must stay in sync with the traversal
    // (left, gap as tab, right, newline per row).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for c in &row.left {
                write!(f, " {}", c)?;
            }
            write!(f, "\t")?;
            for c in &row.right {
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Places characters from a placement string, skipping spaces.
struct KeyPlacer {
    keys: std::vec::IntoIter<char>,
    exhausted: bool,
}

impl KeyPlacer {
    fn new(key_placement: &str) -> Self {
        let keys: Vec<char> = key_placement.chars().filter(|c| *c != ' ').collect();
        Self {
            keys: keys.into_iter(),
            exhausted: false,
        }
    }
}

impl GridVisitor for KeyPlacer {
    fn visit(&mut self, slot: char, _coord: KeyCoord) -> char {
        match self.keys.next() {
            Some(key) => key,
            None => {
                self.exhausted = true;
                slot
            }
        }
    }
}

/// Collects the character -> coordinate reverse index.
#[derive(Default)]
struct KeyIndexer {
    key_map: HashMap<char, KeyCoord>,
}

impl GridVisitor for KeyIndexer {
    fn visit(&mut self, slot: char, coord: KeyCoord) -> char {
        if slot != EMPTY_SLOT {
            self.key_map.insert(slot, coord);
        }
        slot
    }
}

#[derive(Default)]
struct PositionRecorder {
    positions: Vec<KeyCoord>,
}

impl GridVisitor for PositionRecorder {
    fn visit(&mut self, slot: char, coord: KeyCoord) -> char {
        self.positions.push(coord);
        slot
    }
}

/// Maps a shifted character to its unshifted base key, for the punctuation
/// present on the modeled layouts. Uppercase letters lower-case.
pub fn unshift(key: char) -> Option<char> {
    if key.is_ascii_uppercase() {
        return Some(key.to_ascii_lowercase());
    }
    match key {
        ':' => Some(';'),
        '<' => Some(','),
        '>' => Some('.'),
        '?' => Some('/'),
        '"' => Some('\''),
        '_' => Some('-'),
        _ => None,
    }
}
