use crate::error::KgResult;
use crate::geometry::RowSpec;
use crate::layout::Layout;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The ortholinear split shape every built-in placement targets:
///
/// ```text
/// 5----  5-----
/// 5----  6------
/// 5----  5-----
/// ```
pub fn ortho_split_spec() -> Vec<RowSpec> {
    vec![
        RowSpec::Split { left: 5, right: 5 },
        RowSpec::Split { left: 5, right: 6 },
        RowSpec::Split { left: 5, right: 5 },
    ]
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Colemak,
    Dvorak,
}

impl KnownLayout {
    /// Placement string for the 31-key ortho split shape. Spaces mark the
    /// hand gap in each row.
    pub fn placement(&self) -> &'static str {
        match self {
            Self::Qwerty => concat!("qwert yuiop", "asdfg hjkl;'", "zxcvb nm,./"),
            Self::Colemak => concat!("qwfpg jluy;", "arstd hneio'", "zxcvb km,./"),
            Self::Dvorak => concat!("',.py fgcrl", "aoeui dhtns-", ";qjkx bmwvz"),
        }
    }

    pub fn layout(&self) -> KgResult<Layout> {
        Layout::new(&ortho_split_spec(), self.placement())
    }
}

pub fn all_layouts() -> Vec<KnownLayout> {
    KnownLayout::iter().collect()
}
