use serde::Serialize;
use std::fmt;

/// Immutable snapshot of one tracker's findings: a name, a human-readable
/// description, and an ordered list of metric-key / value pairs. Produced
/// once per tracker at the end of a run and never mutated.
///
/// Ratio-style values use `f64::NAN` as the defined sentinel when the
/// tracker observed nothing to divide by.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: &'static str,
    pub description: &'static str,
    pub entries: Vec<(&'static str, f64)>,
}

impl Report {
    pub fn new(
        name: &'static str,
        description: &'static str,
        entries: Vec<(&'static str, f64)>,
    ) -> Self {
        Self {
            name,
            description,
            entries,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} \n|    {}", self.name, self.description)?;
        for (key, value) in &self.entries {
            write!(f, "\n|     {}:\t {}", key, value)?;
        }
        Ok(())
    }
}
