//! Dataset record types.

/// One selectable entity: a name, a resource weight, and a value.
///
/// Names are stored trimmed; matching elsewhere in the crate is
/// case-sensitive on the trimmed text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Unique identifier within one dataset.
    pub name: String,
    /// Non-negative amount consumed from the budget when selected.
    pub weight: f64,
    /// Objective contribution when selected.
    pub value: f64,
}

impl Candidate {
    /// Creates a candidate, trimming surrounding whitespace off the name.
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            weight,
            value,
        }
    }
}

/// Which columns of a dataset to read.
///
/// Header matching is exact after trimming. A column named here that is
/// absent from the file is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    /// Header of the unique-name column.
    pub name: String,
    /// Header of the weight column.
    pub weight: String,
    /// Header of the value column to optimize over.
    pub value: String,
}

impl ColumnSpec {
    /// Creates a column spec, trimming each header name.
    pub fn new(
        name: impl Into<String>,
        weight: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            weight: weight.into().trim().to_string(),
            value: value.into().trim().to_string(),
        }
    }
}
