// src/table/mod.rs

pub mod locate;

pub use locate::extract_first_table;

/// Column labels as the source table declares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// One header row.
    Flat(Vec<String>),
    /// Two stacked header rows; `groups` is already expanded across `colspan`,
    /// so both vectors have one entry per column.
    Grouped {
        groups: Vec<String>,
        labels: Vec<String>,
    },
}

impl Header {
    /// Collapse to a single label per column (the sub-label row when grouped).
    pub fn labels(&self) -> &[String] {
        match self {
            Header::Flat(labels) => labels,
            Header::Grouped { labels, .. } => labels,
        }
    }

    pub fn width(&self) -> usize {
        self.labels().len()
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, Header::Grouped { .. })
    }
}

/// A generic grid of cells lifted out of the markup. `None` is a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub header: Header,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn flat(labels: &[&str], rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            header: Header::Flat(labels.iter().map(|s| s.to_string()).collect()),
            rows,
        }
    }
}

/// Whether a header label is a decorative spacer rather than a data column.
/// Blank labels and the `Unnamed: …` labels some exporters synthesize both count.
pub fn is_placeholder(label: &str) -> bool {
    let l = label.trim();
    l.is_empty() || l.starts_with("Unnamed")
}
