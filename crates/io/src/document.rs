// In-memory representation of a parsed delimited file

/// One line of the input file, split into fields.
pub type Row = Vec<String>;

/// All rows of the input file, in order.
///
/// Row 0 is treated as the header row when writing; there is no check
/// that it actually differs from the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True when the input parsed to zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in fields. Rows may be ragged.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(rows: &[&[&str]]) -> Document {
        Document::new(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn empty_document() {
        let d = Document::default();
        assert!(d.is_empty());
        assert_eq!(d.row_count(), 0);
        assert_eq!(d.col_count(), 0);
    }

    #[test]
    fn ragged_rows_report_widest() {
        let d = doc(&[&["a", "b"], &["1", "2", "3"], &["x"]]);
        assert!(!d.is_empty());
        assert_eq!(d.row_count(), 3);
        assert_eq!(d.col_count(), 3);
    }
}
