// CSV/TSV import: decode, sniff delimiter, parse

use std::path::Path;

use crate::document::{Document, Row};

pub const DELIM_COMMA: u8 = b',';
pub const DELIM_TAB: u8 = b'\t';

/// Detect the field delimiter by counting commas vs tabs on the first line.
///
/// Tab wins only when strictly more frequent; ties fall back to comma.
/// Only the first line is sampled and quoting is ignored, so a tab inside
/// a quoted comma-delimited field can bias the count. Known limitation.
pub fn sniff_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");
    let tabs = first_line.bytes().filter(|&b| b == DELIM_TAB).count();
    let commas = first_line.bytes().filter(|&b| b == DELIM_COMMA).count();
    if tabs > commas {
        DELIM_TAB
    } else {
        DELIM_COMMA
    }
}

/// Sniff the delimiter straight from a file.
///
/// Any read failure logs a warning and defaults to comma; the caller will
/// hit the underlying error again when it parses the file for real.
pub fn detect_delimiter(path: &Path) -> u8 {
    match read_file_as_utf8(path) {
        Ok(content) => sniff_delimiter(&content),
        Err(e) => {
            log::warn!(
                "delimiter detection failed for {}: {e}; defaulting to comma",
                path.display()
            );
            DELIM_COMMA
        }
    }
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for Excel-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Read and parse a whole file, sniffing the delimiter from its first line.
pub fn import(path: &Path) -> Result<Document, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    parse(&content, delimiter)
}

/// Read and parse a whole file with a caller-chosen delimiter.
pub fn import_with_delimiter(path: &Path, delimiter: u8) -> Result<Document, String> {
    let content = read_file_as_utf8(path)?;
    parse(&content, delimiter)
}

/// Parse delimited text into rows of fields.
///
/// Rows may be ragged; fields are kept verbatim (trimming happens at
/// write time, not here).
pub fn parse(content: &str, delimiter: u8) -> Result<Document, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Row> = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("row {}: {e}", row_idx + 1))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(Document::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sniff_comma_delimiter() {
        assert_eq!(sniff_delimiter("Name,Age,City\nAlice,30,Paris\n"), DELIM_COMMA);
    }

    #[test]
    fn sniff_tab_delimiter() {
        assert_eq!(sniff_delimiter("x\ty\tz\n"), DELIM_TAB);
    }

    #[test]
    fn sniff_tie_prefers_comma() {
        // One of each on the first line
        assert_eq!(sniff_delimiter("a,b\tc\n"), DELIM_COMMA);
    }

    #[test]
    fn sniff_no_delimiters_prefers_comma() {
        assert_eq!(sniff_delimiter("just one column\n"), DELIM_COMMA);
        assert_eq!(sniff_delimiter(""), DELIM_COMMA);
    }

    #[test]
    fn sniff_samples_first_line_only() {
        // Later lines are tab-heavy but line 1 decides
        assert_eq!(sniff_delimiter("a,b\n1\t2\t3\t4\n5\t6\t7\t8\n"), DELIM_COMMA);
    }

    #[test]
    fn detect_missing_file_defaults_to_comma() {
        let dir = tempdir().unwrap();
        assert_eq!(detect_delimiter(&dir.path().join("nope.csv")), DELIM_COMMA);
    }

    #[test]
    fn detect_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        fs::write(&path, "x\ty\tz\n1\t2\t3\n").unwrap();
        assert_eq!(detect_delimiter(&path), DELIM_TAB);
    }

    #[test]
    fn import_comma_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

        let doc = import(&path).unwrap();
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.col_count(), 3);
        assert_eq!(doc.rows()[0], vec!["a", "b", "c"]);
        assert_eq!(doc.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn import_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let doc = import(&path).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn import_keeps_fields_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, " padded ,007\n").unwrap();

        let doc = import(&path).unwrap();
        assert_eq!(doc.rows()[0], vec![" padded ", "007"]);
    }

    #[test]
    fn parse_ragged_rows() {
        let doc = parse("a,b,c\n1,2\n", DELIM_COMMA).unwrap();
        assert_eq!(doc.rows()[0].len(), 3);
        assert_eq!(doc.rows()[1].len(), 2);
    }

    #[test]
    fn parse_crlf_line_endings() {
        let doc = parse("a,b\r\n1,2\r\n", DELIM_COMMA).unwrap();
        assert_eq!(doc.rows()[1], vec!["1", "2"]);
    }

    #[test]
    fn import_windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "café,1" with 0xE9 (é in Windows-1252, invalid UTF-8)
        fs::write(&path, b"caf\xe9,1\n").unwrap();

        let doc = import(&path).unwrap();
        assert_eq!(doc.rows()[0], vec!["caf\u{e9}", "1"]);
    }
}
