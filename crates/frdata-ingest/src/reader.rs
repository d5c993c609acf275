//! Delimited-text parsing into a [`RawTable`].

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use tracing::{debug, warn};

use frdata_model::{DataError, RawTable, Result};

/// Reads a local file fully and parses it.
///
/// The file handle is released before parsing starts.
pub fn read_file(path: &Path, delimiter: u8, encoding: &str) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataError::NotFound {
                source_name: path.display().to_string(),
            }
        } else {
            DataError::unknown(format!("failed to read {}: {e}", path.display()))
        }
    })?;
    parse_bytes(&bytes, delimiter, encoding, &path.display().to_string())
}

/// Decodes `bytes` with the given encoding label and parses the delimited content.
///
/// The first non-blank record is the header. Whitespace-only records are
/// ignored; records whose field count differs from the header are skipped and
/// counted in [`RawTable::skipped_rows`].
pub fn parse_bytes(
    bytes: &[u8],
    delimiter: u8,
    encoding: &str,
    source_name: &str,
) -> Result<RawTable> {
    let text = decode(bytes, encoding)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut table: Option<RawTable> = None;
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DataError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let Some(current) = table.as_mut() else {
            table = Some(RawTable::new(record.iter().map(str::to_string).collect()));
            continue;
        };
        if record.len() != current.headers.len() {
            current.skipped_rows += 1;
            warn!(
                source = %source_name,
                record = idx + 1,
                expected = current.headers.len(),
                found = record.len(),
                "skipping malformed record"
            );
            continue;
        }
        current.push_row(record.iter().map(str::to_string).collect());
    }

    let table = table.ok_or_else(|| DataError::Parse {
        source_name: source_name.to_string(),
        message: "no header row".to_string(),
    })?;
    if table.headers.iter().all(|header| header.trim().is_empty()) {
        return Err(DataError::Parse {
            source_name: source_name.to_string(),
            message: "header row has no column names".to_string(),
        });
    }
    debug!(
        source = %source_name,
        columns = table.headers.len(),
        rows = table.row_count(),
        skipped = table.skipped_rows,
        "parsed delimited content"
    );
    Ok(table)
}

/// Decodes with BOM sniffing; a UTF-8 or UTF-16 BOM wins over the label.
fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DataError::unknown(format!("unsupported encoding '{label}'")))?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            encoding = used.name(),
            "input contained invalid byte sequences; replaced with U+FFFD"
        );
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_first_non_blank_record() {
        let table = parse_bytes(b"\n;;\nNom;Type\nA;Bar\n", b';', "utf-8", "test").unwrap();
        assert_eq!(table.headers, vec!["Nom", "Type"]);
        assert_eq!(table.rows, vec![vec!["A".to_string(), "Bar".to_string()]]);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let content = "A,B\n1,2\n3\n4,5,6\n7,8\n";
        let table = parse_bytes(content.as_bytes(), b',', "utf-8", "test").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.skipped_rows, 2);
    }

    #[test]
    fn utf8_bom_is_removed() {
        let table = parse_bytes("\u{feff}Nom,Type\nA,Bar\n".as_bytes(), b',', "utf-8", "test")
            .unwrap();
        assert_eq!(table.headers[0], "Nom");
    }

    #[test]
    fn latin1_is_decoded() {
        // "Région" in windows-1252
        let bytes = b"R\xe9gion\n\xcele-de-France\n";
        let table = parse_bytes(bytes, b',', "latin1", "test").unwrap();
        assert_eq!(table.headers, vec!["Région"]);
        assert_eq!(table.rows[0][0], "Île-de-France");
    }

    #[test]
    fn empty_content_is_a_parse_error() {
        let result = parse_bytes(b"", b',', "utf-8", "empty.csv");
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        let result = parse_bytes(b"A\n1\n", b',', "klingon", "test");
        assert!(matches!(result, Err(DataError::Unknown { .. })));
    }
}
