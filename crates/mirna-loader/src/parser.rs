//! Streaming parser for interaction table files.
//!
//! Lines are split on tabs by the `csv` reader, and each field is further
//! split on whitespace, so any run of tabs or spaces separates tokens.
//! There is no header, quoting or escaping. Bytes that are not valid UTF-8
//! are replaced with U+FFFD rather than failing the load.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder};
use mirna_types::MapRecord;

use crate::types::{MapError, MapResult};

/// A streaming parser over the records of one mapping file.
///
/// Whitespace-only lines are skipped and counted; fully empty lines are
/// dropped by the reader itself.
pub struct MapParser<R: Read> {
    reader: Reader<R>,
    records_read: usize,
    blank_records: usize,
}

impl MapParser<BufReader<File>> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns [`MapError::FileNotFound`] if the file does not exist or
    /// cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path = path.as_ref();
        let not_found = || MapError::FileNotFound {
            path: path.display().to_string(),
        };

        if !path.is_file() {
            return Err(not_found());
        }

        let file = File::open(path).map_err(|_| not_found())?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> MapParser<R> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self {
            reader,
            records_read: 0,
            blank_records: 0,
        }
    }

    /// Returns the number of non-empty lines read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Returns the number of whitespace-only lines skipped so far.
    pub fn blank_records(&self) -> usize {
        self.blank_records
    }
}

impl<R: Read> Iterator for MapParser<R> {
    type Item = MapResult<MapRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = ByteRecord::new();
        loop {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    let fields: Vec<_> = record.iter().map(String::from_utf8_lossy).collect();
                    if fields.iter().any(|f| matches!(f, Cow::Owned(_))) {
                        tracing::debug!("Invalid UTF-8 replaced in record {}", self.records_read);
                    }
                    let tokens = fields.iter().flat_map(|f| f.split_whitespace());
                    match MapRecord::from_tokens(tokens) {
                        Some(parsed) => return Some(Ok(parsed)),
                        None => {
                            self.blank_records += 1;
                            continue;
                        }
                    }
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (Vec<MapRecord>, usize) {
        let mut parser = MapParser::from_reader(input.as_bytes());
        let records = parser.by_ref().collect::<MapResult<Vec<_>>>().unwrap();
        (records, parser.blank_records())
    }

    #[test]
    fn test_parse_tab_delimited() {
        let (records, _) = parse("GENE1\tMIR1\tMIR2\nGENE2\tMIR3\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "GENE1");
        assert_eq!(records[0].values, vec!["MIR1", "MIR2"]);
        assert_eq!(records[1].values, vec!["MIR3"]);
    }

    #[test]
    fn test_parse_uppercases_tokens() {
        let (records, _) = parse("hsa-mir-21\tp04637\tQ9y6k9\n");
        assert_eq!(records[0].key, "HSA-MIR-21");
        assert_eq!(records[0].values, vec!["P04637", "Q9Y6K9"]);
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        let (records, _) = parse("GENE1  MIR1\t\tMIR2 \t MIR3\n");
        assert_eq!(records[0].key, "GENE1");
        assert_eq!(records[0].values, vec!["MIR1", "MIR2", "MIR3"]);
    }

    #[test]
    fn test_parse_key_only_line() {
        let (records, _) = parse("LONELY\nGENE1\tMIR1\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "LONELY");
        assert!(records[0].values.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let (records, blanks) = parse("\nGENE1\tMIR1\n\n   \n\t\nGENE2\tMIR2\n");
        assert_eq!(records.len(), 2);
        assert_eq!(blanks, 2);
    }

    #[test]
    fn test_parse_crlf_and_missing_final_newline() {
        let (records, _) = parse("GENE1\tMIR1\r\nGENE2\tMIR2");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].values, vec!["MIR1"]);
        assert_eq!(records[1].values, vec!["MIR2"]);
    }

    #[test]
    fn test_parse_quotes_are_literal() {
        let (records, _) = parse("\"GENE1\"\tMIR1\n");
        assert_eq!(records[0].key, "\"GENE1\"");
    }

    #[test]
    fn test_parse_invalid_utf8_is_replaced() {
        let input: &[u8] = b"GENE1\tMIR1\nCAF\xe9\tMIR2\nGENE2\tMIR3\n";
        let records = MapParser::from_reader(input)
            .collect::<MapResult<Vec<_>>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].key, "GENE1");
        assert_eq!(records[1].key, "CAF\u{FFFD}");
        assert_eq!(records[1].values, vec!["MIR2"]);
        assert_eq!(records[2].values, vec!["MIR3"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geneMap.txt");

        match MapParser::from_path(&path) {
            Err(MapError::FileNotFound { path: reported }) => {
                assert!(reported.ends_with("geneMap.txt"));
            }
            other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_path_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MapParser::from_path(dir.path()),
            Err(MapError::FileNotFound { .. })
        ));
    }
}
