use crate::sbom_generation::domain::DepGraphRecord;
use thiserror::Error;

const DATA_MARKER: &[u8] = b"DepGraph data:";
const TARGET_MARKER: &[u8] = b"DepGraph target:";
const END_MARKER: &[u8] = b"DepGraph end";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepGraphParseError {
    #[error("no dependency graph output")]
    EmptyOutput,

    #[error("zero matches found in output: no dependency graph delimiters present")]
    MalformedOutput,
}

/// Extracts depgraph records from the text the legacy CLI prints.
///
/// Every non-overlapping `DepGraph data: <json> DepGraph target: <label> DepGraph end`
/// block yields one record, in order of appearance. The JSON payload is kept
/// byte-for-byte (it may span lines and keeps its surrounding whitespace);
/// the target label is trimmed.
pub struct DepGraphParser;

impl DepGraphParser {
    pub fn parse(output: &[u8]) -> Result<Vec<DepGraphRecord>, DepGraphParseError> {
        if output.is_empty() {
            return Err(DepGraphParseError::EmptyOutput);
        }

        let records: Vec<DepGraphRecord> = RecordScanner::new(output).collect();
        if records.is_empty() {
            return Err(DepGraphParseError::MalformedOutput);
        }

        Ok(records)
    }
}

/// Finite scanner over the raw byte stream.
///
/// Each step looks for the next data marker, then the first target marker
/// after it, then the first end marker after that. A block missing either
/// closing marker ends the scan, since no later block can complete either.
struct RecordScanner<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> RecordScanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }
}

impl Iterator for RecordScanner<'_> {
    type Item = DepGraphRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let data_start = self.position + find(&self.input[self.position..], DATA_MARKER)?;
        let payload_start = data_start + DATA_MARKER.len();

        let payload_end = payload_start + find(&self.input[payload_start..], TARGET_MARKER)?;
        let target_start = payload_end + TARGET_MARKER.len();

        let target_end = target_start + find(&self.input[target_start..], END_MARKER)?;
        self.position = target_end + END_MARKER.len();

        let payload = self.input[payload_start..payload_end].to_vec();
        let target = String::from_utf8_lossy(&self.input[target_start..target_end]);

        Some(DepGraphRecord::new(payload, target.trim()))
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
