//! Dataset parser: turns the whole CSV text into records
//!
//! Parsing is all-or-nothing. The first malformed row aborts the run and no
//! partial dataset is returned.

use crate::error::{ChartError, ChartResult};
use crate::record::Record;
use crate::tokenizer::LineTokenizer;
use crate::validate::parse_counter;
use tracing::{debug, trace};

pub const NAME_COLUMN: usize = 0;
pub const CODE_COLUMN: usize = 1;

/// Counter columns in `[new_confirmed, new_deaths, new_recovered,
/// total_confirmed, total_deaths, total_recovered]` order. Columns 2, 6 and
/// 7 are present in the file but unused.
pub const COUNTER_COLUMNS: [usize; 6] = [3, 4, 5, 8, 9, 10];

/// Builds the record list from file content
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetParser {
    tokenizer: LineTokenizer,
}

impl DatasetParser {
    pub fn new(tokenizer: LineTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Parse `content` into records, in file order.
    ///
    /// The first line is the header: it must tokenize into eleven fields like
    /// any other line but is then dropped. Rows are numbered from 1 with the
    /// header as row 1, so the first data row is row 2.
    pub fn parse(&self, content: &str) -> ChartResult<Vec<Record>> {
        let mut dataset = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let row = index + 1;
            let fields = self.tokenizer.tokenize(line, row)?;

            if index == 0 {
                trace!(row, "header accepted");
                continue;
            }

            let record = build_record(&fields, row)?;
            trace!(row, name = record.name(), "parsed row");
            dataset.push(record);
        }

        debug!(records = dataset.len(), "dataset parsed");
        Ok(dataset)
    }
}

/// Validate the counter columns of one tokenized row and build its record
fn build_record(fields: &[&str], row: usize) -> ChartResult<Record> {
    let mut counters = [0u64; 6];
    for (slot, &column) in counters.iter_mut().zip(COUNTER_COLUMNS.iter()) {
        let token = fields[column];
        *slot = parse_counter(token).ok_or_else(|| ChartError::validation(row, column, token))?;
    }

    Ok(Record::new(
        fields[NAME_COLUMN],
        fields[CODE_COLUMN],
        counters,
    ))
}
