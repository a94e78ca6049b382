//! Line tokenizer for the country statistics CSV format
//!
//! Every line starts with a double-quoted country name. The name may itself
//! contain the delimiter (`"Korea, South"`), so a plain split is not enough:
//! a token holding a lone quote marks the start of a name that was cut in
//! pieces, and the whole quoted span is recovered from the original line.
//! Quote characters are kept in the produced fields.

use crate::error::{ChartError, ChartResult};

/// Quote character marking the name field
pub const QUOTE: char = '"';

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Number of columns a well-formed line splits into
pub const EXPECTED_FIELDS: usize = 11;

/// Splits one line into its fields
#[derive(Debug, Clone, Copy)]
pub struct LineTokenizer {
    delimiter: char,
    expected_fields: usize,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl LineTokenizer {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            expected_fields: EXPECTED_FIELDS,
        }
    }

    /// Split `line` into exactly eleven fields.
    ///
    /// `row` is the 1-based line number used in error reports. A delimiter at
    /// the very end of the line does not open an extra empty field.
    pub fn tokenize<'a>(&self, line: &'a str, row: usize) -> ChartResult<Vec<&'a str>> {
        if !line.starts_with(QUOTE) {
            return Err(ChartError::format(
                row,
                "line must start with a quoted country name",
            ));
        }

        let mut fields = Vec::with_capacity(self.expected_fields);
        // The name is emitted once, from its opening piece
        let mut name_resolved = false;
        let mut inside_name = false;

        for token in line.split_terminator(self.delimiter) {
            if inside_name {
                // Pieces of the name already emitted; the closing one holds the quote
                if token.contains(QUOTE) {
                    inside_name = false;
                }
                continue;
            }

            if !token.contains(QUOTE) || is_name_token_complete(token) {
                fields.push(token);
                continue;
            }

            if name_resolved {
                continue;
            }

            let name = complete_name_token(line)
                .ok_or_else(|| ChartError::format(row, "unterminated quoted name"))?;
            fields.push(name);
            name_resolved = true;
            inside_name = true;
        }

        if fields.len() != self.expected_fields {
            return Err(ChartError::format(
                row,
                &format!(
                    "expected {} fields, found {}",
                    self.expected_fields,
                    fields.len()
                ),
            ));
        }

        Ok(fields)
    }
}

/// A token is complete when it holds exactly two quote characters
#[inline]
pub fn is_name_token_complete(token: &str) -> bool {
    token.matches(QUOTE).count() == 2
}

/// Recover the quoted name at the start of `line`, up to and including the
/// second quote character
pub fn complete_name_token(line: &str) -> Option<&str> {
    let closing = line.get(1..)?.find(QUOTE)? + 1;
    Some(&line[..=closing])
}
