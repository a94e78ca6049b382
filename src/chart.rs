//! Horizontal bar chart of the leading records
//!
//! Bars are scaled so the largest value fits in the console width: each `#`
//! stands for `bar_weightage` cases, computed with integer division.

use crate::config::{Field, DEFAULT_BAR_WIDTH, DEFAULT_TOP_COUNT};
use crate::error::{ChartError, ChartResult};
use crate::record::Record;
use itertools::Itertools;
use std::fmt;
use tracing::debug;

const BAR_CHAR: char = '#';
const SEPARATOR_CHAR: char = '-';
const SPACER_LINE: &str = "   |";

/// Renders the first `top` records of a sorted dataset
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    width: usize,
    top: usize,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_WIDTH, DEFAULT_TOP_COUNT)
    }
}

impl BarChart {
    pub fn new(width: usize, top: usize) -> Self {
        Self { width, top }
    }

    /// Render the chart for `field` from the first records of `dataset`.
    ///
    /// The dataset is expected to be sorted already and is not modified.
    pub fn render(&self, dataset: &[Record], field: Field) -> ChartResult<ChartReport> {
        if dataset.is_empty() {
            return Err(ChartError::precondition("dataset is empty"));
        }
        if dataset.len() < self.top {
            return Err(ChartError::precondition(&format!(
                "need at least {} records, found {}",
                self.top,
                dataset.len()
            )));
        }

        let shown = &dataset[..self.top];
        let values: Vec<u64> = shown.iter().map(|r| field.value(r)).collect();
        let scale = BarScale::compute(&values, self.width);

        let mut lines = Vec::with_capacity(shown.len() * 2 + 2);
        for (record, &value) in shown.iter().zip(values.iter()) {
            let bar = scale.bar_len(value);
            lines.push(format!(
                "{} | {}",
                record.display_code(),
                BAR_CHAR.to_string().repeat(bar)
            ));
            lines.push(SPACER_LINE.to_string());
        }

        lines.push(SEPARATOR_CHAR.to_string().repeat(self.width));
        lines.push(format!(
            "{}; Each {} is approx. {} cases.",
            field.label(),
            BAR_CHAR,
            scale.bar_weightage
        ));

        debug!(
            field = field.cli_name(),
            max_value = scale.max_value,
            bar_weightage = scale.bar_weightage,
            "chart rendered"
        );

        Ok(ChartReport {
            field,
            lines,
            max_value: scale.max_value,
            max_bar_len: scale.max_bar_len,
            bar_weightage: scale.bar_weightage,
        })
    }
}

/// Scaling derived from the charted values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BarScale {
    max_value: u64,
    max_bar_len: u64,
    bar_weightage: u64,
}

impl BarScale {
    fn compute(values: &[u64], width: usize) -> Self {
        let max_value = values.iter().copied().max().unwrap_or(0);
        let max_bar_len = max_value.min(width as u64);
        let bar_weightage = if max_bar_len == 0 {
            0
        } else {
            max_value / max_bar_len
        };
        Self {
            max_value,
            max_bar_len,
            bar_weightage,
        }
    }

    fn bar_len(&self, value: u64) -> usize {
        if self.bar_weightage == 0 {
            0
        } else {
            // Weightage rounds down, so the longest bar may exceed the width
            (value / self.bar_weightage) as usize
        }
    }
}

/// Rendered chart lines plus the numbers behind them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartReport {
    field: Field,
    lines: Vec<String>,
    max_value: u64,
    max_bar_len: u64,
    bar_weightage: u64,
}

impl ChartReport {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn max_bar_len(&self) -> u64 {
        self.max_bar_len
    }

    /// Cases represented by one `#`
    pub fn bar_weightage(&self) -> u64 {
        self.bar_weightage
    }
}

impl fmt::Display for ChartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.lines.iter().join("\n"))
    }
}
