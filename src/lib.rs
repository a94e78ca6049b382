//! COVID-19 country statistics chart
//!
//! Reads a CSV of per-country counters, validates every row, sorts the
//! records by one counter and draws a horizontal bar chart of the first ten.
//! The pipeline is strictly linear: read, parse, sort, render.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

pub mod record;
pub mod tokenizer;
pub mod validate;
pub mod parser;
pub mod sorter;
pub mod chart;

pub mod reader;
pub mod prompt;
pub mod logging;

// Re-export commonly used types
pub use chart::{BarChart, ChartReport};
pub use config::{ChartConfig, ChartConfigBuilder, Field, SortOrder, SortSpec};
pub use error::{ChartContext, ChartError, ChartResult};
pub use parser::DatasetParser;
pub use record::Record;
pub use sorter::Sorter;

use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const USAGE_FAILURE: i32 = 2;
/// Unreadable, empty or malformed input
pub const DATA_FAILURE: i32 = 69;

/// Parse, sort and chart already-loaded CSV text
pub fn chart_from_str(content: &str, config: &ChartConfig) -> ChartResult<ChartReport> {
    let mut dataset = DatasetParser::default().parse(content)?;
    let field = Sorter::new(config.sort_spec()).sort(&mut dataset);
    BarChart::new(config.bar_width, config.top).render(&dataset, field)
}

/// Run the whole pipeline according to configuration
pub fn run(config: &ChartConfig) -> ChartResult<i32> {
    config.validate()?;

    let input = reader::InputText::open(&config.input_file)?;
    let report = chart_from_str(input.as_str()?, config)?;

    let mut output: Box<dyn Write> = if let Some(output_file) = &config.output_file {
        Box::new(BufWriter::new(
            File::create(output_file).with_file_context(output_file)?,
        ))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };
    write!(output, "{report}")?;
    output.flush()?;

    info!(
        input = input.name(),
        field = config.field.cli_name(),
        order = %config.order,
        bar_weightage = report.bar_weightage(),
        to_stdout = config.writing_to_stdout(),
        "chart written"
    );
    Ok(EXIT_SUCCESS)
}
