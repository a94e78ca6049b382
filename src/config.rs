//! Configuration management for chart runs

use crate::error::{ChartError, ChartResult};
use crate::record::Record;
use std::cmp::Ordering;
use std::str::FromStr;

/// Console width, and therefore the longest bar that may be drawn
pub const DEFAULT_BAR_WIDTH: usize = 70;

/// Number of leading records shown in the chart
pub const DEFAULT_TOP_COUNT: usize = 10;

/// Widest chart accepted from the command line
pub const MAX_BAR_WIDTH: usize = 1000;

/// One of the six selectable numeric statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NewConfirmed,
    NewDeaths,
    NewRecovered,
    TotalConfirmed,
    TotalDeaths,
    TotalRecovered,
}

impl Field {
    /// All fields in menu order
    pub const ALL: [Field; 6] = [
        Field::NewConfirmed,
        Field::NewDeaths,
        Field::NewRecovered,
        Field::TotalConfirmed,
        Field::TotalDeaths,
        Field::TotalRecovered,
    ];

    /// Read this field's counter from a record
    #[inline]
    pub fn value(self, record: &Record) -> u64 {
        match self {
            Field::NewConfirmed => record.new_confirmed(),
            Field::NewDeaths => record.new_deaths(),
            Field::NewRecovered => record.new_recovered(),
            Field::TotalConfirmed => record.total_confirmed(),
            Field::TotalDeaths => record.total_deaths(),
            Field::TotalRecovered => record.total_recovered(),
        }
    }

    /// Compare two records on this field only
    #[inline]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        self.value(a).cmp(&self.value(b))
    }

    /// Human-readable label used in menus and the chart footer
    pub fn label(self) -> &'static str {
        match self {
            Field::NewConfirmed => "New Confirmed Cases",
            Field::NewDeaths => "New Death Cases",
            Field::NewRecovered => "New Recovered Cases",
            Field::TotalConfirmed => "Total Confirmed Cases",
            Field::TotalDeaths => "Total Deaths",
            Field::TotalRecovered => "Total Recovered",
        }
    }

    /// 1-based position in the interactive menu
    pub fn menu_number(self) -> usize {
        match self {
            Field::NewConfirmed => 1,
            Field::NewDeaths => 2,
            Field::NewRecovered => 3,
            Field::TotalConfirmed => 4,
            Field::TotalDeaths => 5,
            Field::TotalRecovered => 6,
        }
    }

    /// Look up a field by its menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.menu_number() == number)
    }

    /// Name accepted on the command line
    pub fn cli_name(self) -> &'static str {
        match self {
            Field::NewConfirmed => "new-confirmed",
            Field::NewDeaths => "new-deaths",
            Field::NewRecovered => "new-recovered",
            Field::TotalConfirmed => "total-confirmed",
            Field::TotalDeaths => "total-deaths",
            Field::TotalRecovered => "total-recovered",
        }
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if let Ok(number) = normalized.parse::<usize>() {
            return Field::from_menu_number(number).ok_or_else(|| {
                ChartError::invalid_argument(&format!("field number out of range: {s}"))
            });
        }
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.cli_name() == normalized)
            .ok_or_else(|| ChartError::invalid_argument(&format!("unknown field: {s}")))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Look up an order by its menu number (1 ascending, 2 descending)
    pub fn from_menu_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(SortOrder::Ascending),
            2 => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" | "1" => Ok(SortOrder::Ascending),
            "descending" | "desc" | "2" => Ok(SortOrder::Descending),
            _ => Err(ChartError::invalid_argument(&format!(
                "unknown sort order: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        };
        write!(f, "{name}")
    }
}

/// Field and order handed to the sorter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Field,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: Field, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Main configuration structure for a chart run
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Input file ("-" reads stdin)
    pub input_file: String,
    /// Field to sort and chart by
    pub field: Field,
    /// Sort order
    pub order: SortOrder,
    /// Output file path (stdout when None)
    pub output_file: Option<String>,
    /// Longest bar, in characters
    pub bar_width: usize,
    /// Number of records charted
    pub top: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input_file: "-".to_string(),
            field: Field::NewConfirmed,
            order: SortOrder::default(),
            output_file: None,
            bar_width: DEFAULT_BAR_WIDTH,
            top: DEFAULT_TOP_COUNT,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file
    pub fn with_input_file(mut self, input_file: &str) -> Self {
        self.input_file = input_file.to_string();
        self
    }

    /// Set the field to sort by
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Set the chart width
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Set the number of charted records
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> ChartResult<()> {
        if self.input_file.is_empty() {
            return Err(ChartError::invalid_argument("input file name is empty"));
        }

        if self.bar_width == 0 {
            return Err(ChartError::invalid_argument("bar width must be positive"));
        }
        if self.bar_width > MAX_BAR_WIDTH {
            return Err(ChartError::invalid_argument(&format!(
                "bar width too large (maximum {MAX_BAR_WIDTH})"
            )));
        }

        if self.top == 0 {
            return Err(ChartError::invalid_argument(
                "number of charted records must be positive",
            ));
        }

        if let Some(output) = &self.output_file {
            if output.is_empty() {
                return Err(ChartError::invalid_argument("output file name is empty"));
            }
        }

        Ok(())
    }

    /// Sort specification for this run
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.field, self.order)
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_file == "-"
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }
}

/// Builder pattern for creating configurations
pub struct ChartConfigBuilder {
    config: ChartConfig,
}

impl ChartConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: ChartConfig::default(),
        }
    }

    /// Set input file
    pub fn input_file(mut self, file: &str) -> Self {
        self.config.input_file = file.to_string();
        self
    }

    /// Set sort field
    pub fn field(mut self, field: Field) -> Self {
        self.config.field = field;
        self
    }

    /// Set sort order
    pub fn order(mut self, order: SortOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set output file
    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ChartResult<ChartConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ChartConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
