//! COVID-19 data interpreter
//!
//! Charts the ten leading countries for one statistic of a country summary
//! CSV. Anything not given on the command line is asked for interactively.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, Command};
use tracing::error;

use covid_chart::{
    config::{ChartConfig, Field, SortOrder},
    error::{ChartError, ChartResult},
    logging::{init_logging, LogConfig},
    prompt::Prompt,
    run, EXIT_FAILURE,
};

fn main() {
    let matches = build_cli().get_matches();

    let log_config = LogConfig::from_verbosity(
        matches.get_count("verbose"),
        matches.get_flag("quiet"),
    )
    .with_ansi(io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("covid-chart: failed to initialize logging: {e}");
        process::exit(EXIT_FAILURE);
    }

    let result = run_cli(&matches);
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            error!(error = %e, "run aborted");
            eprintln!("covid-chart: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run_cli(matches: &clap::ArgMatches) -> ChartResult<i32> {
    // The prompt's stdin lock must be released before stdin is read as data
    let config = {
        let stdin = io::stdin();
        let mut prompt = Prompt::new(stdin.lock(), io::stdout(), io::stderr());
        parse_config_from_matches(matches, &mut prompt)?
    };
    run(&config)
}

fn build_cli() -> Command {
    Command::new("covid-chart")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("covid-chart [OPTION]... [FILE]")
        .about("Chart the top countries of a COVID-19 summary CSV")
        .long_about("Read a CSV of per-country COVID-19 counters, sort it by one counter and draw a horizontal bar chart of the first ten rows.\n\nOptions left out on the command line are asked for interactively.")

        // Input file
        .arg(Arg::new("file")
            .help("Input CSV file (use '-' for stdin; omit to be prompted)")
            .value_name("FILE"))

        // Sort selection
        .arg(Arg::new("field")
            .short('f')
            .long("field")
            .help("Counter to sort and chart by")
            .long_help("Counter to sort and chart by: new-confirmed (1), new-deaths (2), new-recovered (3), total-confirmed (4), total-deaths (5), total-recovered (6)")
            .value_name("FIELD"))
        .arg(Arg::new("ascending")
            .short('a')
            .long("ascending")
            .help("Sort in ascending order")
            .conflicts_with("descending")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("descending")
            .short('d')
            .long("descending")
            .help("Sort in descending order")
            .action(ArgAction::SetTrue))

        // Output options
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write the chart to FILE instead of standard output")
            .value_name("FILE"))
        .arg(Arg::new("top")
            .long("top")
            .help("Number of rows to chart [default: 10]")
            .value_name("N"))
        .arg(Arg::new("width")
            .long("width")
            .help("Longest bar, in characters [default: 70]")
            .value_name("N"))

        // Diagnostics
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Log more detail to stderr (repeat for more)")
            .action(ArgAction::Count))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .help("Only log errors")
            .conflicts_with("verbose")
            .action(ArgAction::SetTrue))
}

/// Build configuration from command line matches, asking for what is missing
fn parse_config_from_matches<R, W, E>(
    matches: &clap::ArgMatches,
    prompt: &mut Prompt<R, W, E>,
) -> ChartResult<ChartConfig>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut config =
        ChartConfig::new().with_output_file(matches.get_one::<String>("output").cloned());

    if let Some(top) = matches.get_one::<String>("top") {
        config = config.with_top(parse_count(top, "row count")?);
    }
    if let Some(width) = matches.get_one::<String>("width") {
        config = config.with_bar_width(parse_count(width, "bar width")?);
    }

    let field = matches
        .get_one::<String>("field")
        .map(|f| f.parse::<Field>())
        .transpose()?;
    let order = if matches.get_flag("ascending") {
        Some(SortOrder::Ascending)
    } else if matches.get_flag("descending") {
        Some(SortOrder::Descending)
    } else {
        None
    };
    let file = matches.get_one::<String>("file").cloned();

    if file.as_deref() == Some("-") && (field.is_none() || order.is_none()) {
        return Err(ChartError::invalid_argument(
            "reading data from stdin requires --field and --ascending or --descending",
        ));
    }

    if file.is_none() || field.is_none() || order.is_none() {
        prompt.greet()?;
    }

    config.input_file = match file {
        Some(file) => file,
        None => prompt.file_name(|name| Path::new(name).is_file())?,
    };
    config.field = match field {
        Some(field) => field,
        None => prompt.field()?,
    };
    config.order = match order {
        Some(order) => order,
        None => prompt.order()?,
    };

    config.validate()?;
    Ok(config)
}

fn parse_count(value: &str, what: &str) -> ChartResult<usize> {
    value
        .parse::<usize>()
        .map_err(|_| ChartError::invalid_argument(&format!("invalid {what}: {value}")))
}
