//! resfinder CLI - find E-series resistor combinations from the command line.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use resfinder::units::format_significant;
use resfinder::{
    format_resistance, generate_decade, parse_resistance, ConfigFilter, Configuration, ESeries,
    MatchResult, ResFinderCore, SearchOptions, SearchReport,
};
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "resfinder")]
#[command(about = "Find E-series resistor combinations for a target resistance", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find singles, series pairs and parallel pairs closest to a target
    Find {
        /// Target resistance (supports k/M suffixes and RKM codes, e.g. 4.7k, 4k7, 2.2M)
        #[arg(value_name = "TARGET", allow_negative_numbers = true)]
        target: String,

        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = 5)]
        num_results: usize,

        /// E-series to use
        #[arg(short = 'e', long, value_enum, default_value = "96")]
        e_series: SeriesArg,

        /// Significant figures for E48 and above
        #[arg(
            short,
            long,
            default_value_t = 3,
            value_parser = clap::value_parser!(u32).range(1..=15)
        )]
        precision: u32,

        /// Number of decades to cover, starting at 1 ohm
        #[arg(
            short,
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(u32).range(1..=12)
        )]
        decades: u32,

        /// Resistor tolerance in percent
        #[arg(short, long, default_value_t = 1.0)]
        tolerance: f64,

        /// Only show single resistor matches
        #[arg(long, group = "only")]
        single_only: bool,

        /// Only show series combinations
        #[arg(long, group = "only")]
        series_only: bool,

        /// Only show parallel combinations
        #[arg(long, group = "only")]
        parallel_only: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the preferred values of an E-series
    Values {
        /// E-series to list
        #[arg(short = 'e', long, value_enum, default_value = "96")]
        e_series: SeriesArg,

        /// Significant figures for E48 and above
        #[arg(
            short,
            long,
            default_value_t = 3,
            value_parser = clap::value_parser!(u32).range(1..=15)
        )]
        precision: u32,

        /// Number of decades to list, starting at 1 ohm
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=12)
        )]
        decades: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeriesArg {
    #[value(name = "6")]
    E6,
    #[value(name = "12")]
    E12,
    #[value(name = "24")]
    E24,
    #[value(name = "48")]
    E48,
    #[value(name = "96")]
    E96,
    #[value(name = "192")]
    E192,
}

impl From<SeriesArg> for ESeries {
    fn from(arg: SeriesArg) -> Self {
        match arg {
            SeriesArg::E6 => ESeries::E6,
            SeriesArg::E12 => ESeries::E12,
            SeriesArg::E24 => ESeries::E24,
            SeriesArg::E48 => ESeries::E48,
            SeriesArg::E96 => ESeries::E96,
            SeriesArg::E192 => ESeries::E192,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Find {
            target,
            num_results,
            e_series,
            precision,
            decades,
            tolerance,
            single_only,
            series_only,
            parallel_only,
            format,
        } => {
            let filter = if single_only {
                ConfigFilter::Single
            } else if series_only {
                ConfigFilter::Series
            } else if parallel_only {
                ConfigFilter::Parallel
            } else {
                ConfigFilter::Any
            };
            let options = SearchOptions {
                series: e_series.into(),
                precision,
                decades,
                tolerance: tolerance / 100.0,
                max_results: num_results,
                filter,
            };
            handle_find(&target, &options, format)
        }
        Commands::Values {
            e_series,
            precision,
            decades,
        } => handle_values(e_series.into(), precision, decades),
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn handle_find(target: &str, options: &SearchOptions, format: OutputFormat) -> i32 {
    let target = match parse_resistance(target) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match ResFinderCore::search(target, options) {
        Ok(report) => match format {
            OutputFormat::Human => {
                output_human(&report);
                0
            }
            OutputFormat::Json => output_json(&report),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_values(series: ESeries, precision: u32, decades: u32) -> i32 {
    for decade in 1..=decades {
        match generate_decade(series, precision, decade) {
            Ok(values) => {
                let line: Vec<String> = values.iter().map(|v| format_resistance(*v)).collect();
                println!("{} decade {}: {}", series, decade, line.join(" "));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    0
}

fn describe_parts(result: &MatchResult) -> String {
    let separator = match result.config {
        Configuration::Parallel => " || ",
        Configuration::Single | Configuration::Series => " + ",
    };
    result
        .resistors
        .iter()
        .map(|r| format_resistance(*r))
        .collect::<Vec<_>>()
        .join(separator)
}

fn output_human(report: &SearchReport) {
    println!("\nTarget: {} ohms", format_significant(report.target, 6));
    println!(
        "E-series: {}, Tolerance: ±{}%\n",
        report.series,
        format_significant(report.tolerance * 100.0, 6)
    );

    if report.is_empty() {
        println!("No matching configurations found.");
        return;
    }

    for (rank, item) in report.results.iter().enumerate() {
        println!(
            "#{}: {} {}",
            rank + 1,
            item.config.as_str().to_uppercase(),
            describe_parts(item)
        );
        println!(
            "    Nominal: {} ohms ({:+.4}%)",
            format_significant(item.nominal, 6),
            item.error_percent(report.target)
        );
        println!(
            "    Range:   [{}, {}]",
            format_significant(item.lo, 6),
            format_significant(item.hi, 6)
        );
        println!();
    }
}

fn output_json(report: &SearchReport) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
