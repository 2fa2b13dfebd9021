//! CLI argument definitions for tickerboard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Run one retrieval cycle and print the dashboard |
//! | `watch` | Refresh the dashboard on a fixed interval until Ctrl-C |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--offline` | `false` | Skip the network; every quote is synthetic |
//! | `--endpoint` | env / Alpha Vantage | Override the quote endpoint |
//! | `--timeout-ms` | `5000` | Per-request timeout in ms |
//! | `--search` | empty | Filter rows by symbol or company name |
//! | `--sort` | `symbol` | Sort column |
//! | `--desc` | `false` | Sort descending |
//!
//! # Examples
//!
//! ```bash
//! tickerboard quote
//! tickerboard quote AAPL IBM --sort change-percent --desc
//! tickerboard watch --interval-secs 30 --search corp
//! TICKERBOARD_ALPHAVANTAGE_API_KEY=... tickerboard quote --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stock quote dashboard for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tickerboard",
    author,
    version,
    about = "Stock quote dashboard for the terminal",
    long_about = "Fetches stock quotes from Alpha Vantage and renders them as a searchable, \
sortable table with market summary statistics. Symbols whose live quote cannot be \
fetched are filled with generated demo data.\n\
\n\
The API key is read from TICKERBOARD_ALPHAVANTAGE_API_KEY (default: demo)."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Do not contact the quote endpoint; every record is generated locally.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Quote endpoint URL (overrides TICKERBOARD_ALPHAVANTAGE_ENDPOINT).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Only show rows whose symbol or company name contains this text.
    #[arg(long, global = true, default_value = "")]
    pub search: String,

    /// Column to sort the table by.
    #[arg(long, global = true, value_enum, default_value_t = SortColumn::Symbol)]
    pub sort: SortColumn,

    /// Sort in descending order.
    #[arg(long, global = true, default_value_t = false)]
    pub desc: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary cards and an aligned table.
    Table,
    /// One JSON document per refresh.
    Json,
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes once and print the dashboard.
    ///
    /// With no symbols the default set is used:
    /// AAPL GOOGL MSFT TSLA AMZN NVDA META NFLX.
    ///
    /// # Examples
    ///
    ///   tickerboard quote
    ///   tickerboard quote AAPL MSFT IBM
    Quote(QuoteArgs),

    /// Refresh the dashboard immediately and then on a fixed interval.
    ///
    /// A refresh that takes longer than the interval delays the next one
    /// instead of overlapping it. Stop with Ctrl-C.
    ///
    /// # Examples
    ///
    ///   tickerboard watch
    ///   tickerboard watch TSLA NVDA --interval-secs 10 --cycles 6
    Watch(WatchArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Ticker symbols (e.g., AAPL, MSFT). Defaults to the demo set.
    #[arg(num_args = 0..)]
    pub symbols: Vec<String>,
}

/// Arguments for the `watch` command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Ticker symbols (e.g., AAPL, MSFT). Defaults to the demo set.
    #[arg(num_args = 0..)]
    pub symbols: Vec<String>,

    /// Seconds between refresh cycles.
    #[arg(long, default_value_t = 30)]
    pub interval_secs: u64,

    /// Exit after this many cycles instead of waiting for Ctrl-C.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tickerboard",
            "quote",
            "aapl",
            "ibm",
            "--sort",
            "change-percent",
            "--desc",
            "--offline",
        ])
        .expect("valid arguments");

        assert_eq!(cli.sort, SortColumn::ChangePercent);
        assert!(cli.desc);
        assert!(cli.offline);
        match cli.command {
            Command::Quote(args) => assert_eq!(args.symbols, vec!["aapl", "ibm"]),
            Command::Watch(_) => panic!("expected quote command"),
        }
    }

    #[test]
    fn watch_defaults_to_thirty_second_interval() {
        let cli = Cli::try_parse_from(["tickerboard", "watch"]).expect("valid arguments");
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.interval_secs, 30);
                assert!(args.symbols.is_empty());
                assert_eq!(args.cycles, None);
            }
            Command::Quote(_) => panic!("expected watch command"),
        }
    }

    #[test]
    fn watch_rejects_zero_cycles() {
        let zero = Cli::try_parse_from(["tickerboard", "watch", "--cycles", "0"]);
        assert!(zero.is_err());

        let cli = Cli::try_parse_from(["tickerboard", "watch", "--cycles", "2"])
            .expect("valid arguments");
        match cli.command {
            Command::Watch(args) => assert_eq!(args.cycles, Some(2)),
            Command::Quote(_) => panic!("expected watch command"),
        }
    }
}
