mod quote;
mod watch;

use std::sync::Arc;

use tickerboard_core::{
    AlphaVantageAdapter, Dashboard, DashboardSnapshot, OfflineProvider, QuoteApiConfig,
    QuoteProvider, QuoteRetriever, SortDirection, SortField, SortSpec, Symbol, ViewModel,
    DEFAULT_SYMBOLS,
};

use crate::cli::{Cli, Command, SortColumn};
use crate::error::CliError;
use crate::output::surface::{StderrNotifier, TerminalSurface};

/// Final dashboard state after a command completes.
pub struct CommandReport {
    pub snapshot: DashboardSnapshot,
    pub cycles: u64,
}

pub async fn run(cli: &Cli) -> Result<CommandReport, CliError> {
    let raw_symbols = match &cli.command {
        Command::Quote(args) => &args.symbols,
        Command::Watch(args) => &args.symbols,
    };
    let symbols = resolve_symbols(raw_symbols)?;
    let retriever = QuoteRetriever::new(build_provider(cli)?);

    let surface = Arc::new(TerminalSurface::new(view_model(cli), cli.format, cli.pretty));
    let dashboard = Arc::new(Dashboard::new(
        Arc::new(retriever),
        symbols,
        surface.clone(),
        Arc::new(StderrNotifier),
    ));

    let report = match &cli.command {
        Command::Quote(_) => quote::run(&dashboard).await,
        Command::Watch(args) => watch::run(args, &dashboard).await?,
    };

    if let Some(error) = surface.take_failure() {
        return Err(error);
    }
    Ok(report)
}

fn build_provider(cli: &Cli) -> Result<Arc<dyn QuoteProvider>, CliError> {
    if cli.offline {
        tracing::debug!("offline mode, every quote is synthetic");
        return Ok(Arc::new(OfflineProvider));
    }

    let mut config = QuoteApiConfig::from_env()?;
    if let Some(endpoint) = &cli.endpoint {
        config = QuoteApiConfig::new(endpoint.clone(), config.credential)?;
    }
    let config = config.with_timeout_ms(cli.timeout_ms)?;
    tracing::debug!(?config, "using remote quote endpoint");

    Ok(Arc::new(AlphaVantageAdapter::new(config)))
}

fn resolve_symbols(raw: &[String]) -> Result<Vec<Symbol>, CliError> {
    let symbols = if raw.is_empty() {
        Symbol::parse_distinct(DEFAULT_SYMBOLS.iter().copied())?
    } else {
        Symbol::parse_distinct(raw)?
    };
    Ok(symbols)
}

fn view_model(cli: &Cli) -> ViewModel {
    let direction = if cli.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    ViewModel::new(cli.search.clone(), SortSpec::new(to_sort_field(cli.sort), direction))
}

fn to_sort_field(column: SortColumn) -> SortField {
    match column {
        SortColumn::Symbol => SortField::Symbol,
        SortColumn::Name => SortField::Name,
        SortColumn::Price => SortField::Price,
        SortColumn::Change => SortField::Change,
        SortColumn::ChangePercent => SortField::ChangePercent,
        SortColumn::Volume => SortField::Volume,
    }
}
