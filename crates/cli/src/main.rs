//! remsearch CLI — unified search over the demo teller dataset.
//!
//! Three subcommands:
//! - `remsearch search QUERY [--kind ...] [--from ... --to ...]`
//! - `remsearch suggest QUERY [--limit N]`
//! - `remsearch recent [--clear]`

mod commands;
mod format;

use std::process;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use remsearch_core::{
    domain_lexicon, DateRange, DocumentKind, EntityKind, SearchFilters, TransactionStatus,
};
use remsearch_engine::{demo_catalog, search_suggestions, UnifiedSearch};
use remsearch_store::RecentSearches;

use commands::build_cli;
use format::{format_results, format_strings, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    let level = match matches.get_count("verbose") {
        0 => tracing_subscriber::filter::LevelFilter::WARN,
        1 => tracing_subscriber::filter::LevelFilter::DEBUG,
        _ => tracing_subscriber::filter::LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let recent_path = matches
        .get_one::<String>("recent-file")
        .map(|s| s.as_str())
        .unwrap_or(".remsearch_recent.json");
    let recent = RecentSearches::new(recent_path);

    let engine = UnifiedSearch::new(Arc::new(domain_lexicon()), Arc::new(demo_catalog()))
        .with_recent(recent);

    let exit_code = match matches.subcommand() {
        Some(("search", sub)) => run_search(&engine, sub, output_mode),
        Some(("suggest", sub)) => run_suggest(&engine, sub, output_mode),
        Some(("recent", sub)) => run_recent(&engine, sub, output_mode),
        _ => unreachable!("subcommand is required"),
    };
    process::exit(exit_code);
}

fn run_search(engine: &UnifiedSearch, matches: &clap::ArgMatches, mode: OutputMode) -> i32 {
    let query = matches
        .get_one::<String>("query")
        .expect("query is required");

    let filters = match build_filters(matches) {
        Ok(filters) => filters,
        Err(e) => {
            eprintln!("{}", e);
            return 2;
        }
    };

    let results = engine.search(query, &filters);
    println!("{}", format_results(&results, mode));
    0
}

fn run_suggest(engine: &UnifiedSearch, matches: &clap::ArgMatches, mode: OutputMode) -> i32 {
    let query = matches
        .get_one::<String>("query")
        .expect("query is required");
    let limit = matches.get_one::<usize>("limit").copied().unwrap_or(5);

    let suggestions = search_suggestions(engine.lexicon(), query, limit);
    println!("{}", format_strings(&suggestions, "(no suggestions)", mode));
    0
}

fn run_recent(engine: &UnifiedSearch, matches: &clap::ArgMatches, mode: OutputMode) -> i32 {
    if matches.get_flag("clear") {
        if let Err(e) = engine.clear_recent_searches() {
            eprintln!("Failed to clear recent searches: {}", e);
            return 1;
        }
        return 0;
    }

    let recent = engine.recent_searches();
    println!("{}", format_strings(&recent, "(no recent searches)", mode));
    0
}

fn build_filters(matches: &clap::ArgMatches) -> Result<SearchFilters, String> {
    let mut filters = SearchFilters::new();

    if let Some(kind) = matches.get_one::<String>("kind") {
        filters = filters.with_kind(EntityKind::from_str(kind)?);
    }
    if let Some(status) = matches.get_one::<String>("status") {
        filters = filters.with_status(TransactionStatus::from_str(status)?);
    }
    if let Some(kind) = matches.get_one::<String>("doc-kind") {
        filters = filters.with_document_kind(DocumentKind::from_str(kind)?);
    }

    let from = parse_date(matches, "from")?;
    let to = parse_date(matches, "to")?;
    if from.is_some() || to.is_some() {
        filters = filters.with_date_range(DateRange { from, to });
    }

    Ok(filters)
}

fn parse_date(matches: &clap::ArgMatches, name: &str) -> Result<Option<NaiveDate>, String> {
    matches
        .get_one::<String>(name)
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("invalid --{} date (expected YYYY-MM-DD): {}", name, raw))
        })
        .transpose()
}
