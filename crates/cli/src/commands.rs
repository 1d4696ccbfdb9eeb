//! Clap command tree definition.

use clap::{Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("remsearch")
        .about("Unified search over the remittance teller demo dataset")
        .subcommand_required(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("recent-file")
                .long("recent-file")
                .help("Recent-search history file (default: .remsearch_recent.json)")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_suggest())
        .subcommand(build_recent())
}

fn build_search() -> Command {
    Command::new("search")
        .about("Search across every entity class")
        .arg(Arg::new("query").required(true).help("Search query"))
        .arg(
            Arg::new("kind")
                .long("kind")
                .help("Restrict to one entity kind (client, transaction, document, help, exchange, command, page)"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .help("Restrict transactions to a status (completed, pending, failed, cancelled)"),
        )
        .arg(
            Arg::new("doc-kind")
                .long("doc-kind")
                .help("Restrict documents to a kind (identification, address, financial, employment)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Earliest entity date to include (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Latest entity date to include (YYYY-MM-DD)"),
        )
}

fn build_suggest() -> Command {
    Command::new("suggest")
        .about("Autocomplete and spelling suggestions for a partial query")
        .arg(Arg::new("query").required(true).help("Partial query"))
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Maximum number of suggestions (default: 5)")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn build_recent() -> Command {
    Command::new("recent")
        .about("Show or clear the recent-search history")
        .arg(
            Arg::new("clear")
                .long("clear")
                .help("Delete the history instead of showing it")
                .action(clap::ArgAction::SetTrue),
        )
}
