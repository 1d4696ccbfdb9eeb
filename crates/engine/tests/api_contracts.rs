//! End-to-end contracts of the unified search API

use chrono::NaiveDate;
use remsearch_core::{domain_lexicon, EntityKind, SearchFilters};
use remsearch_engine::{demo_catalog, UnifiedSearch};
use remsearch_store::RecentSearches;
use std::sync::Arc;

fn engine() -> UnifiedSearch {
    UnifiedSearch::new(Arc::new(domain_lexicon()), Arc::new(demo_catalog()))
        .with_today(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
}

#[test]
fn test_client_search_ranks_exact_prefix_first() {
    let results = engine().search("john", &SearchFilters::new());

    let clients: Vec<&str> = results
        .iter()
        .filter(|r| r.kind == EntityKind::Client)
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(clients, vec!["John Doe", "Robert Johnson"]);

    // "John Doe" starts with the query (95), "Robert Johnson" only
    // contains it (85), and both outrank the transaction hits (83)
    let john = results.iter().find(|r| r.id == "client1").unwrap();
    let robert = results.iter().find(|r| r.id == "client3").unwrap();
    assert_eq!(john.relevance.get(), 95);
    assert_eq!(robert.relevance.get(), 85);

    let transactions: Vec<&str> = results
        .iter()
        .filter(|r| r.kind == EntityKind::Transaction)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(transactions, vec!["tx1", "tx2", "tx3", "tx5"]);
}

#[test]
fn test_kind_filter_is_a_hard_exclude() {
    let filters = SearchFilters::new().with_kind(EntityKind::Transaction);
    let results = engine().search("john", &filters);

    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|r| r.kind == EntityKind::Transaction || r.kind == EntityKind::Suggestion));
}

#[test]
fn test_kind_filter_keeps_spelling_suggestions() {
    let filters = SearchFilters::new().with_kind(EntityKind::Transaction);
    let results = engine().search("tranfer", &filters);

    // Nothing in the fixture transactions mentions "transfer", but the
    // "did you mean" results still come through
    assert!(results.iter().any(|r| r.kind == EntityKind::Suggestion));
    assert!(results
        .iter()
        .all(|r| r.kind == EntityKind::Transaction || r.kind == EntityKind::Suggestion));
}

#[test]
fn test_misspelled_query_surfaces_correction_results() {
    let results = engine().search("tranfer", &SearchFilters::new());

    let suggestions: Vec<_> = results
        .iter()
        .filter(|r| r.kind == EntityKind::Suggestion)
        .collect();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 2);
    assert_eq!(suggestions[0].title, "transfer");
    assert!(suggestions.iter().all(|s| s.relevance.get() == 95));
    assert!(suggestions.iter().all(|s| s.url == "#"));

    // The corrected query drives the rest of the search: the Send Money
    // page wins on its "transfer" keyword tiers
    assert_eq!(results[0].id, "send-money");
    assert_eq!(results[0].kind, EntityKind::Page);
    assert_eq!(results[0].relevance.get(), 100);
}

#[test]
fn test_unknown_name_token_yields_no_clients() {
    // "jon" is not a listed misspelling and "john" is not in the
    // vocabulary, so no correction path leads to the fixture client
    let results = engine().search("jon", &SearchFilters::new());
    assert!(results.iter().all(|r| r.kind != EntityKind::Client));
}

#[test]
fn test_page_navigation_wins_on_exact_name() {
    let results = engine().search("dashboard", &SearchFilters::new());
    assert_eq!(results[0].id, "dashboard");
    assert_eq!(results[0].kind, EntityKind::Page);
    assert_eq!(results[0].relevance.get(), 100);
    assert_eq!(results[0].url, "/dashboard");
}

#[test]
fn test_palette_commands_surface_with_fixed_score() {
    let results = engine().search("password", &SearchFilters::new());
    let command = results
        .iter()
        .find(|r| r.kind == EntityKind::Command)
        .unwrap();
    assert_eq!(command.id, "reset-password");
    assert_eq!(command.relevance.get(), 90);
    assert_eq!(command.metadata["action"], "/settings/security");
}

#[test]
fn test_exchange_kind_filter() {
    let filters = SearchFilters::new().with_kind(EntityKind::Exchange);
    let results = engine().search("usd/eur", &filters);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, EntityKind::Exchange);
    assert_eq!(results[0].title, "USD/EUR");
}

#[test]
fn test_blank_query_returns_nothing_and_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let recent = RecentSearches::new(dir.path().join("recent.json"));
    let engine = engine().with_recent(recent);

    assert!(engine.search("   ", &SearchFilters::new()).is_empty());
    assert!(engine.recent_searches().is_empty());
}

#[test]
fn test_searches_are_recorded_most_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let recent = RecentSearches::new(dir.path().join("recent.json"));
    let engine = engine().with_recent(recent);

    engine.search("john", &SearchFilters::new());
    engine.search("exchange", &SearchFilters::new());
    engine.search("john", &SearchFilters::new());

    assert_eq!(engine.recent_searches(), vec!["john", "exchange"]);

    engine.clear_recent_searches().unwrap();
    assert!(engine.recent_searches().is_empty());
}

#[test]
fn test_all_scores_within_scale() {
    let engine = engine();
    for query in ["john", "tranfer", "usd", "money", "send", "1200", "kyc"] {
        for result in engine.search(query, &SearchFilters::new()) {
            assert!(result.relevance.get() <= 100, "query {:?}: {:?}", query, result.id);
        }
    }
}
