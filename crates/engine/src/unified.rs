//! Unified search orchestrator
//!
//! One entry point over every searcher: analyzes the query once, fans out
//! to the entity and navigation searchers with the same analysis, merges,
//! applies the kind filter, and stable-sorts by descending relevance.
//! [`SearchSession`] adds a generation counter on top so callers that
//! fire a search per keystroke can discard superseded results.

use crate::enhance::{process_search_query, spelling_suggestions};
use crate::scorer::ScoreContext;
use crate::searchers::{
    search_clients, search_commands, search_documents, search_exchange_rates,
    search_help_articles, search_page_commands, search_transactions, Catalog, PageDirectory,
};
use chrono::{Local, NaiveDate};
use remsearch_core::{EntityKind, Lexicon, Relevance, SearchFilters, SearchResult};
use remsearch_store::RecentSearches;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// How many "did you mean" results a search may carry
const MAX_SPELLING_RESULTS: usize = 2;

/// The search engine: lexicon, data sources, and optional history
pub struct UnifiedSearch {
    lexicon: Arc<Lexicon>,
    catalog: Arc<dyn Catalog>,
    directory: PageDirectory,
    recent: Option<RecentSearches>,
    today: Option<NaiveDate>,
}

impl UnifiedSearch {
    /// Create an engine over a lexicon and catalog, with the default
    /// page directory and no history
    pub fn new(lexicon: Arc<Lexicon>, catalog: Arc<dyn Catalog>) -> Self {
        UnifiedSearch {
            lexicon,
            catalog,
            directory: PageDirectory::default(),
            recent: None,
            today: None,
        }
    }

    /// Builder: replace the page directory
    pub fn with_directory(mut self, directory: PageDirectory) -> Self {
        self.directory = directory;
        self
    }

    /// Builder: record queries into a recent-search history
    pub fn with_recent(mut self, recent: RecentSearches) -> Self {
        self.recent = Some(recent);
        self
    }

    /// Builder: pin the reference date used for recency scoring
    ///
    /// Without this, the engine uses the local calendar date at each call.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The lexicon this engine analyzes queries with
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run a search across every entity class
    ///
    /// Returns results sorted by descending relevance. When a kind filter
    /// is set, only results of that kind survive, plus any spelling
    /// suggestions. An effectively blank query returns nothing.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
        if let (Some(recent), false) = (&self.recent, query.trim().is_empty()) {
            if let Err(e) = recent.save(query) {
                warn!(error = %e, "failed to record recent search");
            }
        }

        let analysis = process_search_query(&self.lexicon, query);
        if analysis.processed_query.is_empty() {
            return Vec::new();
        }
        debug!(
            query,
            processed = %analysis.processed_query,
            corrections = analysis.corrections.len(),
            "running unified search"
        );

        let mut results: Vec<SearchResult> = Vec::new();

        if analysis.has_misspellings {
            let suggestions = spelling_suggestions(
                &self.lexicon,
                &analysis.original_query,
                MAX_SPELLING_RESULTS,
            );
            results.extend(spelling_suggestion_results(&analysis.original_query, &suggestions));
        }

        let ctx = ScoreContext::new(&analysis.processed_query, self.today());
        let catalog = self.catalog.as_ref();
        let expanded = &analysis.expanded_terms;

        results.extend(search_commands(&self.directory, &analysis.processed_query));
        results.extend(search_page_commands(&self.directory, &analysis.processed_query));
        results.extend(search_clients(catalog, &ctx, filters, expanded));
        results.extend(search_transactions(catalog, &ctx, filters, expanded));
        results.extend(search_documents(catalog, &ctx, filters, expanded));
        results.extend(search_help_articles(catalog, &ctx, filters, expanded));
        results.extend(search_exchange_rates(catalog, &ctx, filters, expanded));

        // Spelling suggestions survive the kind filter; everything else
        // must match exactly.
        if let Some(kind) = filters.entity_kind {
            results.retain(|r| r.kind == kind || r.kind == EntityKind::Suggestion);
        }

        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        debug!(count = results.len(), "unified search finished");
        results
    }

    /// Recent queries, most recent first, when a history is configured
    pub fn recent_searches(&self) -> Vec<String> {
        self.recent.as_ref().map(|r| r.load()).unwrap_or_default()
    }

    /// Drop the recorded history, if any
    pub fn clear_recent_searches(&self) -> remsearch_core::Result<()> {
        match &self.recent {
            Some(recent) => recent.clear(),
            None => Ok(()),
        }
    }
}

fn spelling_suggestion_results(original_query: &str, suggestions: &[String]) -> Vec<SearchResult> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            let mut metadata = HashMap::new();
            metadata.insert(
                "original_query".to_string(),
                Value::from(original_query.to_string()),
            );
            SearchResult::new(
                format!("suggestion-{}", index),
                suggestion,
                EntityKind::Suggestion,
                "#",
            )
            .with_description(format!("Did you mean: \"{}\"?", suggestion))
            .with_icon("search")
            .with_relevance(Relevance::new(95))
            .with_metadata(metadata)
        })
        .collect()
}

// ============================================================================
// SearchSession
// ============================================================================

/// Per-caller wrapper that detects superseded searches
///
/// Each call bumps a generation counter before searching and checks it
/// after. If another search started in between, the stale results are
/// dropped and `None` is returned, so interleaved keystroke-driven calls
/// can never display out-of-order results.
pub struct SearchSession {
    engine: Arc<UnifiedSearch>,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(engine: Arc<UnifiedSearch>) -> Self {
        SearchSession {
            engine,
            generation: AtomicU64::new(0),
        }
    }

    /// Search, returning `None` when a newer call superseded this one
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Option<Vec<SearchResult>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let results = self.engine.search(query, filters);
        if self.generation.load(Ordering::SeqCst) == generation {
            Some(results)
        } else {
            debug!(query, "discarding superseded search results");
            None
        }
    }

    /// The wrapped engine
    pub fn engine(&self) -> &UnifiedSearch {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_catalog;
    use remsearch_core::domain_lexicon;

    fn engine() -> UnifiedSearch {
        UnifiedSearch::new(Arc::new(domain_lexicon()), Arc::new(demo_catalog()))
            .with_today(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let engine = engine();
        assert!(engine.search("", &SearchFilters::new()).is_empty());
        assert!(engine.search("   ", &SearchFilters::new()).is_empty());
    }

    #[test]
    fn test_results_sorted_descending() {
        let engine = engine();
        let results = engine.search("john", &SearchFilters::new());
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn test_misspelled_query_carries_suggestions() {
        let engine = engine();
        let results = engine.search("tranfer", &SearchFilters::new());
        let suggestions: Vec<&SearchResult> = results
            .iter()
            .filter(|r| r.kind == EntityKind::Suggestion)
            .collect();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= MAX_SPELLING_RESULTS);
        assert_eq!(suggestions[0].title, "transfer");
        assert_eq!(suggestions[0].relevance.get(), 95);
        assert_eq!(suggestions[0].metadata["original_query"], "tranfer");
    }

    #[test]
    fn test_clean_query_has_no_suggestions() {
        let engine = engine();
        let results = engine.search("john", &SearchFilters::new());
        assert!(results.iter().all(|r| r.kind != EntityKind::Suggestion));
    }

    #[test]
    fn test_session_returns_results_when_not_superseded() {
        let session = SearchSession::new(Arc::new(engine()));
        let results = session.search("john", &SearchFilters::new());
        assert!(results.is_some());
        assert!(!results.unwrap().is_empty());
    }
}
