//! remsearch — unified fuzzy search for a money-remittance teller back
//! office.
//!
//! This facade crate re-exports the public API of the workspace members:
//! - `remsearch-core`: shared types, the relevance scale, and the lexicon
//! - `remsearch-engine`: query enhancement, entity searchers, and the
//!   unified orchestrator
//! - `remsearch-store`: the file-backed recent-search history
//!
//! ```
//! use remsearch::{demo_catalog, domain_lexicon, SearchFilters, UnifiedSearch};
//! use std::sync::Arc;
//!
//! let engine = UnifiedSearch::new(Arc::new(domain_lexicon()), Arc::new(demo_catalog()));
//! for result in engine.search("send money", &SearchFilters::new()) {
//!     println!("[{}] {}", result.relevance, result.title);
//! }
//! ```

pub use remsearch_core::{
    domain_lexicon, Client, DateRange, Document, DocumentKind, EntityKind, Error, ExchangeRate,
    HelpArticle, Lexicon, LexiconBuilder, PageCommand, PaletteCommand, Relevance, Result,
    SearchFilters, SearchResult, Transaction, TransactionStatus,
};
pub use remsearch_engine::{
    autocomplete_suggestions, check_for_misspelling, demo_catalog, expand_query_with_synonyms,
    levenshtein, process_search_query, search_suggestions, spelling_suggestions, Catalog,
    InMemoryCatalog, PageDirectory, QueryAnalysis, ScoreContext, SearchSession, UnifiedSearch,
};
pub use remsearch_store::{RecentSearches, MAX_RECENT};
