//! Unified search engine for the remittance teller back office
//!
//! The pipeline, leaf to root:
//! - [`distance`]: Levenshtein edit distance
//! - [`enhance`]: misspelling correction, synonym expansion, autocomplete
//! - [`scorer`]: the 0-100 relevance scale and page-command point tiers
//! - [`searchers`]: one pure searcher per entity class over a [`Catalog`]
//! - [`unified`]: the orchestrator that fans out, merges, and ranks
//!
//! The engine is synchronous and pure over its inputs: the same lexicon,
//! catalog, query, filters, and reference date always produce the same
//! ordered results.
//!
//! ```
//! use remsearch_core::{domain_lexicon, SearchFilters};
//! use remsearch_engine::{demo_catalog, UnifiedSearch};
//! use std::sync::Arc;
//!
//! let engine = UnifiedSearch::new(Arc::new(domain_lexicon()), Arc::new(demo_catalog()));
//! let results = engine.search("john", &SearchFilters::new());
//! assert!(!results.is_empty());
//! ```

pub mod distance;
pub mod enhance;
pub mod fixtures;
pub mod scorer;
pub mod searchers;
pub mod unified;

pub use distance::levenshtein;
pub use enhance::{
    autocomplete_suggestions, check_for_misspelling, expand_query_with_synonyms,
    process_search_query, search_suggestions, spelling_suggestions, QueryAnalysis,
};
pub use fixtures::demo_catalog;
pub use scorer::{page_command_points, relevance_score, ScoreContext, COMMON_PAGES};
pub use searchers::{Catalog, InMemoryCatalog, PageDirectory};
pub use unified::{SearchSession, UnifiedSearch};
