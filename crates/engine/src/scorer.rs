//! Relevance scoring
//!
//! Two scales live here. Entity results are scored on the documented
//! 0-100 scale: base 50, one title-match tier, a recency bonus, a
//! synonym-match penalty, and a per-kind adjustment. Page commands use a
//! tiered point total that can exceed 100; it is clamped into the same
//! [`Relevance`] scale at the searcher boundary so the final merge sorts
//! a single scale.

use chrono::NaiveDate;
use remsearch_core::{EntityKind, PageCommand, Relevance, SearchResult};

/// Page ids that get a small boost as frequently used destinations
pub const COMMON_PAGES: &[&str] = &[
    "send-money",
    "exchange-rates",
    "transactions",
    "clients",
    "dashboard",
];

/// Inputs shared by every scoring call within one search
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    /// Processed (lowercased, corrected) query
    pub query: &'a str,
    /// Reference date for recency bonuses
    pub today: NaiveDate,
}

impl<'a> ScoreContext<'a> {
    pub fn new(query: &'a str, today: NaiveDate) -> Self {
        ScoreContext { query, today }
    }
}

/// Score an entity result against the query
///
/// `expanded` marks a match that only happened through a synonym or
/// correction; it applies a 0.8 multiplier after the additive bonuses
/// and before the per-kind adjustment.
pub fn relevance_score(item: &SearchResult, ctx: &ScoreContext<'_>, expanded: bool) -> Relevance {
    let mut score = 50.0_f64;
    let title = item.title.to_lowercase();

    // Title tiers are mutually exclusive, highest applicable wins
    if title == ctx.query {
        score += 50.0;
    } else if title.starts_with(ctx.query) {
        score += 40.0;
    } else if title.contains(ctx.query) {
        score += 30.0;
    } else if item
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(ctx.query))
    {
        score += 20.0;
    }

    if let Some(timestamp) = item.timestamp {
        let age_days = (ctx.today - timestamp).num_days();
        if age_days < 7 {
            score += (10.0 - age_days as f64).max(0.0);
        }
    }

    if expanded {
        score *= 0.8;
    }

    score += match item.kind {
        EntityKind::Command => 7.0,
        EntityKind::Client => 5.0,
        EntityKind::Transaction => 3.0,
        EntityKind::Suggestion => -10.0,
        _ => 0.0,
    };

    Relevance::from_points(score.round() as i32)
}

/// Tiered point total for a page command, unclamped
///
/// Returns `None` when nothing matches at all. Name tiers are mutually
/// exclusive; keyword bonuses stack, except that the generic substring
/// bonus only applies when no exact or prefix keyword matched.
pub fn page_command_points(page: &PageCommand, query: &str) -> Option<i32> {
    let name = page.name.to_lowercase();
    let description = page.description.to_lowercase();
    let keywords: Vec<String> = page.keywords.iter().map(|k| k.to_lowercase()).collect();

    let name_contains = name.contains(query);
    let description_contains = description.contains(query);
    let keyword_contains = keywords.iter().any(|k| k.contains(query));

    if !name_contains && !description_contains && !keyword_contains {
        return None;
    }

    let keyword_exact = keywords.iter().any(|k| k == query);
    let keyword_prefix = keywords.iter().any(|k| k.starts_with(query));
    let keyword_whole_word = keywords
        .iter()
        .any(|k| k.split_whitespace().any(|word| word == query));

    let mut points = 0;

    if name == query {
        points += 150;
    } else if name.starts_with(query) {
        points += 120;
    } else if name_contains {
        points += 90;
    }

    if keyword_exact {
        points += 80;
    }
    if keyword_prefix {
        points += 70;
    }
    if keyword_whole_word {
        points += 65;
    }
    if keyword_contains && !keyword_exact && !keyword_prefix {
        points += 50;
    }

    if description_contains {
        points += 30;
    }

    if COMMON_PAGES.contains(&page.id.as_str()) {
        points += 10;
    }

    Some(points)
}
