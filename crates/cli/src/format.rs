//! Result and suggestion formatting for terminal output.

use remsearch_core::SearchResult;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a full result list.
pub fn format_results(results: &[SearchResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(results)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => {
            if results.is_empty() {
                return "(no results)".to_string();
            }
            results
                .iter()
                .map(format_result_line)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

fn format_result_line(result: &SearchResult) -> String {
    let mut line = format!(
        "[{:>3}] {:<11} {}",
        result.relevance.get(),
        result.kind.to_string(),
        result.title
    );
    if let Some(description) = &result.description {
        line.push_str(&format!(" — {}", description));
    }
    if result.url != "#" {
        line.push_str(&format!("  ({})", result.url));
    }
    line
}

/// Format a plain string list (suggestions, recent searches).
pub fn format_strings(items: &[String], empty_message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(items)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => {
            if items.is_empty() {
                empty_message.to_string()
            } else {
                items.join("\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remsearch_core::{EntityKind, Relevance};

    #[test]
    fn test_human_result_line() {
        let result = SearchResult::new("client1", "John Doe", EntityKind::Client, "/clients/client1")
            .with_description("john@example.com • +1 (555) 123-4567")
            .with_relevance(Relevance::new(95));
        let line = format_results(&[result], OutputMode::Human);
        assert!(line.contains("[ 95]"));
        assert!(line.contains("John Doe"));
        assert!(line.contains("/clients/client1"));
    }

    #[test]
    fn test_human_empty_results() {
        assert_eq!(format_results(&[], OutputMode::Human), "(no results)");
    }

    #[test]
    fn test_json_results_roundtrip() {
        let result = SearchResult::new("tx1", "1000 - A to B", EntityKind::Transaction, "/transactions/tx1");
        let json = format_results(&[result], OutputMode::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "tx1");
        assert_eq!(parsed[0]["kind"], "transaction");
    }

    #[test]
    fn test_strings_empty_message() {
        assert_eq!(
            format_strings(&[], "(none)", OutputMode::Human),
            "(none)"
        );
    }
}
