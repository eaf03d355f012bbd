//! Line-oriented command interpreter.
//!
//! Each input line is one command and produces one line of JSON output:
//!
//! ```text
//! search <word>     existence check, counts as a hit
//! rank <word>       number of hits so far
//! suggest <prefix>  words starting with the prefix
//! load <path>       replace the vocabulary with a word list file
//! quit              end the session
//! ```
//!
//! Failed commands print `{"error": ...}` and the session carries on.

use serde::Serialize;
use serde_json::json;

use crate::error::load::LoadError;
use crate::error::{get_error_reporting, ErrorContext, KupuResult};
use crate::service::{LookupService, VocabularyLoader};

/// Result of interpreting one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this line and continue
    Reply(String),
    /// Blank input, nothing to print
    Skip,
    /// End the session
    Quit,
}

/// Interactive session over a loader and a lookup service sharing one index.
#[derive(Debug, Clone)]
pub struct Shell {
    loader: VocabularyLoader,
    lookup: LookupService,
}

impl Shell {
    /// Creates a shell. Both services must share the same index handle.
    pub fn new(loader: VocabularyLoader, lookup: LookupService) -> Self {
        Self { loader, lookup }
    }

    /// Interprets one input line.
    pub async fn execute(&self, line: &str) -> KupuResult<Outcome> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let reply = match command {
            "" => return Ok(Outcome::Skip),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "search" => render(self.lookup.search(argument))?,
            "rank" => render(self.lookup.rank(argument))?,
            "suggest" => render(self.lookup.suggest(argument))?,
            "load" => match self.loader.load_path(argument).await {
                Ok(report) => serde_json::to_string(&report)?,
                Err(e) => {
                    let reply = json!({ "error": e.to_string() }).to_string();
                    get_error_reporting().report(load_failure(e, argument));
                    reply
                }
            },
            other => json!({ "error": format!("Unknown command: {other}") }).to_string(),
        };

        Ok(Outcome::Reply(reply))
    }
}

/// Error context for a failed `load` command, carrying the error's debug form as trace.
fn load_failure(error: LoadError, path: &str) -> ErrorContext {
    let trace = format!("{error:?}");
    ErrorContext::new(error, "shell")
        .with_details(format!("load {path}"))
        .with_trace(trace)
}

/// Renders a successful response as JSON, or an error as `{"error": ...}`.
fn render<T, E>(result: Result<T, E>) -> KupuResult<String>
where
    T: Serialize,
    E: std::fmt::Display,
{
    Ok(match result {
        Ok(response) => serde_json::to_string(&response)?,
        Err(e) => json!({ "error": e.to_string() }).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KupuConfig;
    use crate::service::IndexHandle;
    use std::io::Write;

    fn shell() -> Shell {
        let config = KupuConfig::default();
        let handle = IndexHandle::with_index(["cat", "car", "dog"].into_iter().collect());
        Shell::new(
            VocabularyLoader::new(config.vocabulary.clone(), handle.clone()),
            LookupService::new(config.vocabulary, config.lookup, handle),
        )
    }

    fn reply(outcome: Outcome) -> serde_json::Value {
        match outcome {
            Outcome::Reply(line) => serde_json::from_str(&line).unwrap(),
            other => panic!("expected a reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_then_rank() {
        let shell = shell();
        let searched = reply(shell.execute("search car").await.unwrap());
        assert_eq!(searched["exists"], true);
        assert_eq!(searched["rank"], 1);

        let ranked = reply(shell.execute("  rank   car ").await.unwrap());
        assert_eq!(ranked, json!({ "word": "car", "rank": 1 }));

        let unranked = reply(shell.execute("rank dog").await.unwrap());
        assert_eq!(unranked["error"], "Word not found: dog");
    }

    #[tokio::test]
    async fn test_suggest_and_errors() {
        let shell = shell();
        let suggested = reply(shell.execute("suggest ca").await.unwrap());
        assert_eq!(suggested["suggestions"].as_array().unwrap().len(), 2);

        let invalid = reply(shell.execute("suggest 42").await.unwrap());
        assert!(invalid["error"].as_str().unwrap().starts_with("Invalid prefix"));

        let unknown = reply(shell.execute("delete cat").await.unwrap());
        assert_eq!(unknown["error"], "Unknown command: delete");
    }

    #[tokio::test]
    async fn test_blank_and_quit() {
        let shell = shell();
        assert_eq!(shell.execute("   ").await.unwrap(), Outcome::Skip);
        assert_eq!(shell.execute("quit").await.unwrap(), Outcome::Quit);
    }

    #[tokio::test]
    async fn test_load_replaces_vocabulary() {
        let shell = shell();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zebra\r\nzoo\r\n1nvalid").unwrap();

        let loaded = reply(
            shell
                .execute(&format!("load {}", file.path().display()))
                .await
                .unwrap(),
        );
        assert_eq!(
            loaded,
            json!({ "valid_count": 2, "invalid_count": 1, "word_count": 2 })
        );

        let gone = reply(shell.execute("search cat").await.unwrap());
        assert_eq!(gone["exists"], false);
        let found = reply(shell.execute("suggest z").await.unwrap());
        assert_eq!(found["suggestions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_load_failure_context() {
        let context = load_failure(LoadError::EmptyUpload, "words.txt");
        assert_eq!(context.component, "shell");
        assert_eq!(context.details.as_deref(), Some("load words.txt"));
        assert_eq!(context.trace.as_deref(), Some("EmptyUpload"));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_vocabulary() {
        let shell = shell();
        let failed = reply(shell.execute("load /nonexistent/words.txt").await.unwrap());
        assert!(failed["error"].as_str().unwrap().contains("Failed to read word list"));

        let kept = reply(shell.execute("search cat").await.unwrap());
        assert_eq!(kept["exists"], true);
    }
}
