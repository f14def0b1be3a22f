// ABOUTME: Injectable diagnostics sink recording request receipt, payloads, and outcomes
// ABOUTME: Tracing-backed by default, with an optional append-only file log for operators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request diagnostics side channel
//!
//! Recipe operations report what they received and what they returned to a
//! [`DiagnosticSink`]. Sinks never influence a response: a sink that fails to
//! write only logs a warning.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{info, warn};

/// Recipe operation a diagnostic event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Ingredient search
    FindRecipes,
    /// Single recipe lookup
    RecipeDetails,
    /// Full catalog listing
    ListRecipes,
}

impl Operation {
    /// Stable label used in log output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FindRecipes => "find-recipes",
            Self::RecipeDetails => "recipe-details",
            Self::ListRecipes => "list-recipes",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened during an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    /// A request arrived
    RequestReceived,
    /// Ingredient list decoded from the request
    IngredientsReceived(Vec<String>),
    /// Search finished with this many recipes
    RecipesFound(usize),
    /// Lookup resolved to the named recipe
    RecipeFound(String),
    /// The operation failed with this message
    Failed(String),
}

/// A single diagnostic record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
    /// Operation the event belongs to
    pub operation: Operation,
    /// Event payload
    pub detail: EventDetail,
}

impl DiagnosticEvent {
    /// Create an event stamped with the current time
    #[must_use]
    pub fn now(operation: Operation, detail: EventDetail) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail,
        }
    }

    /// Render the event as one log line (no trailing newline)
    #[must_use]
    pub fn to_line(&self) -> String {
        let message = match &self.detail {
            EventDetail::RequestReceived => format!(
                "Request received: {}",
                self.timestamp.format("%Y-%m-%d %H:%M:%S")
            ),
            EventDetail::IngredientsReceived(ingredients) => {
                format!("Received ingredients: {ingredients:?}")
            }
            EventDetail::RecipesFound(count) => format!("Found {count} recipes"),
            EventDetail::RecipeFound(name) => format!("Found recipe: {name}"),
            EventDetail::Failed(message) => format!("Error: {message}"),
        };
        format!("[{}] {message}", self.operation)
    }
}

/// Destination for request diagnostics
#[async_trait]
pub trait DiagnosticSink: Send + Sync {
    /// Record one event; implementations must not fail the caller
    async fn record(&self, event: DiagnosticEvent);
}

/// Emits diagnostics as structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl DiagnosticSink for TracingSink {
    async fn record(&self, event: DiagnosticEvent) {
        let operation = event.operation.as_str();
        match &event.detail {
            EventDetail::RequestReceived => {
                info!(operation, received_at = %event.timestamp.to_rfc3339(), "Request received");
            }
            EventDetail::IngredientsReceived(ingredients) => {
                info!(operation, ?ingredients, "Received ingredients");
            }
            EventDetail::RecipesFound(count) => {
                info!(operation, count, "Found recipes");
            }
            EventDetail::RecipeFound(name) => {
                info!(operation, recipe.name = %name, "Found recipe");
            }
            EventDetail::Failed(message) => {
                warn!(operation, error = %message, "Operation failed");
            }
        }
    }
}

/// Appends one line per event to a file, opening it per write
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink appending to `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the sink appends to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await
    }
}

#[async_trait]
impl DiagnosticSink for FileSink {
    async fn record(&self, event: DiagnosticEvent) {
        if let Err(e) = self.append(&event.to_line()).await {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to write diagnostic log entry"
            );
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

#[async_trait]
impl DiagnosticSink for NoopSink {
    async fn record(&self, _event: DiagnosticEvent) {}
}

/// Pick the sink for a configured log path: file when set, tracing otherwise
#[must_use]
pub fn sink_for_path(path: Option<&Path>) -> Arc<dyn DiagnosticSink> {
    match path {
        Some(path) => Arc::new(FileSink::new(path)),
        None => Arc::new(TracingSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event_at(detail: EventDetail) -> DiagnosticEvent {
        DiagnosticEvent {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            operation: Operation::FindRecipes,
            detail,
        }
    }

    #[test]
    fn test_event_lines() {
        assert_eq!(
            event_at(EventDetail::RequestReceived).to_line(),
            "[find-recipes] Request received: 2025-03-14 09:26:53"
        );
        assert_eq!(
            event_at(EventDetail::RecipesFound(3)).to_line(),
            "[find-recipes] Found 3 recipes"
        );
        assert_eq!(
            event_at(EventDetail::Failed("Invalid ingredients format".into())).to_line(),
            "[find-recipes] Error: Invalid ingredients format"
        );
    }

    #[tokio::test]
    async fn test_file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry_diagnostics.log");
        let sink = FileSink::new(&path);

        sink.record(event_at(EventDetail::RequestReceived)).await;
        sink.record(event_at(EventDetail::RecipeFound("Fried Rice".into())))
            .await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "[find-recipes] Found recipe: Fried Rice");
    }

    #[tokio::test]
    async fn test_file_sink_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let sink = FileSink::new(dir.path());
        sink.record(event_at(EventDetail::RequestReceived)).await;
    }
}
