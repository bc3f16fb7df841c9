use chrono::{DateTime, Utc};
use serde::Serialize;

/// One page of records plus the size of the whole filtered set.
///
/// Invariant: `total_count >= items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    items: Vec<T>,
    total_count: u64,
}

impl<T> PagedResult<T> {
    /// Build a page. A `total_count` smaller than the page itself is raised to the page length.
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        let total_count = total_count.max(items.len() as u64);
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop rows past `size`, keeping the total count.
    pub fn truncate(&mut self, size: usize) {
        self.items.truncate(size);
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Uniform wrapper for every API response.
///
/// The success and failure states can only be produced by [`Envelope::success`] and
/// [`Envelope::failure`]; a success never carries a message and a failure never carries a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    result: Option<T>,
    error_message: String,
    time_generated: DateTime<Utc>,
}

impl<T> Envelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            error_message: String::new(),
            time_generated: Utc::now(),
        }
    }

    /// Failure envelope. An empty message is replaced so the state stays distinguishable.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut error_message = message.into();
        if error_message.is_empty() {
            error_message.push_str("request failed");
        }
        Self {
            result: None,
            error_message,
            time_generated: Utc::now(),
        }
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn time_generated(&self) -> DateTime<Utc> {
        self.time_generated
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }
}
