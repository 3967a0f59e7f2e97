//! Отбрасывание ответов на устаревшие запросы
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Number of the most recently issued request.
///
/// Each fetch takes a ticket with [`LatestRequest::next`]; when the reply
/// arrives it is applied only if [`LatestRequest::is_current`] still holds.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest(Arc<AtomicU64>);

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}
