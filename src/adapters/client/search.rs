//! Debounced search with stale-response suppression.
//!
//! Every keystroke takes a new generation. A request only goes out once the
//! input has been quiet for the debounce window, and its response is only
//! delivered if no newer search started in the meantime.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

/// Quiet period before a search request is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Generation number handed out when a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug)]
pub struct SearchGate {
    generation: AtomicU64,
    debounce: Duration,
}

impl Default for SearchGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchGate {
    pub fn new(debounce: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Starts a new generation; earlier tickets become stale.
    pub fn ticket(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Waits out the debounce window, then runs `fetch`. Returns `None` when
    /// a newer search superseded this one, before or after the request.
    pub async fn run<F, Fut, T>(&self, fetch: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.ticket();
        if !self.debounce.is_zero() {
            sleep(self.debounce).await;
        }
        if !self.is_current(ticket) {
            tracing::trace!(generation = ticket.0, "search superseded before request");
            return None;
        }
        let response = fetch().await;
        if !self.is_current(ticket) {
            tracing::trace!(generation = ticket.0, "discarding stale search response");
            return None;
        }
        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_makes_older_stale() {
        let gate = SearchGate::default();
        let first = gate.ticket();
        assert!(gate.is_current(first));
        let second = gate.ticket();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn default_debounce_is_400ms() {
        assert_eq!(SearchGate::default().debounce(), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn single_search_is_delivered() {
        let gate = SearchGate::new(Duration::from_millis(5));
        assert_eq!(gate.run(|| async { "budi" }).await, Some("budi"));
    }

    #[tokio::test]
    async fn typing_during_debounce_cancels_the_earlier_search() {
        let gate = SearchGate::new(Duration::from_millis(60));
        let (first, second) = tokio::join!(gate.run(|| async { "bu" }), async {
            sleep(Duration::from_millis(10)).await;
            gate.run(|| async { "budi" }).await
        });
        assert_eq!(first, None);
        assert_eq!(second, Some("budi"));
    }

    #[tokio::test]
    async fn slow_response_for_an_old_query_is_discarded() {
        let gate = SearchGate::new(Duration::ZERO);
        let (first, second) = tokio::join!(
            gate.run(|| async {
                sleep(Duration::from_millis(80)).await;
                "old"
            }),
            async {
                sleep(Duration::from_millis(10)).await;
                gate.run(|| async { "new" }).await
            }
        );
        assert_eq!(first, None);
        assert_eq!(second, Some("new"));
    }
}
