use log::debug;

use super::{RecommendEvent, RecommendRequest, RecommendationBackend};
use crate::error::RecommendError;

/// Numbers outgoing requests and filters out answers that were overtaken.
///
/// Only the most recently dispatched request may update the screen: an event
/// whose sequence number is lower than the latest dispatched one is dropped.
pub struct RecommendationDispatcher {
    backend: Box<dyn RecommendationBackend>,
    next_seq: u64,
    latest: Option<u64>,
    in_flight: usize,
}

impl RecommendationDispatcher {
    pub fn new(backend: Box<dyn RecommendationBackend>) -> Self {
        Self {
            backend,
            next_seq: 1,
            latest: None,
            in_flight: 0,
        }
    }

    /// Hands the input to the backend and returns the assigned sequence number.
    pub async fn submit(&mut self, input: String) -> Result<u64, RecommendError> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.backend.send(RecommendRequest { seq, input }).await?;
        self.latest = Some(seq);
        self.in_flight += 1;
        debug!("dispatched recommendation request #{seq} via {}", self.backend.name());
        Ok(seq)
    }

    /// Returns the next event that belongs to the latest request, if any.
    pub fn poll(&mut self) -> Option<RecommendEvent> {
        while let Some(event) = self.backend.poll_event() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let seq = event.seq();
            if self.latest.is_some_and(|latest| seq < latest) {
                debug!("discarding stale response #{seq}");
                continue;
            }
            return Some(event);
        }
        None
    }

    /// True while at least one dispatched request has not answered yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::testing::{FakeBackend, arabica};

    #[tokio::test]
    async fn numbers_requests_in_order() {
        let backend = FakeBackend::default();
        let mut dispatcher = RecommendationDispatcher::new(Box::new(backend.clone()));

        assert_eq!(dispatcher.submit(String::from("a")).await.unwrap(), 1);
        assert_eq!(dispatcher.submit(String::new()).await.unwrap(), 2);

        let sent = backend.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].input, "a");
        assert_eq!(sent[1].input, "");
        assert!(dispatcher.is_pending());
    }

    #[tokio::test]
    async fn drops_responses_overtaken_by_newer_requests() {
        let backend = FakeBackend::default();
        let mut dispatcher = RecommendationDispatcher::new(Box::new(backend.clone()));
        dispatcher.submit(String::from("first")).await.unwrap();
        dispatcher.submit(String::from("second")).await.unwrap();

        // The second request answers first, then the stale first one arrives.
        backend.complete(2, arabica());
        backend.fail(1, "late");

        match dispatcher.poll() {
            Some(RecommendEvent::Completed { seq, result }) => {
                assert_eq!(seq, 2);
                assert_eq!(result, arabica());
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(dispatcher.poll().is_none());
        assert!(!dispatcher.is_pending());
    }

    #[tokio::test]
    async fn nothing_to_poll_before_any_answer() {
        let backend = FakeBackend::default();
        let mut dispatcher = RecommendationDispatcher::new(Box::new(backend));
        assert!(dispatcher.poll().is_none());
        assert!(!dispatcher.is_pending());
    }
}
