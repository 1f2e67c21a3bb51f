//! Debounced request dispatcher.
//!
//! Collapses bursts of rapid search requests into a single backend call:
//! a request arriving while a call is in flight, or within the debounce
//! window of the last issued call, resolves with that call's result
//! instead of issuing another one (debounce-with-join). Every caller
//! still receives a result.
//!
//! The in-flight call is a single shared future behind a mutex; execution
//! is effectively single-owner, so no further synchronization is needed.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::domain::Journey;

/// Error surfaced by a dispatch backend.
///
/// Carries a message only, so results stay cheaply cloneable across every
/// caller joined on the same in-flight future. The production backend is
/// fail-open and never produces one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("search backend failure: {0}")]
pub struct BackendFailure(pub String);

/// A search backend the dispatcher can drive.
///
/// Implemented by the cached webhook pipeline in production and by
/// counting mocks in tests.
pub trait SearchBackend: Send + Sync + 'static {
    /// Run one search for the given (already non-blank) query.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Journey>, BackendFailure>> + Send;
}

/// Shared in-flight call state.
struct Inflight {
    /// Issue stamp; joins are allowed until `window` past this point.
    issued_at: Instant,
    /// Monotonic id used to clear exactly this entry on failure.
    generation: u64,
    /// The call every joined waiter awaits.
    shared: Shared<BoxFuture<'static, Result<Vec<Journey>, BackendFailure>>>,
}

struct DispatchState {
    current: Option<Inflight>,
    next_generation: u64,
}

/// Debouncing dispatcher over a [`SearchBackend`].
pub struct Dispatcher<B> {
    backend: Arc<B>,
    window: Duration,
    state: Mutex<DispatchState>,
}

impl<B: SearchBackend> Dispatcher<B> {
    /// Create a dispatcher with the given debounce window.
    pub fn new(backend: Arc<B>, window: Duration) -> Self {
        Self {
            backend,
            window,
            state: Mutex::new(DispatchState {
                current: None,
                next_generation: 0,
            }),
        }
    }

    /// Dispatch a search request.
    ///
    /// Blank and whitespace-only queries are rejected before touching the
    /// backend and yield `Ok(None)`, leaving any prior results untouched;
    /// the caller decides whether that is a no-op or an error state.
    ///
    /// Otherwise the request either starts a backend call or joins the
    /// current one per the debounce rule. A backend failure clears the
    /// in-flight slot immediately so a retry issues a fresh call.
    pub async fn search(&self, query: &str) -> Result<Option<Vec<Journey>>, BackendFailure> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let (shared, generation) = self.join_or_start(query).await;
        let result = shared.await;

        if result.is_err() {
            let mut state = self.state.lock().await;
            if state
                .current
                .as_ref()
                .is_some_and(|c| c.generation == generation)
            {
                state.current = None;
            }
        }

        result.map(Some)
    }

    /// Join the current in-flight call if allowed, else start a new one.
    async fn join_or_start(
        &self,
        query: &str,
    ) -> (
        Shared<BoxFuture<'static, Result<Vec<Journey>, BackendFailure>>>,
        u64,
    ) {
        let mut state = self.state.lock().await;

        if let Some(current) = state.current.as_ref() {
            // Join while the call is still pending (at most one
            // outstanding call), or while the window is open so a burst
            // of instant completions still collapses to one call.
            let pending = current.shared.peek().is_none();
            if pending || current.issued_at.elapsed() < self.window {
                return (current.shared.clone(), current.generation);
            }
        }

        let generation = state.next_generation;
        state.next_generation += 1;

        let backend = Arc::clone(&self.backend);
        let owned_query = query.to_string();
        let shared = async move { backend.search(&owned_query).await }
            .boxed()
            .shared();

        state.current = Some(Inflight {
            issued_at: Instant::now(),
            generation,
            shared: shared.clone(),
        });

        (shared, generation)
    }
}
