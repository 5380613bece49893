//! Cancellable fetches.
//!
//! Every transfer runs on its own task and is paired with a [`FetchHandle`]
//! owned by whoever asked for it. Cancelling the handle (or dropping it)
//! guarantees the result is never observed as a success: the transfer task
//! stops at its next await, and the [`Fetch`] future re-checks the token when
//! it resolves, which covers a response that lands after `cancel` but before
//! anyone polled it.
//!
//! Search requests and artwork downloads both go through here. For work that
//! has to come back to the UI loop, [`CancellableFetcher::deliver`] sends the
//! outcome over a channel instead of handing out the future.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll, ready};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::error::FetchError;
use super::transport::Transport;

pub type FetchId = u64;

pub type FetchOutcome = Result<Vec<u8>, FetchError>;

/// Cancellation token for one fetch.
///
/// Dropping the handle cancels the fetch, so a fetch never outlives its owner.
#[derive(Debug)]
pub struct FetchHandle {
    id: FetchId,
    token: CancellationToken,
}

impl FetchHandle {
    pub fn id(&self) -> FetchId {
        self.id
    }

    /// No-op once the fetch has completed.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Future half of a fetch. Resolves to the body, a failure, or `Cancelled`.
pub struct Fetch {
    task: JoinHandle<FetchOutcome>,
    token: CancellationToken,
}

impl Future for Fetch {
    type Output = FetchOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.token.is_cancelled() {
            return Poll::Ready(Err(FetchError::Cancelled));
        }

        let joined = ready!(Pin::new(&mut self.task).poll(cx));

        // The body may have arrived after cancel was requested.
        if self.token.is_cancelled() {
            return Poll::Ready(Err(FetchError::Cancelled));
        }

        Poll::Ready(match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(FetchError::Cancelled),
            Err(e) => Err(FetchError::Transport(format!("fetch task failed: {}", e))),
        })
    }
}

impl Drop for Fetch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Outcome of a [`CancellableFetcher::deliver`] call, tagged by the caller.
#[derive(Debug)]
pub struct Delivery<T> {
    pub tag: T,
    fetch_id: FetchId,
    pub outcome: FetchOutcome,
}

impl<T> Delivery<T> {
    pub(crate) fn new(tag: T, fetch_id: FetchId, outcome: FetchOutcome) -> Self {
        Self {
            tag,
            fetch_id,
            outcome,
        }
    }

    pub fn fetch_id(&self) -> FetchId {
        self.fetch_id
    }

    /// True when this delivery came from `handle` and the handle is still live.
    pub fn belongs_to(&self, handle: &FetchHandle) -> bool {
        self.fetch_id == handle.id() && !handle.is_cancelled()
    }
}

#[derive(Clone)]
pub struct CancellableFetcher {
    transport: Arc<dyn Transport>,
    next_id: Arc<AtomicU64>,
}

impl CancellableFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Start fetching `url`. Must be called from within a tokio runtime.
    pub fn fetch(&self, url: &str) -> (FetchHandle, Fetch) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        let transfer = self.transport.get(url);

        tracing::trace!(fetch_id = id, url, "Fetch started");

        let task_token = token.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => Err(FetchError::Cancelled),
                outcome = transfer => outcome,
            }
        });

        let handle = FetchHandle {
            id,
            token: token.clone(),
        };
        (handle, Fetch { task, token })
    }

    pub fn cancel(&self, handle: &FetchHandle) {
        handle.cancel();
    }

    /// Fetch `url` and send the outcome, tagged with `tag`, to `sender`.
    ///
    /// A cancelled fetch sends nothing.
    pub fn deliver<T>(&self, url: &str, tag: T, sender: mpsc::UnboundedSender<Delivery<T>>) -> FetchHandle
    where
        T: Send + 'static,
    {
        let (handle, fetch) = self.fetch(url);
        let fetch_id = handle.id();

        tokio::spawn(async move {
            let outcome = fetch.await;
            if outcome.as_ref().is_err_and(FetchError::is_cancelled) {
                tracing::trace!(fetch_id, "Fetch cancelled, nothing delivered");
                return;
            }
            // The receiver is gone when the owner shut down; nothing to do then.
            let _ = sender.send(Delivery::new(tag, fetch_id, outcome));
        });

        handle
    }
}
