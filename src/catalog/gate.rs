//! Single-shot memoizing future for suspense-style loading
//!
//! Wraps one in-flight async result with three observable states so a
//! consuming view can declare "not ready yet" vs "ready" vs "failed"
//! without polling the transport. The wrapped operation is spawned
//! exactly once at construction; once settled, every subsequent read
//! returns the same cached value or re-raises the same shared error.
//! There is no invalidation or refresh path.

use crate::core::error::{Result, SharedError};
use std::future::Future;
use std::sync::{Arc, OnceLock};
use tokio::sync::Notify;

/// Observable state of a gate at one point in time
#[derive(Debug)]
pub enum GateState<'a, T> {
    /// The wrapped operation has not settled yet
    Pending,
    /// Settled successfully; the value is cached for all readers
    Ready(&'a T),
    /// Settled with an error; re-raised to all readers
    Failed(&'a SharedError),
}

impl<T> GateState<'_, T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, GateState::Pending)
    }
}

/// A pending aggregate fetch wrapped in a write-once result cell
#[derive(Debug)]
pub struct SuspenseGate<T> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    cell: OnceLock<std::result::Result<T, SharedError>>,
    notify: Notify,
}

impl<T> SuspenseGate<T>
where
    T: Send + Sync + 'static,
{
    /// Start the wrapped operation and return the gate guarding it
    ///
    /// Must be called within a tokio runtime; the future runs to
    /// completion on the runtime regardless of how often (or whether)
    /// the gate is read.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let inner = Arc::new(Inner {
            cell: OnceLock::new(),
            notify: Notify::new(),
        });

        let writer = Arc::clone(&inner);
        tokio::spawn(async move {
            let settled = fut.await.map_err(Arc::new);
            // The cell is only ever written here, so set cannot fail
            let _ = writer.cell.set(settled);
            writer.notify.notify_waiters();
        });

        Self { inner }
    }

    /// Non-blocking read of the current state
    pub fn poll(&self) -> GateState<'_, T> {
        match self.inner.cell.get() {
            None => GateState::Pending,
            Some(Ok(value)) => GateState::Ready(value),
            Some(Err(err)) => GateState::Failed(err),
        }
    }

    /// Suspending read: parks the caller until the wrapped operation
    /// settles, then returns the cached outcome
    pub async fn read(&self) -> std::result::Result<&T, SharedError> {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the cell, so a settlement between
            // the check and the await still wakes us
            notified.as_mut().enable();
            if let Some(settled) = self.inner.cell.get() {
                return settled.as_ref().map_err(Arc::clone);
            }
            notified.await;
        }
    }
}

impl<T> Clone for SuspenseGate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AtlasError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_pending_until_settled() {
        let (tx, rx) = oneshot::channel::<u32>();
        let gate = SuspenseGate::spawn(async move {
            let value = rx.await.expect("sender dropped");
            Ok(value)
        });

        assert!(gate.poll().is_pending());

        tx.send(7).unwrap();
        assert_eq!(*gate.read().await.unwrap(), 7);
        assert!(matches!(gate.poll(), GateState::Ready(&7)));
    }

    #[tokio::test]
    async fn test_runs_at_most_once_across_reads() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let gate = SuspenseGate::spawn(async {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        });

        let first = gate.read().await.unwrap().clone();
        let second = gate.read().await.unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_re_raised_to_every_reader() {
        let gate: SuspenseGate<u32> = SuspenseGate::spawn(async {
            Err(AtlasError::CollectionLoad("listing unreachable".into()))
        });

        let first = gate.read().await.unwrap_err();
        let second = gate.read().await.unwrap_err();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(matches!(gate.poll(), GateState::Failed(_)));
    }

    #[tokio::test]
    async fn test_clones_share_one_settlement() {
        let (tx, rx) = oneshot::channel::<&'static str>();
        let gate = SuspenseGate::spawn(async move {
            Ok(rx.await.expect("sender dropped"))
        });
        let other = gate.clone();

        tx.send("ready").unwrap();
        assert_eq!(*gate.read().await.unwrap(), "ready");
        assert_eq!(*other.read().await.unwrap(), "ready");
    }
}
