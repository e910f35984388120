// ── Trailing-edge debouncer ──
//
// Collapses bursts of input (search keystrokes) into the last value once
// input has been quiet for the configured period.

use std::time::Duration;

use tokio::sync::mpsc;

/// Quiet period applied to device search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounces values pushed through it or through any of its handles.
pub struct Debouncer<T> {
    period: Duration,
    tx: Option<mpsc::UnboundedSender<T>>,
    rx: mpsc::UnboundedReceiver<T>,
}

/// Cloneable input side of a [`Debouncer`], for pushing from other tasks.
#[derive(Debug)]
pub struct DebounceHandle<T> {
    tx: Option<mpsc::UnboundedSender<T>>,
}

impl<T> Clone for DebounceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> DebounceHandle<T> {
    /// Push a value. Returns `false` once the debouncer is gone or the
    /// handle was taken after [`Debouncer::close`].
    pub fn push(&self, value: T) -> bool {
        self.tx.as_ref().is_some_and(|tx| tx.send(value).is_ok())
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            period,
            tx: Some(tx),
            rx,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn handle(&self) -> DebounceHandle<T> {
        DebounceHandle {
            tx: self.tx.clone(),
        }
    }

    /// Push a value, restarting the quiet period. Ignored after [`close`](Self::close).
    pub fn push(&self, value: T) {
        if let Some(tx) = &self.tx {
            // The receiver lives in `self`, so the send cannot fail.
            let _ = tx.send(value);
        }
    }

    /// Stop accepting input from `self`. Once every handle is dropped too,
    /// [`next`](Self::next) flushes the pending value and then yields `None`.
    pub fn close(&mut self) {
        self.tx = None;
    }

    /// Wait for the first value, then for a quiet period, and return the
    /// latest value seen. `None` once closed and drained.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.period, self.rx.recv()).await {
                Ok(Some(value)) => latest = value,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}
