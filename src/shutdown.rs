use tokio::sync::watch;

pub type ShutdownSender = watch::Sender<bool>;

/// Cancellation context handed to every request unit.
///
/// Cloning is cheap; all clones observe the same signal. A signal whose
/// sender is dropped without firing never cancels.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    #[must_use]
    pub fn channel() -> (ShutdownSender, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, Self { rx })
    }

    /// A signal that can never fire.
    #[must_use]
    pub fn never() -> Self {
        let (_tx, signal) = Self::channel();
        signal
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
