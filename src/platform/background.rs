use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Work running off the caller's thread, polled for its result.
pub struct BackgroundTask<T> {
    receiver: Receiver<T>,
}

pub fn spawn<F, T>(work: F) -> BackgroundTask<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the caller stopped caring.
        sender.send(work()).ok();
    });
    BackgroundTask { receiver }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Poll<T> {
    Ready(T),
    Pending,
    /// The worker exited without producing a value.
    Lost,
}

impl<T> BackgroundTask<T> {
    pub fn try_take(&self) -> Poll<T> {
        match self.receiver.try_recv() {
            Ok(value) => Poll::Ready(value),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => Poll::Lost,
        }
    }

    /// Blocks until the worker finishes.
    pub fn wait(self) -> Option<T> {
        self.receiver.recv().ok()
    }
}
