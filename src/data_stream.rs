use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Collects the messages a worker thread sends, in the order they were sent.
pub struct DataStream<T> {
    receiver: Receiver<T>,
    data: Vec<T>,
}

impl<T> DataStream<T> {
    pub fn new(receiver: Receiver<T>) -> Self {
        DataStream {
            receiver,
            data: vec![],
        }
    }

    /// Wait up to `timeout` for a message, then take everything else that is
    /// already queued. Returns the newly received messages.
    pub fn update(&mut self, timeout: Duration) -> &[T] {
        let num_before = self.data.len();
        match self.receiver.recv_timeout(timeout) {
            Ok(first) => {
                self.data.push(first);
                self.data.extend(self.receiver.try_iter());
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {}
        }
        &self.data[num_before..]
    }

    /// Take every message that is queued without waiting.
    pub fn drain(&mut self) -> &[T] {
        let num_before = self.data.len();
        self.data.extend(self.receiver.try_iter());
        &self.data[num_before..]
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}
