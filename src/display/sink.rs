use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A UI surface that renders a textual count.
///
/// Sinks are written from background tasks, so implementations must be
/// cheap and non-blocking.
pub trait DisplaySink: Send + Sync {
    fn set_text(&self, text: &str);
}

/// The two sinks the refresher writes: member total and online count.
#[derive(Clone)]
pub struct DisplaySinks {
    pub member_count: Arc<dyn DisplaySink>,
    pub online_count: Arc<dyn DisplaySink>,
}

impl DisplaySinks {
    pub fn new(member_count: Arc<dyn DisplaySink>, online_count: Arc<dyn DisplaySink>) -> Self {
        Self {
            member_count,
            online_count,
        }
    }
}

/// Sink that forwards every rendered value over an unbounded channel.
///
/// This is the integration point for UIs: receive on the returned channel
/// and paint whatever arrives.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    /// Creates a sink together with its receiving half.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl DisplaySink for ChannelSink {
    fn set_text(&self, text: &str) {
        if self.sender.send(text.to_string()).is_err() {
            tracing::debug!("display receiver dropped, discarding value: {}", text);
        }
    }
}

/// Sink that retains the full render history in memory.
pub struct MemorySink {
    history: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(Vec::new()),
        }
    }

    /// Most recently rendered value, if anything has been rendered yet.
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Every rendered value, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for MemorySink {
    fn set_text(&self, text: &str) {
        self.lock().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_history_in_order() {
        let sink = MemorySink::new();
        assert_eq!(sink.last(), None);

        sink.set_text("Loading...");
        sink.set_text("37");
        assert_eq!(sink.last().as_deref(), Some("37"));
        assert_eq!(sink.history(), vec!["Loading...", "37"]);
    }

    #[tokio::test]
    async fn test_channel_sink_forwards_values() {
        let (sink, mut receiver) = ChannelSink::new();
        sink.set_text("484");
        assert_eq!(receiver.recv().await.as_deref(), Some("484"));
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, receiver) = ChannelSink::new();
        drop(receiver);
        // Must not panic or error out
        sink.set_text("484");
    }
}
