use tokio::task::JoinHandle;

/// Tracks the refresher's background tasks so teardown can abort them.
pub struct TaskManager {
    handles: Vec<JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Spawn a task and keep its handle
    pub fn spawn<F>(&mut self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(future));
    }

    /// Abort every tracked task
    pub fn abort_all(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        self.handles.clear();
    }

    /// Whether any tracked task is still running
    pub fn has_running_tasks(&self) -> bool {
        self.handles.iter().any(|handle| !handle.is_finished())
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_abort_all_clears_tracked_tasks() {
        let mut manager = TaskManager::new();
        manager.spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        });
        assert!(manager.has_running_tasks());

        manager.abort_all();
        assert!(!manager.has_running_tasks());
    }
}
