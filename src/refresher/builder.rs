use super::RefreshState;
use super::core::PresenceRefresher;
use crate::display::{DisplaySink, DisplaySinks};
use crate::source::{PresenceSource, WidgetSource};
use crate::types::constants::{DEFAULT_TOTAL_MEMBERS, DEFAULT_WIDGET_ENDPOINT};
use crate::types::{PresenceError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct RefresherOptions {
    /// Guild identifier used to address the widget endpoint
    pub guild_id: String,
    /// Operator-configured member total; the widget does not report it
    pub total_members: u64,
    /// Base API endpoint
    pub endpoint: String,
    /// Refresh period in milliseconds
    pub refresh_interval: Option<u64>,
    /// First-render sweep duration in milliseconds
    pub animation_duration: Option<u64>,
}

impl Default for RefresherOptions {
    fn default() -> Self {
        Self {
            guild_id: String::new(),
            total_members: DEFAULT_TOTAL_MEMBERS,
            endpoint: DEFAULT_WIDGET_ENDPOINT.to_string(),
            refresh_interval: None,
            animation_duration: None,
        }
    }
}

/// Builder for PresenceRefresher that wires the sinks and the source
pub struct RefresherBuilder {
    options: RefresherOptions,
    source: Option<Arc<dyn PresenceSource>>,
    member_sink: Option<Arc<dyn DisplaySink>>,
    online_sink: Option<Arc<dyn DisplaySink>>,
}

impl RefresherBuilder {
    /// Create a new builder
    pub fn new(options: RefresherOptions) -> Result<Self> {
        // Validate the guild id is provided
        if options.guild_id.is_empty() {
            return Err(PresenceError::Config("guild id is required".to_string()));
        }

        Ok(Self {
            options,
            source: None,
            member_sink: None,
            online_sink: None,
        })
    }

    /// Override the presence source (tests, alternative transports)
    pub fn source(mut self, source: Arc<dyn PresenceSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sink that shows the configured member total
    pub fn member_sink(mut self, sink: Arc<dyn DisplaySink>) -> Self {
        self.member_sink = Some(sink);
        self
    }

    /// Sink that shows the polled online count
    pub fn online_sink(mut self, sink: Arc<dyn DisplaySink>) -> Self {
        self.online_sink = Some(sink);
        self
    }

    /// Build the refresher; defaults to a [`WidgetSource`] over the
    /// configured endpoint when no source override was given
    pub fn build(self) -> Result<PresenceRefresher> {
        let source: Arc<dyn PresenceSource> = match self.source {
            Some(source) => source,
            None => Arc::new(WidgetSource::new(
                self.options.endpoint.clone(),
                self.options.guild_id.clone(),
            )?),
        };

        let member_sink = self
            .member_sink
            .ok_or_else(|| PresenceError::Config("member count sink is required".to_string()))?;
        let online_sink = self
            .online_sink
            .ok_or_else(|| PresenceError::Config("online count sink is required".to_string()))?;

        let state = RefreshState::new(self.options.total_members);

        Ok(PresenceRefresher {
            options: self.options,
            source,
            sinks: DisplaySinks::new(member_sink, online_sink),
            state: Arc::new(RwLock::new(state)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemorySink;

    #[test]
    fn test_empty_guild_id_is_rejected() {
        let result = RefresherBuilder::new(RefresherOptions::default());
        assert!(matches!(result, Err(PresenceError::Config(_))));
    }

    #[test]
    fn test_missing_sink_is_rejected() {
        let options = RefresherOptions {
            guild_id: "42".to_string(),
            ..Default::default()
        };
        let result = RefresherBuilder::new(options)
            .unwrap()
            .member_sink(Arc::new(MemorySink::new()))
            .build();
        assert!(matches!(result, Err(PresenceError::Config(_))));
    }

    #[test]
    fn test_build_with_default_widget_source() {
        let options = RefresherOptions {
            guild_id: "42".to_string(),
            ..Default::default()
        };
        let refresher = RefresherBuilder::new(options)
            .unwrap()
            .member_sink(Arc::new(MemorySink::new()))
            .online_sink(Arc::new(MemorySink::new()))
            .build();
        assert!(refresher.is_ok());
    }
}
