use super::{RefreshState, RefresherBuilder, RefresherOptions};
use crate::animation::animate_counter;
use crate::display::{DisplaySinks, format_count};
use crate::source::PresenceSource;
use crate::types::constants::{COUNTER_ANIMATION_DURATION, LOADING_PLACEHOLDER, REFRESH_INTERVAL};
use crate::types::{PresenceSnapshot, RefreshPhase, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Polls a presence source on a fixed schedule and keeps two display
/// sinks current: an operator-configured member total and the live
/// online count.
///
/// The first successful render sweeps both counters up from zero; every
/// later refresh writes the new values directly. Source failures never
/// propagate: the first fetch falls back to zeroed placeholder numbers,
/// periodic fetches leave the previously rendered values in place.
///
/// # Example
///
/// ```no_run
/// use discord_widget_rs::{ChannelSink, PresenceRefresher, RefresherOptions};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (member_sink, _member_rx) = ChannelSink::new();
/// let (online_sink, _online_rx) = ChannelSink::new();
///
/// let refresher = PresenceRefresher::builder(RefresherOptions {
///     guild_id: "1333341421691994124".to_string(),
///     ..Default::default()
/// })?
/// .member_sink(Arc::new(member_sink))
/// .online_sink(Arc::new(online_sink))
/// .build()?;
///
/// refresher.start().await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PresenceRefresher {
    pub(crate) options: RefresherOptions,
    pub(crate) source: Arc<dyn PresenceSource>,
    pub(crate) sinks: DisplaySinks,

    // Consolidated mutable state
    pub(crate) state: Arc<RwLock<RefreshState>>,
}

impl PresenceRefresher {
    /// Creates a builder for a refresher.
    ///
    /// # Errors
    ///
    /// Returns [`PresenceError::Config`](crate::types::PresenceError::Config)
    /// if the guild id is empty.
    pub fn builder(options: RefresherOptions) -> Result<RefresherBuilder> {
        RefresherBuilder::new(options)
    }

    /// Issues a single request to the presence source.
    ///
    /// On success, returns a snapshot pairing the configured member total
    /// with the count the source reported. A payload without a usable
    /// `presence_count` reads as 0 online rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`PresenceError::SourceUnavailable`](crate::types::PresenceError::SourceUnavailable)
    /// on transport failures or non-2xx statuses, and
    /// [`PresenceError::MalformedResponse`](crate::types::PresenceError::MalformedResponse)
    /// when the body is not a widget document.
    pub async fn fetch_once(&self) -> Result<PresenceSnapshot> {
        let payload = self.source.fetch_widget().await?;
        Ok(PresenceSnapshot::new(
            self.options.total_members,
            payload.presence_count,
        ))
    }

    /// Shows the loading placeholder, performs the first fetch and render,
    /// then spawns the recurring refresh schedule.
    ///
    /// Never fails: a down source is logged and rendered as the fallback
    /// snapshot (configured total, 0 online). Calling `start()` on an
    /// already-started refresher is a no-op.
    ///
    /// The schedule runs until [`shutdown()`](Self::shutdown) or until the
    /// hosting process exits.
    pub async fn start(&self) {
        {
            let state = self.state.read().await;
            if state.phase != RefreshPhase::Uninitialized {
                tracing::debug!("refresher already started, ignoring start()");
                return;
            }
        }

        self.set_phase(RefreshPhase::Loading).await;
        self.sinks.member_count.set_text(LOADING_PLACEHOLDER);
        self.sinks.online_count.set_text(LOADING_PLACEHOLDER);

        match self.fetch_once().await {
            Ok(snapshot) => {
                tracing::info!("initial presence fetch succeeded: {} online", snapshot.online);
                self.store(snapshot, RefreshPhase::Live).await;
                self.render_snapshot(snapshot, true).await;
            }
            Err(e) => {
                tracing::warn!("initial presence fetch failed, rendering fallback: {}", e);
                let fallback = PresenceSnapshot::fallback(self.options.total_members);
                self.store(fallback, RefreshPhase::Fallback).await;
                self.render_snapshot(fallback, false).await;
            }
        }

        self.spawn_refresh_schedule().await;
    }

    /// Writes a snapshot to both sinks.
    ///
    /// With `animate` set, both counters sweep up from zero concurrently
    /// over the configured window; otherwise the values land immediately.
    pub async fn render_snapshot(&self, snapshot: PresenceSnapshot, animate: bool) {
        if animate {
            let duration = Duration::from_millis(
                self.options
                    .animation_duration
                    .unwrap_or(COUNTER_ANIMATION_DURATION),
            );
            tokio::join!(
                animate_counter(self.sinks.member_count.as_ref(), snapshot.total, duration),
                animate_counter(self.sinks.online_count.as_ref(), snapshot.online, duration),
            );
        } else {
            self.sinks.member_count.set_text(&format_count(snapshot.total));
            self.sinks.online_count.set_text(&format_count(snapshot.online));
        }
    }

    /// Last snapshot handed to the sinks.
    pub async fn snapshot(&self) -> PresenceSnapshot {
        self.state.read().await.snapshot
    }

    /// Current lifecycle phase.
    pub async fn phase(&self) -> RefreshPhase {
        self.state.read().await.phase
    }

    /// Aborts the background schedule.
    ///
    /// The sinks keep whatever they last rendered; there is no "stopped"
    /// presentation.
    pub async fn shutdown(&self) {
        tracing::info!("shutting down presence refresher");
        self.state.write().await.task_manager.abort_all();
    }

    async fn spawn_refresh_schedule(&self) {
        let period = Duration::from_millis(
            self.options.refresh_interval.unwrap_or(REFRESH_INTERVAL),
        );
        let refresher = self.clone();

        let mut state = self.state.write().await;
        state.task_manager.spawn(async move {
            // First tick lands one full period after start, not immediately
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;

                // Fire-and-forget: a slow fetch must not delay the next
                // tick. Overlapping refreshes are accepted, writes are
                // full snapshot replacements and the last one wins.
                let tick_refresher = refresher.clone();
                tokio::spawn(async move {
                    tick_refresher.refresh_tick().await;
                });
            }
        });
    }

    async fn refresh_tick(&self) {
        match self.fetch_once().await {
            Ok(snapshot) => {
                self.store(snapshot, RefreshPhase::Live).await;
                self.render_snapshot(snapshot, false).await;
                tracing::debug!("presence refreshed: {} online", snapshot.online);
            }
            Err(e) => {
                // Sinks keep showing the previous values
                tracing::warn!("periodic presence refresh failed: {}", e);
            }
        }
    }

    async fn store(&self, snapshot: PresenceSnapshot, phase: RefreshPhase) {
        let mut state = self.state.write().await;
        state.snapshot = snapshot;
        state.phase = phase;
    }

    async fn set_phase(&self, phase: RefreshPhase) {
        self.state.write().await.phase = phase;
    }
}
