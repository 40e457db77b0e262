//! # Discord Widget Rust
//!
//! An unofficial Rust client for the public guild widget endpoint: polls a
//! live presence count on a fixed schedule and drives animated counter
//! displays.
//!
//! ## Example
//!
//! ```no_run
//! use discord_widget_rs::{ChannelSink, PresenceRefresher, RefresherOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (member_sink, _member_rx) = ChannelSink::new();
//!     let (online_sink, _online_rx) = ChannelSink::new();
//!
//!     let refresher = PresenceRefresher::builder(RefresherOptions {
//!         guild_id: "1333341421691994124".to_string(),
//!         ..Default::default()
//!     })?
//!     .member_sink(Arc::new(member_sink))
//!     .online_sink(Arc::new(online_sink))
//!     .build()?;
//!
//!     refresher.start().await;
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod display;
pub mod infrastructure;
pub mod invite;
pub mod refresher;
pub mod source;
pub mod types;

pub use display::{ChannelSink, DisplaySink, DisplaySinks, MemorySink};
pub use invite::InviteLink;
pub use refresher::{PresenceRefresher, RefresherBuilder, RefresherOptions};
pub use source::{PresenceSource, WidgetSource};
pub use types::{PresenceError, PresenceSnapshot, RefreshPhase, WidgetPayload};
