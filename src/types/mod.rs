pub mod constants;
pub mod error;
pub mod snapshot;

pub use constants::*;
pub use error::{PresenceError, Result};
pub use snapshot::{PresenceSnapshot, RefreshPhase, WidgetMember, WidgetPayload};
