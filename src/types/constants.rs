/// Base API endpoint; the widget document lives at
/// `<endpoint>/guilds/{id}/widget.json`
pub const DEFAULT_WIDGET_ENDPOINT: &str = "https://discord.com/api";

/// Refresh period for the background schedule (milliseconds)
pub const REFRESH_INTERVAL: u64 = 60_000;

/// First-render counter sweep duration (milliseconds)
pub const COUNTER_ANIMATION_DURATION: u64 = 2_000;

/// Frame interval for the counter sweep, nominally 60Hz (milliseconds)
pub const FRAME_INTERVAL: u64 = 16;

/// Default HTTP request timeout (milliseconds)
pub const DEFAULT_TIMEOUT: u64 = 10_000;

/// Member total shown on the total sink; the widget document does not
/// report it, so operators configure it by hand
pub const DEFAULT_TOTAL_MEMBERS: u64 = 484;

/// Placeholder shown on both sinks until the first fetch resolves
pub const LOADING_PLACEHOLDER: &str = "Loading...";
