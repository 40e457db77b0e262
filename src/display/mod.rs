// Display module - sink trait and bundled implementations
pub mod format;
pub mod sink;

pub use format::format_count;
pub use sink::{ChannelSink, DisplaySink, DisplaySinks, MemorySink};
