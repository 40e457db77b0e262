// Source module - where presence counts come from
pub mod widget;

pub use widget::{PresenceSource, WidgetSource, parse_widget_body};
