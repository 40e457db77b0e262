// Animation module - easing math and the counter sweep loop
pub mod counter;
pub mod easing;

pub use counter::animate_counter;
pub use easing::{ease_out_quart, eased_value};
