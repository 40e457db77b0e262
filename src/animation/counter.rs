use super::easing::eased_value;
use crate::display::{DisplaySink, format_count};
use crate::types::constants::FRAME_INTERVAL;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Sweeps a sink from 0 to `target` over `duration`.
///
/// Cooperative frame loop: samples the easing curve once per frame tick
/// and stops itself once the window has elapsed. The last write is always
/// exactly `target`.
pub async fn animate_counter(sink: &dyn DisplaySink, target: u64, duration: Duration) {
    let start = Instant::now();
    let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        frames.tick().await;
        let elapsed = start.elapsed();
        sink.set_text(&format_count(eased_value(elapsed, duration, target)));
        if elapsed >= duration {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemorySink;

    fn parse_count(text: &str) -> u64 {
        text.replace(',', "").parse().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_renders_zero_then_lands_on_target() {
        let sink = MemorySink::new();
        animate_counter(&sink, 100, Duration::from_millis(2_000)).await;

        let history = sink.history();
        assert_eq!(history.first().map(String::as_str), Some("0"));
        assert_eq!(history.last().map(String::as_str), Some("100"));

        let mut previous = 0;
        for value in history.iter().map(|text| parse_count(text)) {
            assert!(value >= previous, "sweep went backwards at {}", value);
            previous = value;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_formats_large_targets() {
        let sink = MemorySink::new();
        animate_counter(&sink, 1_234, Duration::from_millis(2_000)).await;
        assert_eq!(sink.last().as_deref(), Some("1,234"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_target_renders_once_per_frame_without_moving() {
        let sink = MemorySink::new();
        animate_counter(&sink, 0, Duration::from_millis(100)).await;
        assert!(sink.history().iter().all(|text| text == "0"));
    }
}
