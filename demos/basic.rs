use discord_widget_rs::{ChannelSink, PresenceRefresher, RefresherOptions};
use std::sync::Arc;
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🦀 Live Presence Counter Demo\n");

    let (member_sink, mut member_rx) = ChannelSink::new();
    let (online_sink, mut online_rx) = ChannelSink::new();

    // Print every value the refresher renders
    tokio::spawn(async move {
        while let Some(value) = member_rx.recv().await {
            println!("   members: {}", value);
        }
    });
    tokio::spawn(async move {
        while let Some(value) = online_rx.recv().await {
            println!("   online:  {}", value);
        }
    });

    println!("✅ Building refresher...");
    println!("   (the guild must have Widget enabled in Server Settings > Widget)\n");
    let refresher = PresenceRefresher::builder(RefresherOptions {
        guild_id: "1333341421691994124".to_string(),
        ..Default::default()
    })?
    .member_sink(Arc::new(member_sink))
    .online_sink(Arc::new(online_sink))
    .build()?;

    println!("✅ Starting: animated first render, then one refresh per minute\n");
    refresher.start().await;

    // Let the schedule fire a couple of times
    sleep(Duration::from_secs(125)).await;

    println!("\n✅ Shutting down...");
    refresher.shutdown().await;
    println!("🎉 Done!");

    Ok(())
}
