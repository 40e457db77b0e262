use discord_widget_rs::{
    InviteLink, MemorySink, PresenceRefresher, RefreshPhase, RefresherOptions,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🦀 Testing Fallback Rendering\n");

    let member_sink = Arc::new(MemorySink::new());
    let online_sink = Arc::new(MemorySink::new());

    println!("✅ Test 1: Starting against an unreachable endpoint...");
    let refresher = PresenceRefresher::builder(RefresherOptions {
        guild_id: "1333341421691994124".to_string(),
        endpoint: "https://localhost:9/api".to_string(),
        ..Default::default()
    })?
    .member_sink(member_sink.clone())
    .online_sink(online_sink.clone())
    .build()?;

    refresher.start().await;

    match refresher.phase().await {
        RefreshPhase::Fallback => println!("✅ Expected: refresher entered fallback\n"),
        phase => println!("❌ Unexpected phase: {:?}\n", phase),
    }
    println!(
        "   members sink shows: {:?}",
        member_sink.last().unwrap_or_default()
    );
    println!(
        "   online sink shows:  {:?}\n",
        online_sink.last().unwrap_or_default()
    );

    refresher.shutdown().await;

    println!("✅ Test 2: Copying the invite link...");
    let invite = InviteLink::new("https://discord.gg/pzjazBzxvG");
    match invite.copy_to_clipboard() {
        Ok(_) => println!("✅ Copied {} to the clipboard", invite),
        Err(e) => println!("✅ Expected on headless machines: {}", e),
    }

    println!("\n🎉 All tests completed!");
    Ok(())
}
