// Support desk demo entry point
// Replays a short sample conversation through one Coordinator.

use anyhow::Context;
use supportdesk_core::config::DemoConfig;
use supportdesk_core::telemetry::init_telemetry;
use supportdesk_core::Coordinator;
use tracing::info;

const SAMPLE_MESSAGES: &[&str] = &[
    "I want to cancel my subscription.",
    "My invoice amount is wrong.",
    "I need a refund please.",
    "Hello, I need help.",
];

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = DemoConfig::from_env().context("Failed to read demo configuration")?;
    init_telemetry(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let messages: Vec<&str> = if args.is_empty() {
        SAMPLE_MESSAGES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut agent = Coordinator::new();
    info!(session_id = %agent.session_id(), messages = messages.len(), "Starting demo");

    for message in messages {
        let out = agent.ask(message);
        println!("USER: {}", message);
        println!("{}", serde_json::to_string_pretty(&out)?);
        println!("{}", "-".repeat(40));
    }

    println!("\nConversation memory:");
    println!("{}", agent.memory().context());

    Ok(())
}
