//! One-shot chat command: send a single message and print the reply.

use anyhow::Result;
use console::style;

use confidant_types::error::ChatError;

use crate::state::AppState;

/// Send `message` through the chat service and print the reply.
///
/// A blank message is reported like the REST API does, as an error payload
/// rather than a failed command. Provider and storage failures propagate.
///
/// # Examples
///
/// ```bash
/// confidant chat "I feel anxious today"
/// confidant chat "I feel anxious today" --json
/// ```
pub async fn send_message(state: &AppState, message: &str, json: bool) -> Result<()> {
    match state.chat_service.handle(message).await {
        Ok(outcome) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            println!();
            println!("  {}", outcome.response);
            println!();
            println!(
                "  {}",
                style(format!("saved as exchange #{}", outcome.exchange_id)).dim()
            );
            println!();
            Ok(())
        }
        Err(ChatError::Validation(reason)) => {
            if json {
                println!("{}", serde_json::json!({ "error": reason }));
            } else {
                eprintln!("  {} {}", style("!").red().bold(), reason);
            }
            Ok(())
        }
        Err(ChatError::Storage { source, generated }) => {
            // The reply still reaches the user; only persistence failed.
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "response": generated, "error": source.to_string() })
                );
            } else {
                println!();
                println!("  {generated}");
                println!();
            }
            Err(anyhow::Error::new(source).context("reply was not saved"))
        }
        Err(e) => Err(e.into()),
    }
}
