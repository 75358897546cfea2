use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::render::{TYPING_INDICATOR, render_message};
use crate::ai::chat::{Conversation, SubmitOutcome};
use crate::core::{AppConfig, init_tracing};
use crate::gemini::GeminiBackend;

pub async fn run(config: AppConfig) -> Result<()> {
    // Keep logs quiet so they don't interleave with the transcript
    init_tracing("warn");

    let mut rl = DefaultEditor::new()?;
    let backend = Arc::new(GeminiBackend::from_config(&config));
    let conversation = Conversation::new(backend);

    for msg in conversation.transcript() {
        println!("{}", render_message(&msg));
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                // Blank input is never submitted
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                println!("{}", TYPING_INDICATOR);
                match conversation.submit(&line).await {
                    Ok(SubmitOutcome::Replied(msg)) => println!("\n{}", render_message(&msg)),
                    Ok(SubmitOutcome::Ignored) => {}
                    Err(busy) => tracing::warn!("{}", busy),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
