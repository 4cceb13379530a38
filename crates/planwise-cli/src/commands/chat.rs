//! Chat assistant commands.

use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration as StdDuration;

use chrono::Duration;
use planwise_core::chat::{ChatAssistant, ChatEvent, ChatState, QUICK_SUGGESTIONS};

use super::{load_config, now};

pub fn run(
    config: Option<&Path>,
    message: Option<String>,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let mut chat = ChatAssistant::open_with_delays(now(), config.chat_delays());

    // One-shot mode: send, print the reply, done.
    if let Some(text) = message {
        chat.send(&text, now());
        pump(&mut chat, fast);
        return Ok(());
    }

    println!("assistant: {}", chat.messages()[0].text);
    println!("(try one of: {})", QUICK_SUGGESTIONS.join(" | "));
    println!("(type 'exit' to leave)");

    loop {
        print!("you: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            chat.close();
            break;
        }

        chat.send(line, now());
        pump(&mut chat, fast);
        if !chat.is_open() {
            break;
        }
    }
    Ok(())
}

/// Tick the assistant until it settles, printing events as they land.
///
/// In fast mode the injected clock jumps forward instead of sleeping, so
/// the same machine runs with zero real delay.
pub(crate) fn pump(chat: &mut ChatAssistant, fast: bool) {
    let mut clock = now();
    while chat.is_open() && (chat.is_typing() || chat.state() == ChatState::Closing) {
        if fast {
            clock += Duration::milliseconds(500);
        } else {
            thread::sleep(StdDuration::from_millis(100));
            clock = now();
        }
        for event in chat.tick(clock) {
            match event {
                ChatEvent::ReplyPosted { message } => println!("assistant: {}", message.text),
                ChatEvent::Closed { .. } => println!("(assistant closed the chat)"),
            }
        }
    }
}
