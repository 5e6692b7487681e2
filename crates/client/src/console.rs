//! Stdin/stdout implementation of the interaction boundary.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use game_core::Console;

/// Line-oriented console over the process's standard streams.
///
/// Reading yields one whitespace-delimited token at a time, buffering the
/// rest of the line, so "1 2 3" answers three prompts.
#[derive(Debug, Default)]
pub struct StdioConsole {
    pending: VecDeque<String>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdioConsole {
    fn print(&mut self, text: &str) {
        println!("{text}");
        let _ = io::stdout().flush();
    }

    fn read_token(&mut self) -> String {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // EOF: the interaction boundary is gone, so is the session.
                Ok(0) => {
                    tracing::warn!("stdin closed, ending session");
                    std::process::exit(0);
                }
                Ok(_) => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                }
                Err(err) => {
                    tracing::warn!(%err, "stdin read failed, ending session");
                    std::process::exit(1);
                }
            }
        }
    }
}
