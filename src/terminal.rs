//! Line-oriented console I/O behind a trait, so a whole session can be
//! driven from a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Terminal {
    /// Show `prompt` and read one line without its trailing newline.
    /// Returns `None` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn write_line(&mut self, text: &str);
}

/// The real console.
#[derive(Debug, Default)]
pub struct StdioTerminal;

impl StdioTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for StdioTerminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        if let Err(err) = io::stdout().flush() {
            log::warn!("Failed to flush prompt: {}", err);
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(err) => {
                log::error!("Failed to read input: {}", err);
                None
            }
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Replays canned input and records everything shown, prompts included.
#[derive(Debug, Default, Clone)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything shown so far, joined the way a console would display it.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.push(prompt.to_string());
        self.input.pop_front()
    }

    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
