use crate::core::Chatbot;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const CHAT_HEADER: &str = "Chatbot Assistance";
pub const CHAT_PROMPT: &str = "Ask me anything about jobs or accessibility:";

pub fn render_reply(reply: &str) -> String {
    format!("Chatbot: {}", reply)
}

pub struct ChatSession<C: Chatbot> {
    chatbot: C,
}

impl<C: Chatbot> ChatSession<C> {
    pub fn new(chatbot: C) -> Self {
        Self { chatbot }
    }

    /// Blank prompts are not sent; anything else is sent as typed.
    pub async fn ask(&self, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() {
            return None;
        }
        Some(self.chatbot.respond(prompt).await)
    }

    /// Reads prompts line by line until `exit`, `quit` or end of input and
    /// returns how many replies were shown.
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<usize> {
        writeln!(output, "{}", CHAT_HEADER)?;
        writeln!(output, "{}", CHAT_PROMPT)?;

        let mut exchanges = 0;
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let prompt = line.trim_end_matches(['\n', '\r']);
            let command = prompt.trim();
            if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
                break;
            }

            if let Some(reply) = self.ask(prompt).await {
                writeln!(output, "{}", render_reply(&reply))?;
                exchanges += 1;
            }
        }

        tracing::info!("Chat session ended after {} exchanges", exchanges);
        Ok(exchanges)
    }
}
