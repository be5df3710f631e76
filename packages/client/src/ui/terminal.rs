//! Line-oriented terminal view.

use std::io::{self, Stdout, Write};

use super::view::{ChatView, RenderedEntry};

/// Prints entries as lines, newest last.
pub struct TerminalView<W: Write + Send> {
    out: W,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> ChatView for TerminalView<W> {
    fn show_chat_page(&mut self) {
        self.write_line("--- chat (Ctrl-D to quit) ---");
    }

    fn append(&mut self, entry: RenderedEntry) {
        match entry {
            RenderedEntry::Notice(text) => self.write_line(&format!("* {text}")),
            RenderedEntry::Message { sender, content } => {
                self.write_line(&format!("{sender}: {content}"))
            }
        }
    }

    fn clear_message_input(&mut self) {
        // rustyline starts every prompt with an empty buffer
    }
}
