//! Line input on a dedicated thread.
//!
//! rustyline blocks, so it runs on its own thread. The event loop asks for
//! one line at a time by sending the prompt to show; this keeps the prompt
//! in step with the page the client is on.

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::{mpsc, oneshot};

use crate::error::ClientError;

pub(super) struct InputReader {
    prompts: mpsc::UnboundedSender<String>,
    lines: mpsc::UnboundedReceiver<String>,
}

impl InputReader {
    /// Start the reader thread. Fails if the line editor cannot be created.
    pub(super) async fn spawn() -> Result<Self, ClientError> {
        let (prompt_tx, mut prompt_rx) = mpsc::unbounded_channel::<String>();
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        std::thread::spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => {
                    let _ = ready_tx.send(Ok(()));
                    editor
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };

            while let Some(prompt) = prompt_rx.blocking_recv() {
                match editor.readline(&prompt) {
                    Ok(line) => {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            tracing::debug!("Failed to add history entry: {}", e);
                        }
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        });

        ready_rx
            .await
            .map_err(|_| ClientError::InputClosed)?
            .map_err(ClientError::Input)?;

        Ok(Self {
            prompts: prompt_tx,
            lines: line_rx,
        })
    }

    /// Ask the reader thread for the next line.
    pub(super) fn request(&self, prompt: &str) {
        if self.prompts.send(prompt.to_string()).is_err() {
            tracing::debug!("Input reader already stopped");
        }
    }

    /// Next line; `None` on Ctrl-C, Ctrl-D or a read error. Cancel safe.
    pub(super) async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }
}
