//! UI layer: chat state machine, views and the terminal event loop.

pub mod app;
mod input;
mod runner;
pub mod terminal;
pub mod view;

pub use app::ChatClient;
pub use runner::run;
pub use terminal::TerminalView;
pub use view::{ChatView, RenderedEntry};
