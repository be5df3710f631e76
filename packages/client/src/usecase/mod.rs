//! UseCase 層
//!
//! チャットクライアントの操作（参加・送信）を実装するレイヤー。
//! UI 層から呼び出され、Domain 層のチャンネルを操作します。

pub mod error;
pub mod join_chat;
pub mod send_message;

pub use error::PublishError;
pub use join_chat::JoinChatUseCase;
pub use send_message::SendMessageUseCase;
