//! UseCase: メッセージ送信処理

use crate::domain::{
    ChatMessage, MessageBody, MessagingChannel, SEND_MESSAGE_DESTINATION, Username,
};

use super::error::PublishError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase<'a, C: MessagingChannel> {
    channel: &'a mut C,
}

impl<'a, C: MessagingChannel> SendMessageUseCase<'a, C> {
    /// 新しい SendMessageUseCase を作成
    pub fn new(channel: &'a mut C) -> Self {
        Self { channel }
    }

    /// CHAT メッセージを送信
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者のユーザー名
    /// * `body` - メッセージ本文（Domain Model）
    pub async fn execute(&mut self, sender: &Username, body: MessageBody) -> Result<(), PublishError> {
        let payload = ChatMessage::chat(sender, body).to_json()?;
        self.channel.send(SEND_MESSAGE_DESTINATION, payload).await?;
        Ok(())
    }
}
