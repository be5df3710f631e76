//! UseCase: チャット参加処理
//!
//! 公開トピックを購読し、参加通知（JOIN）を送信する。

use crate::domain::{
    ADD_USER_DESTINATION, ChatMessage, MessagingChannel, PUBLIC_TOPIC, Username,
};

use super::error::PublishError;

/// チャット参加のユースケース
pub struct JoinChatUseCase<'a, C: MessagingChannel> {
    channel: &'a mut C,
}

impl<'a, C: MessagingChannel> JoinChatUseCase<'a, C> {
    /// 新しい JoinChatUseCase を作成
    pub fn new(channel: &'a mut C) -> Self {
        Self { channel }
    }

    /// 購読と参加通知を実行
    ///
    /// # Arguments
    ///
    /// * `username` - 参加するユーザー名
    pub async fn execute(&mut self, username: &Username) -> Result<(), PublishError> {
        self.channel.subscribe(PUBLIC_TOPIC).await?;

        let body = ChatMessage::join(username).to_json()?;
        self.channel.send(ADD_USER_DESTINATION, body).await?;

        tracing::info!("Joined {} as '{}'", PUBLIC_TOPIC, username);
        Ok(())
    }
}
