//! UseCase: リクエスト履歴取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ListRequestsUseCase::execute() メソッド
//! - ログ末尾 min(N, length) 件の取得と全件数
//!
//! ### どのような状況を想定しているか
//! - 正常系：limit 未満・limit 以上の件数
//! - エッジケース：空のログ
//! - 異常系：Repository が失敗する

use std::sync::Arc;

use crate::domain::{RequestLimit, RequestLogRepository, RequestLogTail};

use super::error::ListRequestsError;

/// リクエスト履歴取得のユースケース
pub struct ListRequestsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RequestLogRepository>,
}

impl ListRequestsUseCase {
    /// 新しい ListRequestsUseCase を作成
    pub fn new(repository: Arc<dyn RequestLogRepository>) -> Self {
        Self { repository }
    }

    /// ログ末尾のエントリを取得する
    ///
    /// # Arguments
    ///
    /// * `limit` - 取得する最大件数
    pub async fn execute(&self, limit: RequestLimit) -> Result<RequestLogTail, ListRequestsError> {
        Ok(self.repository.tail(limit.value()).await?)
    }
}
