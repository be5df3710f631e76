//! InMemory RequestLog Repository 実装
//!
//! ドメイン層が定義する RequestLogRepository trait の具体的な実装。
//! プロセスの生存期間だけ保持される Vec をインメモリ DB として使用します。
//! 永続化は行いません。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    RepositoryError, RequestLog, RequestLogEntry, RequestLogRepository, RequestLogTail,
};

/// インメモリ RequestLog Repository 実装
///
/// axum はリクエストを複数スレッドで処理するため、ログは Mutex で保護する。
/// append と長さの取得は同じロック内で行う。
#[derive(Clone, Default)]
pub struct InMemoryRequestLogRepository {
    /// RequestLog ドメインモデル
    log: Arc<Mutex<RequestLog>>,
}

#[async_trait]
impl RequestLogRepository for InMemoryRequestLogRepository {
    async fn append(&self, entry: RequestLogEntry) -> Result<usize, RepositoryError> {
        let mut log = self.log.lock().await;
        Ok(log.append(entry))
    }

    async fn tail(&self, limit: usize) -> Result<RequestLogTail, RepositoryError> {
        let log = self.log.lock().await;
        Ok(RequestLogTail {
            entries: log.tail(limit).to_vec(),
            total: log.len(),
        })
    }
}
