//! UseCase: UUID 生成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GenerateUuidUseCase::execute() メソッド
//! - UUID v4 の生成とリクエストログへの追記
//!
//! ### なぜこのテストが必要か
//! - totalRequests が追記直後のログ長と一致することを保証
//! - Repository のエラーが握りつぶされずに伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：連続した生成で totalRequests が 1 ずつ増える
//! - 異常系：Repository が失敗する

use std::sync::Arc;

use lantern_shared::time::now_utc;

use crate::domain::{RequestLogEntry, RequestLogEntryFactory, RequestLogRepository};

use super::error::GenerateUuidError;

/// Result of one UUID generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUuid {
    /// The entry that was appended to the log
    pub entry: RequestLogEntry,
    /// Log length right after the append
    pub total_requests: usize,
}

/// UUID 生成のユースケース
pub struct GenerateUuidUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RequestLogRepository>,
}

impl GenerateUuidUseCase {
    /// 新しい GenerateUuidUseCase を作成
    pub fn new(repository: Arc<dyn RequestLogRepository>) -> Self {
        Self { repository }
    }

    /// UUID を生成してログに追記する
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratedUuid)` - 追記したエントリと追記直後のログ長
    /// * `Err(GenerateUuidError)` - 生成または追記に失敗
    pub async fn execute(&self) -> Result<GeneratedUuid, GenerateUuidError> {
        let entry = RequestLogEntryFactory::issue(now_utc())?;

        let total_requests = self.repository.append(entry.clone()).await?;
        tracing::debug!("Recorded request {} (total: {})", entry.id, total_requests);

        Ok(GeneratedUuid {
            entry,
            total_requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RepositoryError, repository::MockRequestLogRepository},
        infrastructure::repository::InMemoryRequestLogRepository,
    };
    use uuid::Version;

    #[tokio::test]
    async fn test_generate_uuid_success() {
        // テスト項目: UUID v4 を生成し、ログ長 1 を返す
        // given (前提条件):
        let repository = Arc::new(InMemoryRequestLogRepository::default());
        let usecase = GenerateUuidUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        let generated = result.unwrap();
        assert_eq!(generated.total_requests, 1);
        assert_eq!(
            generated.entry.id.as_uuid().get_version(),
            Some(Version::Random)
        );
        assert_eq!(repository.tail(0).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn test_generate_uuid_total_increases_by_one() {
        // テスト項目: 呼び出しごとに totalRequests が 1 ずつ増え、ID は重複しない
        // given (前提条件):
        let repository = Arc::new(InMemoryRequestLogRepository::default());
        let usecase = GenerateUuidUseCase::new(repository);

        // when (操作):
        let first = usecase.execute().await.unwrap();
        let second = usecase.execute().await.unwrap();
        let third = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(
            (
                first.total_requests,
                second.total_requests,
                third.total_requests
            ),
            (1, 2, 3)
        );
        assert_ne!(first.entry.id, second.entry.id);
        assert_ne!(second.entry.id, third.entry.id);
    }

    #[tokio::test]
    async fn test_generate_uuid_repository_error() {
        // テスト項目: Repository のエラーが GenerateUuidError として返される
        // given (前提条件):
        let mut repository = MockRequestLogRepository::new();
        repository
            .expect_append()
            .times(1)
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = GenerateUuidUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            GenerateUuidError::Repository(RepositoryError::Unavailable("down".to_string()))
        );
    }
}
