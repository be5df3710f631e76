//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use lantern_shared::time::now_iso8601;

use crate::{
    common::text::start_case,
    domain::RequestLimit,
    infrastructure::dto::http::{
        HealthResponseDto, RequestLogEntryDto, RequestsResponseDto, UuidResponseDto,
        WelcomeResponseDto,
    },
    ui::{error::ApiError, response::PrettyJson, state::AppState},
    usecase::{GenerateUuidUseCase, ListRequestsUseCase},
};

const WELCOME_MESSAGE: &str = "Welcome to the Lantern demo server";

/// Libraries the server is built on, in display order
const LIBRARIES: [&str; 5] = ["axum", "chrono", "serde", "tokio", "uuid"];

/// Welcome endpoint
pub async fn welcome() -> PrettyJson<WelcomeResponseDto> {
    PrettyJson(WelcomeResponseDto {
        message: WELCOME_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now_iso8601(),
        libraries: LIBRARIES.iter().map(|name| start_case(name)).collect(),
    })
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> PrettyJson<HealthResponseDto> {
    PrettyJson(HealthResponseDto {
        status: "healthy".to_string(),
        uptime: state.uptime_seconds(),
        timestamp: now_iso8601(),
    })
}

/// Generate a UUID v4 and record it in the request log
pub async fn generate_uuid(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<UuidResponseDto>, ApiError> {
    let usecase = GenerateUuidUseCase::new(state.repository.clone());
    let generated = usecase.execute().await?;

    Ok(PrettyJson(UuidResponseDto {
        uuid: generated.entry.id.to_string(),
        total_requests: generated.total_requests,
    }))
}

/// Newest entries of the request log
///
/// Only the first `limit` parameter is considered.
pub async fn list_requests(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<PrettyJson<RequestsResponseDto>, ApiError> {
    let raw_limit = params
        .iter()
        .find(|(key, _)| key == "limit")
        .map(|(_, value)| value.as_str());
    let limit = RequestLimit::parse(raw_limit);

    let usecase = ListRequestsUseCase::new(state.repository.clone());
    let tail = usecase.execute(limit).await?;

    Ok(PrettyJson(RequestsResponseDto {
        requests: tail.entries.iter().map(RequestLogEntryDto::from).collect(),
        total: tail.total,
    }))
}

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryRequestLogRepository;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(
            InMemoryRequestLogRepository::default(),
        )))
    }

    fn limit_query(value: &str) -> Query<Vec<(String, String)>> {
        Query(vec![("limit".to_string(), value.to_string())])
    }

    #[tokio::test]
    async fn test_welcome_payload() {
        // テスト項目: ウェルカムペイロードにメッセージ・バージョン・ライブラリ名が含まれる
        // when (操作):
        let PrettyJson(body) = welcome().await;

        // then (期待する結果):
        assert_eq!(body.message, WELCOME_MESSAGE);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.libraries, vec!["Axum", "Chrono", "Serde", "Tokio", "Uuid"]);
        assert!(body.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_health_check_fresh_state() {
        // テスト項目: 起動直後の health は healthy かつ uptime が 0 付近
        // given (前提条件):
        let state = create_test_state();

        // when (操作):
        let PrettyJson(body) = health_check(State(state)).await;

        // then (期待する結果):
        assert_eq!(body.status, "healthy");
        assert!(body.uptime >= 0.0 && body.uptime < 1.0);
    }

    #[tokio::test]
    async fn test_three_uuids_then_limit_two() {
        // テスト項目: UUID を 3 回生成後、limit=2 で 2 件目と 3 件目が呼び出し順に返る
        // given (前提条件):
        let state = create_test_state();
        let mut uuids = Vec::new();
        for expected_total in 1..=3 {
            let PrettyJson(body) = generate_uuid(State(state.clone())).await.unwrap();
            assert_eq!(body.total_requests, expected_total);
            uuids.push(body.uuid);
        }

        // when (操作):
        let PrettyJson(body) = list_requests(State(state), limit_query("2"))
            .await
            .unwrap();

        // then (期待する結果):
        let ids: Vec<_> = body.requests.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, uuids[1..].to_vec());
        assert_eq!(body.total, 3);
    }

    #[tokio::test]
    async fn test_list_requests_without_limit() {
        // テスト項目: limit 指定なしでは min(N, 10) 件
        // given (前提条件):
        let state = create_test_state();
        for _ in 0..11 {
            generate_uuid(State(state.clone())).await.unwrap();
        }

        // when (操作):
        let PrettyJson(body) = list_requests(State(state), Query(Vec::new()))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(body.requests.len(), 10);
        assert_eq!(body.total, 11);
    }

    #[tokio::test]
    async fn test_list_requests_invalid_limit_falls_back() {
        // テスト項目: 非数値・0 以下の limit はデフォルト 10 として扱われる
        // given (前提条件):
        let state = create_test_state();
        for _ in 0..12 {
            generate_uuid(State(state.clone())).await.unwrap();
        }

        for raw in ["abc", "0", "-3"] {
            // when (操作):
            let PrettyJson(body) = list_requests(State(state.clone()), limit_query(raw))
                .await
                .unwrap();

            // then (期待する結果):
            assert_eq!(body.requests.len(), 10, "limit = {raw:?}");
            assert_eq!(body.total, 12);
        }
    }

    #[tokio::test]
    async fn test_list_requests_first_limit_wins() {
        // テスト項目: limit が複数ある場合は最初の値が使われる
        // given (前提条件):
        let state = create_test_state();
        for _ in 0..5 {
            generate_uuid(State(state.clone())).await.unwrap();
        }
        let query = Query(vec![
            ("limit".to_string(), "1".to_string()),
            ("limit".to_string(), "4".to_string()),
        ]);

        // when (操作):
        let PrettyJson(body) = list_requests(State(state), query).await.unwrap();

        // then (期待する結果):
        assert_eq!(body.requests.len(), 1);
    }
}
