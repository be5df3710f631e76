//! Server state.

use std::{sync::Arc, time::Instant};

use crate::domain::RequestLogRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn RequestLogRepository>,
    /// When the server process started serving
    pub started_at: Instant,
}

impl AppState {
    pub fn new(repository: Arc<dyn RequestLogRepository>) -> Self {
        Self {
            repository,
            started_at: Instant::now(),
        }
    }

    /// Seconds since start, rounded to 2 decimals
    pub fn uptime_seconds(&self) -> f64 {
        round_to_hundredths(self.started_at.elapsed().as_secs_f64())
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryRequestLogRepository;

    #[test]
    fn test_round_to_hundredths() {
        // テスト項目: 小数第 2 位に丸められる
        assert_eq!(round_to_hundredths(1.234), 1.23);
        assert_eq!(round_to_hundredths(1.235_1), 1.24);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_uptime_of_fresh_state_is_near_zero() {
        // テスト項目: 作成直後の uptime は 0 付近の非負数
        // given (前提条件):
        let state = AppState::new(Arc::new(InMemoryRequestLogRepository::default()));

        // when (操作):
        let uptime = state.uptime_seconds();

        // then (期待する結果):
        assert!(uptime >= 0.0);
        assert!(uptime < 1.0);
    }
}
