//! Time helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a UTC timestamp as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2024-01-02T03:04:05.678Z`.
pub fn to_iso8601(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time as an ISO-8601 string.
pub fn now_iso8601() -> String {
    to_iso8601(&now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_iso8601_millis_with_z_suffix() {
        // テスト項目: ミリ秒精度・Z サフィックスの ISO-8601 文字列に変換される
        // given (前提条件):
        let value = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678);

        // when (操作):
        let formatted = to_iso8601(&value);

        // then (期待する結果):
        assert_eq!(formatted, "2024-01-02T03:04:05.678Z");
    }

    #[test]
    fn test_now_iso8601_round_trips_through_chrono() {
        // テスト項目: 現在時刻の文字列が RFC 3339 としてパースできる
        // when (操作):
        let formatted = now_iso8601();

        // then (期待する結果):
        assert!(formatted.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&formatted).is_ok());
    }
}
