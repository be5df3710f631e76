//! Logger setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the binary's own crate and
/// `tower_http` log at `default_level`.
///
/// # Arguments
///
/// * `bin_name` - Binary name, e.g. `env!("CARGO_BIN_NAME")`
/// * `default_level` - Level used when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Build the fallback filter directives for a binary.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("{crate_name}={default_level},lantern_shared={default_level},tower_http={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_uses_crate_name() {
        // テスト項目: バイナリ名のハイフンがクレート名のアンダースコアに変換される
        // given (前提条件):
        let bin_name = "lantern-server";

        // when (操作):
        let directives = default_directives(bin_name, "debug");

        // then (期待する結果):
        assert_eq!(
            directives,
            "lantern_server=debug,lantern_shared=debug,tower_http=debug"
        );
    }
}
