//! ログ初期化

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// tracing subscriber を標準エラーへ設定
///
/// `RUST_LOG` が指定されていればそれを優先する。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(colored(&std::io::stderr()))
        .with_target(false)
        .try_init();
}

/// 端末の場合のみ色付き出力
fn colored(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}
