//! ログ初期化
//!
//! `RUST_LOG` があればそれを優先し、無ければ設定ファイルのフィルタ（`--verbose` 時は debug）。

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool, default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("info"))
        }
    });

    // 2回目以降の初期化（テスト等）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
