//! 解析時の制限値（環境変数から設定可能）

use std::env;
use std::sync::OnceLock;

use log::{debug, warn};

/// 上限長を指定する環境変数名
pub const MAX_LENGTH_ENV: &str = "CONTENT_HEADERS_MAX_LENGTH";

/// ヘッダー値の最大長のデフォルト（バイト）
pub const DEFAULT_MAX_HEADER_LENGTH: usize = 8 * 1024;

/// ヘッダー解析の制限値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// 受け付けるヘッダー値の最大長（バイト）
    pub max_header_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_header_length: DEFAULT_MAX_HEADER_LENGTH,
        }
    }
}

impl Limits {
    /// 最大長を指定して作成
    pub fn with_max_header_length(max_header_length: usize) -> Self {
        Self { max_header_length }
    }

    /// 環境変数から制限値を読み込む
    /// 優先順位: 環境変数 `CONTENT_HEADERS_MAX_LENGTH` -> デフォルト 8KiB
    pub fn from_env() -> Self {
        let max_header_length = match env::var(MAX_LENGTH_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    warn!("{} must be greater than zero, using default {}", MAX_LENGTH_ENV, DEFAULT_MAX_HEADER_LENGTH);
                    DEFAULT_MAX_HEADER_LENGTH
                }
                Ok(value) => value,
                Err(e) => {
                    warn!(
                        "Invalid {} value {:?}: {}. Using default {}",
                        MAX_LENGTH_ENV, raw, e, DEFAULT_MAX_HEADER_LENGTH
                    );
                    DEFAULT_MAX_HEADER_LENGTH
                }
            },
            Err(_) => DEFAULT_MAX_HEADER_LENGTH,
        };

        debug!("Header limits loaded: max_header_length={}", max_header_length);
        Self { max_header_length }
    }

    /// プロセス全体で共有する制限値（初回アクセス時に環境変数から読み込む）
    pub fn global() -> &'static Limits {
        static GLOBAL: OnceLock<Limits> = OnceLock::new();
        GLOBAL.get_or_init(Limits::from_env)
    }
}
