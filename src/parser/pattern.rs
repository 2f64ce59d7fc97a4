use std::sync::OnceLock;

use log::error;
use regex::Regex;

use crate::error::Error;

/// 遅延コンパイルされる正規表現
///
/// 初回使用時にコンパイルし、結果（失敗も含む）をキャッシュする。
/// コンパイルに失敗したパターンは常にエラーを返す（fail-closed）。
#[derive(Debug)]
pub(crate) struct Pattern {
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Pattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// コンパイル済み正規表現を取得
    pub(crate) fn regex(&self) -> Result<&Regex, Error> {
        match self.compiled.get_or_init(|| Regex::new(self.source)) {
            Ok(regex) => Ok(regex),
            Err(e) => {
                error!(
                    "Invalid regex pattern: {} - {}. Header will be rejected.",
                    self.source, e
                );
                Err(Error::InvalidPattern(e.to_string()))
            }
        }
    }
}
