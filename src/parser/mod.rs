//! ヘッダーパーサーの実装（分割モジュール）

pub mod accept;
pub mod disposition;
pub mod length;
pub mod media_type;
mod pattern;

pub use accept::{AcceptEntry, AcceptList};
pub use disposition::Disposition;
pub use media_type::MediaType;

use crate::config::Limits;
use crate::error::Error;

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const CONTENT_LENGTH: &str = "Content-Length";
pub(crate) const ACCEPT: &str = "Accept";
pub(crate) const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// 制限値付きのヘッダーパーサー
///
/// 状態を持たないため、スレッド間で自由に共有できる。
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParser {
    limits: Limits,
}

impl HeaderParser {
    /// 制限値を指定して作成
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// 環境変数から読み込んだプロセス共通の制限値を使うパーサー
    pub fn global() -> Self {
        Self::new(*Limits::global())
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// 存在・空文字列・長さの検査を行い、解析対象の文字列を返す
    fn check<'a>(&self, name: &'static str, header: Option<&'a str>) -> Result<&'a str, Error> {
        let header = match header {
            Some(h) if !h.is_empty() => h,
            _ => return Err(Error::InvalidHeader(name)),
        };

        if header.len() > self.limits.max_header_length {
            return Err(Error::HeaderTooLong {
                name,
                length: header.len(),
                limit: self.limits.max_header_length,
            });
        }

        Ok(header)
    }

    /// Content-Typeを解析
    pub fn content_type<'a>(&self, header: impl Into<Option<&'a str>>) -> Result<MediaType, Error> {
        media_type::parse(self.check(CONTENT_TYPE, header.into())?)
    }

    /// `Content-Length: <digits>` 形式のヘッダー行を解析
    pub fn content_length<'a>(&self, header: impl Into<Option<&'a str>>) -> Result<u64, Error> {
        length::parse(self.check(CONTENT_LENGTH, header.into())?)
    }

    /// Acceptを解析（入力順を維持）
    pub fn accept<'a>(&self, header: impl Into<Option<&'a str>>) -> Result<AcceptList, Error> {
        accept::parse(self.check(ACCEPT, header.into())?)
    }

    /// form-dataのContent-Dispositionを解析
    pub fn disposition<'a>(&self, header: impl Into<Option<&'a str>>) -> Result<Disposition, Error> {
        disposition::parse(self.check(CONTENT_DISPOSITION, header.into())?)
    }
}

#[cfg(test)]
mod tests;
