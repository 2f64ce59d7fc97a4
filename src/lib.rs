//! content-headers: Content-Type / Content-Length / Accept / Content-Disposition の解析ライブラリ
//!
//! 4つの関数はそれぞれヘッダー値を1つ受け取り、構造化された値か分類済みのエラーを返す。
//! I/Oや共有状態は持たず、どのスレッドからでも呼び出せる。
//!
//! ```
//! let media = content_headers::content_type("multipart/form-data; boundary=abc123").unwrap();
//! assert_eq!(media.mime(), "multipart/form-data");
//! assert_eq!(media.boundary(), Some("abc123"));
//!
//! let length = content_headers::content_length("Content-Length: 348").unwrap();
//! assert_eq!(length, 348);
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod parser;

pub use common::RequestHeaders;
pub use config::Limits;
pub use error::{Error, ErrorKind};
pub use parser::{AcceptEntry, AcceptList, Disposition, HeaderParser, MediaType};

/// Content-Typeを解析
///
/// `type/subtype` は小文字化し、`charset` があれば小文字化して取り出す。
/// `multipart/*` の場合は `boundary` が必須（大文字小文字は保持）。
pub fn content_type<'a>(header: impl Into<Option<&'a str>>) -> Result<MediaType, Error> {
    HeaderParser::global().content_type(header)
}

/// `Content-Length: <digits>` 形式のヘッダー行を解析
pub fn content_length<'a>(header: impl Into<Option<&'a str>>) -> Result<u64, Error> {
    HeaderParser::global().content_length(header)
}

/// Acceptを解析
///
/// エントリはヘッダーに書かれた順のまま返す。1つでも不正なエントリがあれば全体が失敗する。
pub fn accept<'a>(header: impl Into<Option<&'a str>>) -> Result<AcceptList, Error> {
    HeaderParser::global().accept(header)
}

/// form-dataのContent-Dispositionを解析
pub fn disposition<'a>(header: impl Into<Option<&'a str>>) -> Result<Disposition, Error> {
    HeaderParser::global().disposition(header)
}
