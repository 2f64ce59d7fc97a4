//! http::HeaderMap からヘッダー値を取り出して解析するアダプタ

use http::header::{HeaderMap, HeaderName, ACCEPT, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};

use crate::error::Error;
use crate::parser::{AcceptList, Disposition, HeaderParser, MediaType};

/// リクエストヘッダーの解析ビュー
///
/// ヘッダーが存在しない場合や可視ASCII以外を含む場合は「ヘッダーなし」として扱う。
#[derive(Debug, Clone, Copy)]
pub struct RequestHeaders<'a> {
    headers: &'a HeaderMap,
    parser: HeaderParser,
}

impl<'a> RequestHeaders<'a> {
    /// プロセス共通の制限値で作成
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self::with_parser(headers, HeaderParser::global())
    }

    /// パーサーを指定して作成
    pub fn with_parser(headers: &'a HeaderMap, parser: HeaderParser) -> Self {
        Self { headers, parser }
    }

    // to_strは可視ASCIIとタブ以外を含む値を拒否する
    fn raw(&self, name: &HeaderName) -> Option<&'a str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn content_type(&self) -> Result<MediaType, Error> {
        self.parser.content_type(self.raw(&CONTENT_TYPE))
    }

    /// 長さパーサーはヘッダー名込みの行を要求するため、ここで組み立てる
    pub fn content_length(&self) -> Result<u64, Error> {
        let line = self.raw(&CONTENT_LENGTH).map(|value| format!("Content-Length: {}", value));
        self.parser.content_length(line.as_deref())
    }

    pub fn accept(&self) -> Result<AcceptList, Error> {
        self.parser.accept(self.raw(&ACCEPT))
    }

    pub fn disposition(&self) -> Result<Disposition, Error> {
        self.parser.disposition(self.raw(&CONTENT_DISPOSITION))
    }
}
