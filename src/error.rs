//! エラー型の定義

use thiserror::Error;

/// ヘッダー解析のエラー型
///
/// どのバリアントも「Bad Request」として呼び出し元へそのまま返す。
/// メッセージは従来の実装と同じ文言を維持している。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ヘッダーが存在しない、または空文字列
    #[error("{}", missing_header_message(.0))]
    InvalidHeader(&'static str),

    /// Content-Typeが `type/subtype[; params]` の形になっていない
    #[error("Invalid content-type header")]
    MalformedMediaType,

    /// multipartなのにboundaryパラメータがない
    #[error("Invalid content-type header: multipart missing boundary")]
    MissingBoundary,

    /// Content-Lengthが `Content-Length: <digits>` の形になっていない
    #[error("Invalid Content-Length header format")]
    MalformedLength,

    /// Acceptのいずれかのエントリが不正
    #[error("Invalid Accept header format")]
    MalformedAcceptEntry,

    /// Content-Dispositionが `form-data[; params]` の形になっていない
    #[error("Invalid content-disposition header format")]
    MalformedDisposition,

    /// `key*=` の値が拡張形式でない、またはデコードできない
    #[error("Invalid content-disposition header format includes invalid parameters")]
    InvalidDispositionParameter,

    /// form-dataにパラメータリストがない
    #[error("Invalid content-disposition header missing parameters")]
    MissingParameters,

    /// nameパラメータがない、または空
    #[error("Invalid content-disposition header missing name parameter")]
    MissingName,

    /// `__proto__` をパラメータ名、またはnameの値として使用している
    #[error("Invalid content-disposition header format includes invalid parameters")]
    UnsafeParameterName,

    /// ヘッダー値が設定された上限長を超えている
    #[error("{name} header exceeds the limit of {limit} bytes (got {length})")]
    HeaderTooLong {
        name: &'static str,
        length: usize,
        limit: usize,
    },

    /// 組み込みの正規表現がコンパイルできなかった
    #[error("Invalid header pattern: {0}")]
    InvalidPattern(String),
}

/// エラーの分類（ペイロードなしで分岐するためのもの）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidHeader,
    MalformedMediaType,
    MissingBoundary,
    MalformedLength,
    MalformedAcceptEntry,
    MalformedDisposition,
    MissingParameters,
    MissingName,
    UnsafeParameterName,
    HeaderTooLong,
    InvalidPattern,
}

/// ヘッダーがない場合のメッセージ（ヘッダーごとに従来の文言が異なる）
fn missing_header_message(name: &str) -> String {
    match name {
        "Content-Type" => "Invalid content-type header".to_string(),
        "Content-Disposition" => "Missing content-disposition header".to_string(),
        _ => format!("Missing {} header", name),
    }
}

impl Error {
    /// エラーの分類を取得
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidHeader(_) => ErrorKind::InvalidHeader,
            Error::MalformedMediaType => ErrorKind::MalformedMediaType,
            Error::MissingBoundary => ErrorKind::MissingBoundary,
            Error::MalformedLength => ErrorKind::MalformedLength,
            Error::MalformedAcceptEntry => ErrorKind::MalformedAcceptEntry,
            Error::MalformedDisposition | Error::InvalidDispositionParameter => {
                ErrorKind::MalformedDisposition
            }
            Error::MissingParameters => ErrorKind::MissingParameters,
            Error::MissingName => ErrorKind::MissingName,
            Error::UnsafeParameterName => ErrorKind::UnsafeParameterName,
            Error::HeaderTooLong { .. } => ErrorKind::HeaderTooLong,
            Error::InvalidPattern(_) => ErrorKind::InvalidPattern,
        }
    }

    /// エラーからHTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidPattern(_) => 500,
            _ => 400,
        }
    }

    /// クライアント起因（Bad Request）のエラーかどうか
    pub fn is_bad_request(&self) -> bool {
        self.status_code() == 400
    }
}
