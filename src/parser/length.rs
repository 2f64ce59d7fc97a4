//! Content-Lengthヘッダーの解析

use crate::error::Error;

use super::pattern::Pattern;

// ヘッダー名込みの形式（`Content-Length: 348`）のみ受け付ける
static CONTENT_LENGTH: Pattern = Pattern::new(r"(?i)^Content-Length:\s*([0-9]+)$");

pub(crate) fn parse(header: &str) -> Result<u64, Error> {
    let caps = CONTENT_LENGTH
        .regex()?
        .captures(header)
        .ok_or(Error::MalformedLength)?;

    // u64に収まらない桁数も不正扱い
    caps[1].parse::<u64>().map_err(|_| Error::MalformedLength)
}
