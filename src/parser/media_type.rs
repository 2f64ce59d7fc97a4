//! Content-Typeヘッダーの解析

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::utils::is_bare_value;
use crate::error::Error;

use super::pattern::Pattern;

// パラメータ部は改行（CR, LF, U+2028, U+2029）を含まない
static MEDIA_TYPE: Pattern =
    Pattern::new(r"^([^/\s]+/[^\s;]+)([^\r\n\x{2028}\x{2029}]*)?$");
static CHARSET_PARAM: Pattern = Pattern::new(r#"(?i);\s*charset=(?:"([^"]+)"|([^;"\s]+))"#);
static BOUNDARY_PARAM: Pattern = Pattern::new(r#"(?i);\s*boundary=(?:"([^"]+)"|([^;"\s]+))"#);

/// 解析済みのContent-Type
///
/// `boundary` は `mime` が `multipart/` で始まる場合にのみ存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaType {
    mime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boundary: Option<String>,
}

impl MediaType {
    /// 小文字化された `type/subtype`
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// 小文字化されたcharset
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// multipartの境界文字列（大文字小文字を保持）
    pub fn boundary(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    /// multipartかどうか
    pub fn is_multipart(&self) -> bool {
        self.mime.starts_with("multipart/")
    }
}

/// `;\s*name=` に続く値（引用符付き、または引用符なし）を探す
fn find_param<'h>(pattern: &Pattern, params: &'h str) -> Result<Option<&'h str>, Error> {
    let value = pattern
        .regex()?
        .captures(params)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str());
    Ok(value)
}

pub(crate) fn parse(header: &str) -> Result<MediaType, Error> {
    let caps = MEDIA_TYPE
        .regex()?
        .captures(header)
        .ok_or(Error::MalformedMediaType)?;

    let mime = caps[1].to_lowercase();
    let params = caps.get(2).map_or("", |m| m.as_str());

    let charset = find_param(&CHARSET_PARAM, params)?.map(str::to_lowercase);

    let boundary = if mime.starts_with("multipart/") {
        let boundary = find_param(&BOUNDARY_PARAM, params)?.ok_or(Error::MissingBoundary)?;
        Some(boundary.to_string())
    } else {
        None
    };

    Ok(MediaType {
        mime,
        charset,
        boundary,
    })
}

fn write_param(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    if is_bare_value(value) {
        write!(f, "; {}={}", name, value)
    } else {
        write!(f, "; {}=\"{}\"", name, value)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mime)?;
        if let Some(charset) = &self.charset {
            write_param(f, "charset", charset)?;
        }
        if let Some(boundary) = &self.boundary {
            write_param(f, "boundary", boundary)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::content_type(s)
    }
}
