//! Content-Dispositionヘッダー（form-data）の解析

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::common::utils::{decode_uri_component, encode_ext_value, needs_ext_value};
use crate::error::Error;

use super::pattern::Pattern;

// パラメータ部は改行（CR, LF, U+2028, U+2029）を含まない
static FORM_DATA: Pattern =
    Pattern::new(r"(?i)^\s*form-data\s*(?:;\s*([^\r\n\x{2028}\x{2029}]+))?$");

// 値の形式は 拡張(charset'lang'pct) > 引用符付き > 引用符なし の優先順で試す
static PARAM: Pattern = Pattern::new(
    r#"([^=*\s]+)(\*)?\s*=\s*(?:([^;'"\s]+'[0-9A-Za-z_-]*'[^;\s]+)|"([^"]*)"|([^;\s]*))(?:\s*;\s*|$)"#,
);

/// オブジェクトのプロトタイプ汚染に使われるキー
const UNSAFE_KEY: &str = "__proto__";

/// 解析済みのform-dataパラメータ
///
/// `name` は常に存在し空でない。`filename` 以外のパラメータは `params` に保持する。
/// `filename*` のような拡張パラメータは `*` を除いたキーで保存される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposition {
    name: String,
    filename: Option<String>,
    params: BTreeMap<String, String>,
}

impl Disposition {
    /// フォームフィールド名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ファイル名（デコード済み）
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// 任意のパラメータを取得
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(self.name.as_str()),
            "filename" => self.filename(),
            _ => self.params.get(key).map(String::as_str),
        }
    }

    /// `name` と `filename` 以外のパラメータ
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    fn param_count(&self) -> usize {
        1 + usize::from(self.filename.is_some()) + self.params.len()
    }

    /// 全パラメータを (キー, 値) で列挙（name, filename, その他の順）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(("name", self.name.as_str()))
            .chain(self.filename.as_deref().map(|f| ("filename", f)))
            .chain(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// 拡張パラメータ値 `charset'language'encoded` をデコードする
///
/// charsetは参照せず、常にUTF-8として扱う。
fn decode_ext_value(raw: &str) -> Result<String, Error> {
    let encoded = raw.split('\'').nth(2).ok_or(Error::InvalidDispositionParameter)?;
    decode_uri_component(encoded).ok_or(Error::InvalidDispositionParameter)
}

pub(crate) fn parse(header: &str) -> Result<Disposition, Error> {
    let caps = FORM_DATA
        .regex()?
        .captures(header)
        .ok_or(Error::MalformedDisposition)?;
    let parameters = caps.get(1).ok_or(Error::MissingParameters)?.as_str();

    let mut name = None;
    let mut filename = None;
    let mut params = BTreeMap::new();

    for param in PARAM.regex()?.captures_iter(parameters) {
        let key = &param[1];
        if key == UNSAFE_KEY {
            return Err(Error::UnsafeParameterName);
        }

        let value = if param.get(2).is_some() {
            // `key*=` は拡張形式以外を受け付けない
            let extended = param.get(3).ok_or(Error::InvalidDispositionParameter)?;
            decode_ext_value(extended.as_str())?
        } else if let Some(quoted) = param.get(4) {
            quoted.as_str().to_string()
        } else if let Some(bare) = param.get(5) {
            bare.as_str().to_string()
        } else {
            // `*` なしのキーに拡張形式の値が来た場合は空文字列になる
            String::new()
        };

        match key {
            "name" => {
                if value == UNSAFE_KEY {
                    return Err(Error::UnsafeParameterName);
                }
                name = Some(value);
            }
            "filename" => filename = Some(value),
            _ => {
                params.insert(key.to_string(), value);
            }
        }
    }

    let name = name.filter(|n| !n.is_empty()).ok_or(Error::MissingName)?;

    Ok(Disposition {
        name,
        filename,
        params,
    })
}

fn write_param(f: &mut fmt::Formatter<'_>, key: &str, value: &str) -> fmt::Result {
    if needs_ext_value(value) {
        write!(f, "; {}*=utf-8''{}", key, encode_ext_value(value))
    } else {
        write!(f, "; {}=\"{}\"", key, value)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("form-data")?;
        for (key, value) in self.iter() {
            write_param(f, key, value)?;
        }
        Ok(())
    }
}

impl FromStr for Disposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::disposition(s)
    }
}

impl Serialize for Disposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.param_count()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
