//! Acceptヘッダーの解析

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

use super::pattern::Pattern;

// 各エントリは前後の空白を許容しない（`a/b, c/d` の2番目は不正）
// q以外のパラメータ（`;v=b3` 等）はメディアレンジの一部として残す
static ACCEPT_ENTRY: Pattern =
    Pattern::new(r"(?i)^(\S+?/\S+?)(?:;\s*q=([01](?:\.[0-9]*)?))?$");

/// Acceptの1エントリ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptEntry {
    mime: String,
    q: f32,
}

impl AcceptEntry {
    /// 小文字化されたメディアレンジ（q以外のパラメータを含む）
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// 品質値（省略時は1.0）
    pub fn q(&self) -> f32 {
        self.q
    }
}

/// ヘッダーに書かれた順序のままのAcceptエントリ列
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AcceptList(Vec<AcceptEntry>);

impl AcceptList {
    pub fn iter(&self) -> std::slice::Iter<'_, AcceptEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<AcceptEntry> {
        self.0
    }

    /// 品質値の降順に並べ替えたリストを返す（同値は元の順序を維持）
    pub fn sorted_by_quality(&self) -> AcceptList {
        let mut entries = self.0.clone();
        entries.sort_by(|a, b| b.q.total_cmp(&a.q));
        AcceptList(entries)
    }
}

impl IntoIterator for AcceptList {
    type Item = AcceptEntry;
    type IntoIter = std::vec::IntoIter<AcceptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AcceptList {
    type Item = &'a AcceptEntry;
    type IntoIter = std::slice::Iter<'a, AcceptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn parse_entry(segment: &str) -> Result<AcceptEntry, Error> {
    let caps = ACCEPT_ENTRY
        .regex()?
        .captures(segment)
        .ok_or(Error::MalformedAcceptEntry)?;

    let q = match caps.get(2) {
        Some(weight) => weight
            .as_str()
            .parse::<f32>()
            .map_err(|_| Error::MalformedAcceptEntry)?,
        None => 1.0,
    };
    // `1.5` のように正規表現は通るが範囲外の値
    if q > 1.0 {
        return Err(Error::MalformedAcceptEntry);
    }

    Ok(AcceptEntry {
        mime: caps[1].to_lowercase(),
        q,
    })
}

pub(crate) fn parse(header: &str) -> Result<AcceptList, Error> {
    header
        .split(',')
        .map(parse_entry)
        .collect::<Result<Vec<_>, _>>()
        .map(AcceptList)
}

impl fmt::Display for AcceptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.q < 1.0 {
            write!(f, "{};q={}", self.mime, self.q)
        } else {
            f.write_str(&self.mime)
        }
    }
}

impl fmt::Display for AcceptList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl FromStr for AcceptList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::accept(s)
    }
}
