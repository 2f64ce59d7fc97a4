//! 共通ユーティリティ関数群（パーセントデコード、パラメータ値の分類）

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 5987 の attr-char 以外をエンコードする集合
/// https://tools.ietf.org/html/rfc5987#section-3.2.1
pub const EXT_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// URIコンポーネントの厳密なデコード
///
/// `%` の後に16進数2桁が続かない場合や、デコード結果がUTF-8でない場合は `None` を返す。
/// `+` はスペースに変換しない。
pub fn decode_uri_component(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).map_or(false, u8::is_ascii_hexdigit)
                && bytes.get(i + 2).map_or(false, u8::is_ascii_hexdigit);
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// 拡張パラメータ値としてエンコード（`utf-8''` プレフィックスは含まない）
pub fn encode_ext_value(value: &str) -> String {
    utf8_percent_encode(value, EXT_VALUE_ENCODE_SET).to_string()
}

/// 引用符付き文字列では表現できず、拡張パラメータが必要な値かどうか
pub fn needs_ext_value(value: &str) -> bool {
    value.chars().any(|c| c == '"' || !c.is_ascii() || c.is_ascii_control())
}

/// 引用符なしのパラメータ値として書き出せるか（空白・`;`・`"` を含まない）
pub fn is_bare_value(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c == ';' || c == '"' || c.is_whitespace())
}
