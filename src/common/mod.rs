//! 共通モジュール（ユーティリティ、HeaderMapアダプタ）

pub mod headers;
pub mod utils;

pub use headers::RequestHeaders;
