use super::*;
use crate::error::ErrorKind;

fn small_parser() -> HeaderParser {
    HeaderParser::new(Limits::with_max_header_length(32))
}

#[test]
fn test_missing_header_is_invalid() {
    let parser = HeaderParser::default();

    assert_eq!(parser.content_type(None).unwrap_err(), Error::InvalidHeader("Content-Type"));
    assert_eq!(parser.content_length("").unwrap_err(), Error::InvalidHeader("Content-Length"));
    assert_eq!(parser.accept(None).unwrap_err(), Error::InvalidHeader("Accept"));
    assert_eq!(
        parser.disposition("").unwrap_err(),
        Error::InvalidHeader("Content-Disposition")
    );
}

#[test]
fn test_accepts_str_and_option() {
    let parser = HeaderParser::default();
    let owned = String::from("text/plain");

    assert!(parser.content_type("text/plain").is_ok());
    assert!(parser.content_type(Some("text/plain")).is_ok());
    assert!(parser.content_type(owned.as_str()).is_ok());
}

#[test]
fn test_length_limit_applies_before_parsing() {
    let parser = small_parser();
    let long = format!("text/{}", "x".repeat(40));

    let err = parser.content_type(long.as_str()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HeaderTooLong);
    assert_eq!(
        err,
        Error::HeaderTooLong { name: "Content-Type", length: 45, limit: 32 }
    );
    assert!(err.is_bad_request());

    // 上限ちょうどは許可
    let exact = format!("text/{}", "x".repeat(27));
    assert_eq!(exact.len(), 32);
    assert!(parser.content_type(exact.as_str()).is_ok());
}

#[test]
fn test_length_limit_for_every_header() {
    let parser = small_parser();
    let long = "a".repeat(33);

    for result in [
        parser.content_type(long.as_str()).map(|_| ()),
        parser.content_length(long.as_str()).map(|_| ()),
        parser.accept(long.as_str()).map(|_| ()),
        parser.disposition(long.as_str()).map(|_| ()),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::HeaderTooLong);
    }
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = HeaderParser::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let header = format!("Content-Length: {}", i * 100);
                parser.content_length(header.as_str())
            })
        })
        .collect();

    let lengths: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(lengths, vec![0, 100, 200, 300]);
}
