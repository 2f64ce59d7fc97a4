// 公開APIの統合テスト
use content_headers::{
    accept, content_length, content_type, disposition, AcceptList, Disposition, Error, ErrorKind,
    MediaType,
};
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_content_type_without_params() {
    init_logger();
    for (header, mime) in [
        ("text/plain", "text/plain"),
        ("Application/Vnd.API+JSON", "application/vnd.api+json"),
        ("image/svg+xml", "image/svg+xml"),
    ] {
        let parsed = content_type(header).unwrap();
        assert_eq!(parsed.mime(), mime);
        assert_eq!(parsed.charset(), None);
        assert_eq!(parsed.boundary(), None);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!({ "mime": mime }));
    }
}

#[test]
fn test_content_type_multipart() {
    let parsed = content_type("multipart/form-data; boundary=abc123").unwrap();
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({ "mime": "multipart/form-data", "boundary": "abc123" })
    );

    let err = content_type("multipart/form-data").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingBoundary);
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_content_type_case_insensitivity() {
    let upper = content_type("MULTIPART/FORM-DATA; BOUNDARY=x").unwrap();
    let lower = content_type("multipart/form-data; boundary=x").unwrap();
    assert_eq!(upper.mime(), lower.mime());
    assert_eq!(upper.boundary(), Some("x"));

    let mixed = content_type("multipart/form-data; BOUNDARY=MiXeD").unwrap();
    assert_eq!(mixed.boundary(), Some("MiXeD"));
}

#[test]
fn test_content_type_errors() {
    assert_eq!(content_type(None).unwrap_err().kind(), ErrorKind::InvalidHeader);
    assert_eq!(content_type("").unwrap_err().kind(), ErrorKind::InvalidHeader);
    assert_eq!(content_type("text").unwrap_err(), Error::MalformedMediaType);
    assert_eq!(
        content_type("text").unwrap_err().to_string(),
        "Invalid content-type header"
    );
}

#[test]
fn test_content_length() {
    assert_eq!(content_length("Content-Length: 348").unwrap(), 348);
    assert_eq!(content_length("Content-Length: -1").unwrap_err(), Error::MalformedLength);
    assert_eq!(content_length("").unwrap_err().kind(), ErrorKind::InvalidHeader);
    assert_eq!(content_length(None).unwrap_err().kind(), ErrorKind::InvalidHeader);
}

#[test]
fn test_accept_preserves_order() {
    let list = accept("text/html;q=0.8,application/json").unwrap();
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!([
            { "mime": "text/html", "q": 0.8f32 },
            { "mime": "application/json", "q": 1.0f32 }
        ])
    );
}

#[test]
fn test_accept_is_atomic() {
    assert_eq!(
        accept("text/html,not a mime,application/json").unwrap_err(),
        Error::MalformedAcceptEntry
    );
    assert_eq!(accept(None).unwrap_err().kind(), ErrorKind::InvalidHeader);
}

#[test]
fn test_disposition_object_shape() {
    let parsed = disposition("form-data; name=\"file\"; filename=\"a.txt\"").unwrap();
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({ "name": "file", "filename": "a.txt" })
    );

    let extra = disposition("form-data; name=\"f\"; size=12; filename*=utf-8''%E2%82%AC.txt").unwrap();
    assert_eq!(
        serde_json::to_value(&extra).unwrap(),
        json!({ "name": "f", "filename": "€.txt", "size": "12" })
    );
}

#[test]
fn test_disposition_errors() {
    assert_eq!(disposition(None).unwrap_err().kind(), ErrorKind::InvalidHeader);
    assert_eq!(disposition("attachment").unwrap_err(), Error::MalformedDisposition);
    assert_eq!(disposition("form-data").unwrap_err(), Error::MissingParameters);
    assert_eq!(disposition("form-data; filename=\"x\"").unwrap_err(), Error::MissingName);
}

#[test]
fn test_round_trip_through_display() {
    for header in [
        "text/html",
        "text/html; charset=UTF-8",
        "multipart/related; boundary=\"simple boundary\"; charset=\"utf 8\"",
    ] {
        let parsed = content_type(header).unwrap();
        assert_eq!(parsed.to_string().parse::<MediaType>(), Ok(parsed));
    }

    for header in ["*/*", "text/html;q=0.333,application/xml;q=0,image/*; q=1."] {
        let parsed = accept(header).unwrap();
        assert_eq!(parsed.to_string().parse::<AcceptList>(), Ok(parsed));
    }

    for header in [
        "form-data; name=\"a\"",
        "form-data; name=field; filename=\"my file.txt\"; x-extra=1",
        "form-data; name*=utf-8'ja'%E3%83%95%E3%82%A1%E3%82%A4%E3%83%AB; filename*=utf-8''%22quoted%22",
    ] {
        let parsed = disposition(header).unwrap();
        assert_eq!(parsed.to_string().parse::<Disposition>(), Ok(parsed));
    }
}
