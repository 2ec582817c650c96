use mpweb::http::message::HttpMessage;
use mpweb::http::parser::ParseError;
use mpweb::http::response::{Response, ResponseBuilder, StatusCode, StatusPhrase, SERVER_NAME};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotModified.as_u16(), 304);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::LengthRequired.as_u16(), 411);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotModified.reason_phrase(), "Not Modified");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::LengthRequired.reason_phrase(), "Length Required");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_status_code_from_u16() {
    assert_eq!(StatusCode::from_u16(304), Some(StatusCode::NotModified));
    assert_eq!(StatusCode::from_u16(201), None);
}

#[test]
fn test_response_builder_defaults() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.version, "HTTP/1.1");
    assert_eq!(response.status_code, StatusCode::Ok);
    assert_eq!(response.status_phrase, StatusPhrase::Ok);
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.server.as_deref(), Some(SERVER_NAME));
    assert!(response.date.as_deref().is_some_and(|d| d.ends_with(" GMT")));
    assert_eq!(response.body, None);
}

#[test]
fn test_response_status_helper_keeps_pair_in_step() {
    let response = Response::status(StatusCode::LengthRequired);

    assert_eq!(response.status_code, StatusCode::LengthRequired);
    assert_eq!(response.status_phrase, StatusPhrase::LengthRequired);
    assert_eq!(response.body, None);
}

#[test]
fn test_response_mismatched_pair_is_not_detected() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .status_phrase(StatusPhrase::NotFound)
        .build();

    assert!(response.serialize().starts_with("HTTP/1.1 200 Not Found\r\n"));
}

#[test]
fn test_response_serialize_exact_bytes() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Date", "Mon, 05 Oct 2026 14:03:09 GMT")
        .header("Last-Modified", "Sun, 04 Oct 2026 10:00:00 GMT")
        .body("hello :)")
        .build();

    assert_eq!(
        response.serialize(),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/plain\r\n\
         Date: Mon, 05 Oct 2026 14:03:09 GMT\r\n\
         Last-Modified: Sun, 04 Oct 2026 10:00:00 GMT\r\n\
         Server: MP Web Server\r\n\
         \r\n\
         hello :)\r\n"
    );
}

#[test]
fn test_response_serialize_etag_header_name() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Etag", "\"abc\"")
        .build();

    assert!(response.serialize().contains("\r\nEtag: \"abc\"\r\n"));
}

#[test]
fn test_response_serialize_is_idempotent() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();

    assert_eq!(response.serialize(), response.serialize());
    assert_eq!(response.to_string(), response.serialize());
}

#[test]
fn test_response_parse_status_line_and_body() {
    let response = Response::parse(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nServer: test\r\n\r\n<p>hi</p>\r\n",
    )
    .unwrap();

    assert_eq!(response.status_code, StatusCode::Ok);
    assert_eq!(response.status_phrase, StatusPhrase::Ok);
    assert_eq!(response.content_type.as_deref(), Some("text/html"));
    assert_eq!(response.server.as_deref(), Some("test"));
    assert_eq!(response.body.as_deref(), Some("<p>hi</p>"));
}

#[test]
fn test_response_parse_multi_word_phrase() {
    let response = Response::parse("HTTP/1.1 411 Length Required").unwrap();

    assert_eq!(response.status_code, StatusCode::LengthRequired);
    assert_eq!(response.status_phrase, StatusPhrase::LengthRequired);
    assert_eq!(response.body, None);
}

#[test]
fn test_response_parse_fills_default_headers() {
    let response = Response::parse("HTTP/1.1 304 Not Modified").unwrap();

    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.server.as_deref(), Some(SERVER_NAME));
    assert!(response.date.is_some());
}

#[test]
fn test_response_parse_unknown_status() {
    assert!(matches!(
        Response::parse("HTTP/1.1 418 I'm a teapot"),
        Err(ParseError::UnknownStatusCode(_))
    ));
    assert!(matches!(
        Response::parse("HTTP/1.1 200 Fine"),
        Err(ParseError::UnknownStatusPhrase(_))
    ));
    assert!(matches!(
        Response::parse("HTTP/1.1"),
        Err(ParseError::InvalidStartLine(_))
    ));
}

#[test]
fn test_response_round_trip() {
    let response = ResponseBuilder::new(StatusCode::Forbidden)
        .header("Connection", "close")
        .header("Access-Control-Allow-Origin", "*")
        .header("Etag", "\"v1\"")
        .header("Vary", "Accept-Encoding")
        .header("Set-Cookie", "id=1")
        .body("denied\r\nsecond line")
        .build();

    let parsed = Response::parse(&response.serialize()).unwrap();

    assert_eq!(parsed, response);
}

#[test]
fn test_response_header_lookup_by_wire_name() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Last-Modified", "Sun, 04 Oct 2026 10:00:00 GMT")
        .build();

    assert_eq!(
        response.header("Last-Modified"),
        Some("Sun, 04 Oct 2026 10:00:00 GMT")
    );
    assert_eq!(response.header("Expires"), None);
}

#[test]
fn test_message_accessors() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Connection", "close")
        .body("x")
        .build();

    assert_eq!(response.version(), "HTTP/1.1");
    assert_eq!(response.connection(), Some("close"));
    assert_eq!(HttpMessage::body(&response), Some("x"));
    assert_eq!(response.start_line(), "HTTP/1.1 200 OK");
    assert_eq!(response.headers()[0], ("Connection".to_string(), "close"));
}
