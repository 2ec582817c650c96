use std::fmt;

use crate::http::date::format_http_date;
use crate::http::message::{
    assign_header, lookup_header, populated_headers, HeaderField, HttpMessage, DEFAULT_VERSION,
};
use crate::http::parser::{split_message, ParseError};

/// Value of the `Server` header on every response unless overridden.
pub const SERVER_NAME: &str = "MP Web Server";

/// HTTP status codes supported by the server.
///
/// - `Ok` (200): Request successful
/// - `NotModified` (304): Cached copy is still fresh
/// - `BadRequest` (400): Malformed or incomplete request
/// - `Forbidden` (403): Target is not an HTML document
/// - `NotFound` (404): Resource not found
/// - `LengthRequired` (411): Missing `Content-Length`
/// - `InternalServerError` (500): Defined, never produced by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 304 Not Modified
    NotModified,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 411 Length Required
    LengthRequired,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use mpweb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::LengthRequired.as_u16(), 411);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotModified => 304,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::LengthRequired => 411,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            304 => Some(StatusCode::NotModified),
            400 => Some(StatusCode::BadRequest),
            403 => Some(StatusCode::Forbidden),
            404 => Some(StatusCode::NotFound),
            411 => Some(StatusCode::LengthRequired),
            500 => Some(StatusCode::InternalServerError),
            _ => None,
        }
    }

    /// The phrase that belongs with this code.
    pub fn phrase(&self) -> StatusPhrase {
        match self {
            StatusCode::Ok => StatusPhrase::Ok,
            StatusCode::NotModified => StatusPhrase::NotModified,
            StatusCode::BadRequest => StatusPhrase::BadRequest,
            StatusCode::Forbidden => StatusPhrase::Forbidden,
            StatusCode::NotFound => StatusPhrase::NotFound,
            StatusCode::LengthRequired => StatusPhrase::LengthRequired,
            StatusCode::InternalServerError => StatusPhrase::InternalServerError,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use mpweb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotModified.reason_phrase(), "Not Modified");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        self.phrase().as_str()
    }
}

/// Reason phrases, one per [`StatusCode`].
///
/// Kept as its own type because a response stores code and phrase
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPhrase {
    Ok,
    NotModified,
    BadRequest,
    Forbidden,
    NotFound,
    LengthRequired,
    InternalServerError,
}

impl StatusPhrase {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPhrase::Ok => "OK",
            StatusPhrase::NotModified => "Not Modified",
            StatusPhrase::BadRequest => "Bad Request",
            StatusPhrase::Forbidden => "Forbidden",
            StatusPhrase::NotFound => "Not Found",
            StatusPhrase::LengthRequired => "Length Required",
            StatusPhrase::InternalServerError => "Internal Server Error",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(StatusPhrase::Ok),
            "Not Modified" => Some(StatusPhrase::NotModified),
            "Bad Request" => Some(StatusPhrase::BadRequest),
            "Forbidden" => Some(StatusPhrase::Forbidden),
            "Not Found" => Some(StatusPhrase::NotFound),
            "Length Required" => Some(StatusPhrase::LengthRequired),
            "Internal Server Error" => Some(StatusPhrase::InternalServerError),
            _ => None,
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// `status_code` and `status_phrase` are independent fields. Builders keep
/// them in step; nothing checks a pair set by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub version: String,
    pub connection: Option<String>,
    pub body: Option<String>,
    pub status_code: StatusCode,
    pub status_phrase: StatusPhrase,
    pub access_control_allow_origin: Option<String>,
    pub content_encoding: Option<String>,
    pub content_type: Option<String>,
    pub date: Option<String>,
    pub etag: Option<String>,
    pub expires: Option<String>,
    pub keep_alive: Option<String>,
    pub last_modified: Option<String>,
    pub server: Option<String>,
    pub set_cookie: Option<String>,
    pub transfer_encoding: Option<String>,
    pub vary: Option<String>,
}

/// Response headers in emission order.
pub const RESPONSE_HEADERS: &[HeaderField<Response>] = &[
    HeaderField {
        field: "connection",
        get: |r| &r.connection,
        get_mut: |r| &mut r.connection,
    },
    HeaderField {
        field: "access_control_allow_origin",
        get: |r| &r.access_control_allow_origin,
        get_mut: |r| &mut r.access_control_allow_origin,
    },
    HeaderField {
        field: "content_encoding",
        get: |r| &r.content_encoding,
        get_mut: |r| &mut r.content_encoding,
    },
    HeaderField {
        field: "content_type",
        get: |r| &r.content_type,
        get_mut: |r| &mut r.content_type,
    },
    HeaderField {
        field: "date",
        get: |r| &r.date,
        get_mut: |r| &mut r.date,
    },
    HeaderField {
        field: "etag",
        get: |r| &r.etag,
        get_mut: |r| &mut r.etag,
    },
    HeaderField {
        field: "expires",
        get: |r| &r.expires,
        get_mut: |r| &mut r.expires,
    },
    HeaderField {
        field: "keep_alive",
        get: |r| &r.keep_alive,
        get_mut: |r| &mut r.keep_alive,
    },
    HeaderField {
        field: "last_modified",
        get: |r| &r.last_modified,
        get_mut: |r| &mut r.last_modified,
    },
    HeaderField {
        field: "server",
        get: |r| &r.server,
        get_mut: |r| &mut r.server,
    },
    HeaderField {
        field: "set_cookie",
        get: |r| &r.set_cookie,
        get_mut: |r| &mut r.set_cookie,
    },
    HeaderField {
        field: "transfer_encoding",
        get: |r| &r.transfer_encoding,
        get_mut: |r| &mut r.transfer_encoding,
    },
    HeaderField {
        field: "vary",
        get: |r| &r.vary,
        get_mut: |r| &mut r.vary,
    },
];

impl Response {
    /// Creates a body-less response carrying the default headers.
    pub fn status(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a simple 200 OK response without a body.
    pub fn ok() -> Self {
        Self::status(StatusCode::Ok)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::status(StatusCode::BadRequest)
    }

    /// Retrieves a header value by its wire name (e.g. `"Last-Modified"`).
    pub fn header(&self, name: &str) -> Option<&str> {
        lookup_header(RESPONSE_HEADERS, self, name).filter(|v| !v.is_empty())
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

impl HttpMessage for Response {
    fn version(&self) -> &str {
        &self.version
    }

    fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn start_line(&self) -> String {
        format!(
            "{} {} {}",
            self.version,
            self.status_code.as_u16(),
            self.status_phrase.as_str()
        )
    }

    fn headers(&self) -> Vec<(String, &str)> {
        populated_headers(RESPONSE_HEADERS, self)
    }

    /// Parses `VERSION CODE PHRASE...` followed by headers and an optional body.
    ///
    /// Headers missing from the text keep their defaults, so a parsed
    /// response always has a `Date`, `Server` and `Content-Type`.
    fn parse(text: &str) -> Result<Self, ParseError> {
        let raw = split_message(text)?;

        let mut tokens = raw.start_line.split_whitespace();
        let (Some(version), Some(code)) = (tokens.next(), tokens.next()) else {
            return Err(ParseError::InvalidStartLine(raw.start_line.to_string()));
        };
        let phrase = tokens.collect::<Vec<_>>().join(" ");

        let status_code = code
            .parse::<u16>()
            .ok()
            .and_then(StatusCode::from_u16)
            .ok_or_else(|| ParseError::UnknownStatusCode(code.to_string()))?;
        let status_phrase =
            StatusPhrase::from_str(&phrase).ok_or(ParseError::UnknownStatusPhrase(phrase))?;

        let mut builder = ResponseBuilder::new(status_code)
            .status_phrase(status_phrase)
            .version(version);

        for (name, value) in raw.headers {
            builder = builder.header(name, value);
        }

        if !raw.body.is_empty() {
            builder = builder.body(raw.body);
        }

        Ok(builder.build())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// A fresh builder carries `Content-Type: text/plain`, the current `Date`
/// and `Server: MP Web Server`.
///
/// # Example
///
/// ```
/// # use mpweb::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body("<p>hi</p>")
///     .build();
/// assert_eq!(response.content_type.as_deref(), Some("text/html"));
/// ```
#[derive(Debug)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code and
    /// its matching phrase.
    pub fn new(status: StatusCode) -> Self {
        Self {
            response: Response {
                version: DEFAULT_VERSION.to_string(),
                connection: None,
                body: None,
                status_code: status,
                status_phrase: status.phrase(),
                access_control_allow_origin: None,
                content_encoding: None,
                content_type: Some("text/plain".to_string()),
                date: Some(format_http_date(None)),
                etag: None,
                expires: None,
                keep_alive: None,
                last_modified: None,
                server: Some(SERVER_NAME.to_string()),
                set_cookie: None,
                transfer_encoding: None,
                vary: None,
            },
        }
    }

    /// Overrides the phrase without touching the code.
    pub fn status_phrase(mut self, phrase: StatusPhrase) -> Self {
        self.response.status_phrase = phrase;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.response.version = version.into();
        self
    }

    /// Sets a header by wire name. Unknown names are ignored.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        assign_header(RESPONSE_HEADERS, &mut self.response, name, value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.response.body = Some(body.into());
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
