use std::fmt;

use crate::http::message::{
    assign_header, lookup_header, populated_headers, HeaderField, HttpMessage, DEFAULT_VERSION,
};
use crate::http::parser::{split_message, ParseError};

/// HTTP request methods the server knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create a resource
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use mpweb::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

/// The method of a request as it appeared on the wire.
///
/// Unknown verbs are kept verbatim instead of failing the parse; the
/// connection layer rejects them before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Known(Method),
    Raw(String),
}

impl RequestMethod {
    pub fn parse(s: &str) -> Self {
        match Method::from_str(s) {
            Some(method) => RequestMethod::Known(method),
            None => RequestMethod::Raw(s.to_string()),
        }
    }

    pub fn known(&self) -> Option<Method> {
        match self {
            RequestMethod::Known(method) => Some(*method),
            RequestMethod::Raw(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestMethod::Known(method) => method.as_str(),
            RequestMethod::Raw(raw) => raw,
        }
    }
}

impl From<Method> for RequestMethod {
    fn from(method: Method) -> Self {
        RequestMethod::Known(method)
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request received from (or destined for) the wire.
///
/// Defaults to `GET / HTTP/1.1` with no headers. Every header is optional;
/// `None` and the empty string both mean "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub version: String,
    pub connection: Option<String>,
    pub body: Option<String>,
    pub method: RequestMethod,
    /// Request target, with one leading `/` removed when parsed.
    pub context: String,
    pub host: Option<String>,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    pub accept_language: Option<String>,
    pub accept_encoding: Option<String>,
    pub referer: Option<String>,
    pub upgrade_insecure_requests: Option<String>,
    pub if_modified_since: Option<String>,
    pub if_none_match: Option<String>,
    pub cache_control: Option<String>,
    pub content_type: Option<String>,
    /// Informational only, never checked against the body.
    pub content_length: Option<String>,
}

/// Request headers in emission order.
pub const REQUEST_HEADERS: &[HeaderField<Request>] = &[
    HeaderField {
        field: "connection",
        get: |r| &r.connection,
        get_mut: |r| &mut r.connection,
    },
    HeaderField {
        field: "host",
        get: |r| &r.host,
        get_mut: |r| &mut r.host,
    },
    HeaderField {
        field: "user_agent",
        get: |r| &r.user_agent,
        get_mut: |r| &mut r.user_agent,
    },
    HeaderField {
        field: "accept",
        get: |r| &r.accept,
        get_mut: |r| &mut r.accept,
    },
    HeaderField {
        field: "accept_language",
        get: |r| &r.accept_language,
        get_mut: |r| &mut r.accept_language,
    },
    HeaderField {
        field: "accept_encoding",
        get: |r| &r.accept_encoding,
        get_mut: |r| &mut r.accept_encoding,
    },
    HeaderField {
        field: "referer",
        get: |r| &r.referer,
        get_mut: |r| &mut r.referer,
    },
    HeaderField {
        field: "upgrade_insecure_requests",
        get: |r| &r.upgrade_insecure_requests,
        get_mut: |r| &mut r.upgrade_insecure_requests,
    },
    HeaderField {
        field: "if_modified_since",
        get: |r| &r.if_modified_since,
        get_mut: |r| &mut r.if_modified_since,
    },
    HeaderField {
        field: "if_none_match",
        get: |r| &r.if_none_match,
        get_mut: |r| &mut r.if_none_match,
    },
    HeaderField {
        field: "cache_control",
        get: |r| &r.cache_control,
        get_mut: |r| &mut r.cache_control,
    },
    HeaderField {
        field: "content_type",
        get: |r| &r.content_type,
        get_mut: |r| &mut r.content_type,
    },
    HeaderField {
        field: "content_length",
        get: |r| &r.content_length,
        get_mut: |r| &mut r.content_length,
    },
];

impl Default for Request {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            connection: None,
            body: None,
            method: RequestMethod::Known(Method::GET),
            context: "/".to_string(),
            host: None,
            user_agent: None,
            accept: None,
            accept_language: None,
            accept_encoding: None,
            referer: None,
            upgrade_insecure_requests: None,
            if_modified_since: None,
            if_none_match: None,
            cache_control: None,
            content_type: None,
            content_length: None,
        }
    }
}

impl Request {
    /// Retrieves a header value by its wire name (e.g. `"Content-Type"`).
    ///
    /// Names are matched exactly, as they are when parsing.
    pub fn header(&self, name: &str) -> Option<&str> {
        lookup_header(REQUEST_HEADERS, self, name).filter(|v| !v.is_empty())
    }

    /// The declared `Content-Length`, if it is present and not zero.
    ///
    /// The value is not validated beyond that; a non-numeric length still
    /// counts as declared.
    pub fn declared_length(&self) -> Option<&str> {
        self.content_length
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && v.parse::<u64>() != Ok(0))
    }
}

impl HttpMessage for Request {
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
        format!("{} {} {}", self.method, self.context, self.version)
    }

    fn headers(&self) -> Vec<(String, &str)> {
        populated_headers(REQUEST_HEADERS, self)
    }

    /// Parses `METHOD context VERSION` followed by headers and an optional body.
    ///
    /// The start line must have exactly three tokens. A context longer than
    /// one character loses a single leading `/`, so `/` stays `/`.
    fn parse(text: &str) -> Result<Self, ParseError> {
        let raw = split_message(text)?;

        let mut tokens = raw.start_line.split_whitespace();
        let (Some(method), Some(context), Some(version), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseError::InvalidStartLine(raw.start_line.to_string()));
        };

        let context = match context.strip_prefix('/') {
            Some(stripped) if context.len() > 1 => stripped,
            _ => context,
        };

        let mut builder = RequestBuilder::new()
            .method(RequestMethod::parse(method))
            .context(context)
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

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Builder for constructing Request objects.
///
/// Starts from [`Request::default`]. Headers are set by wire name;
/// names that do not belong to a request header are ignored.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<RequestMethod>) -> Self {
        self.request.method = method.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.request.context = context.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.request.version = version.into();
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        assign_header(REQUEST_HEADERS, &mut self.request, name, value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
