//! Shared shape of HTTP messages.
//!
//! Requests and responses agree on three things: a version string used
//! verbatim in the start line, an optional `Connection` header and an
//! optional body. Every other header lives in a per-type table of
//! [`HeaderField`]s, declared once in the order the fields go on the wire.

use crate::http::parser::ParseError;

/// Version used when a message does not name one.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// Serialize/parse contract implemented by [`Request`](crate::http::request::Request)
/// and [`Response`](crate::http::response::Response).
pub trait HttpMessage: Sized {
    fn version(&self) -> &str;

    fn connection(&self) -> Option<&str>;

    fn body(&self) -> Option<&str>;

    /// The first line of the message, without its CRLF.
    fn start_line(&self) -> String;

    /// Populated headers as `(Header-Name, value)`, in emission order.
    fn headers(&self) -> Vec<(String, &str)>;

    /// Parses wire text back into a message.
    fn parse(text: &str) -> Result<Self, ParseError>;

    /// Renders the message as wire text.
    ///
    /// Empty headers are skipped. A non-empty body is preceded by a blank
    /// line and followed by a CRLF; without a body there is no trailing
    /// blank line.
    fn serialize(&self) -> String {
        let mut out = self.start_line();
        out.push_str("\r\n");

        for (name, value) in self.headers() {
            out.push_str(&name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }

        if let Some(body) = self.body().filter(|b| !b.is_empty()) {
            out.push_str("\r\n");
            out.push_str(body);
            out.push_str("\r\n");
        }

        out
    }
}

/// One optional header of a message type `T`.
///
/// `field` is the snake_case field name; the wire name is derived from it
/// with [`header_name`].
pub struct HeaderField<T> {
    pub field: &'static str,
    pub get: fn(&T) -> &Option<String>,
    pub get_mut: fn(&mut T) -> &mut Option<String>,
}

impl<T> HeaderField<T> {
    pub fn header_name(&self) -> String {
        header_name(self.field)
    }
}

/// Converts a field name to its header name: `content_type` -> `Content-Type`.
///
/// Each underscore-separated word is capitalized (first letter upper, the
/// rest lower), so `etag` becomes `Etag`.
pub fn header_name(field: &str) -> String {
    field
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Collects the non-empty headers of `message` in table order.
pub(crate) fn populated_headers<'a, T>(
    table: &[HeaderField<T>],
    message: &'a T,
) -> Vec<(String, &'a str)> {
    table
        .iter()
        .filter_map(|field| {
            (field.get)(message)
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (field.header_name(), v))
        })
        .collect()
}

/// Looks a header up by its wire name.
pub(crate) fn lookup_header<'a, T>(
    table: &[HeaderField<T>],
    message: &'a T,
    name: &str,
) -> Option<&'a str> {
    table
        .iter()
        .find(|field| field.header_name() == name)
        .and_then(|field| (field.get)(message).as_deref())
}

/// Stores `value` in the field whose wire name is exactly `name`.
///
/// Returns `false` and leaves the message untouched when no field matches.
pub(crate) fn assign_header<T>(
    table: &[HeaderField<T>],
    message: &mut T,
    name: &str,
    value: String,
) -> bool {
    match table.iter().find(|field| field.header_name() == name) {
        Some(field) => {
            *(field.get_mut)(message) = Some(value);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_from_fields() {
        assert_eq!(header_name("content_type"), "Content-Type");
        assert_eq!(header_name("host"), "Host");
        assert_eq!(header_name("access_control_allow_origin"), "Access-Control-Allow-Origin");
        assert_eq!(header_name("etag"), "Etag");
    }
}
