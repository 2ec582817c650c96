use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty message")]
    Empty,
    #[error("malformed start line: {0:?}")]
    InvalidStartLine(String),
    #[error("malformed header line: {0:?}")]
    InvalidHeader(String),
    #[error("unknown status code: {0:?}")]
    UnknownStatusCode(String),
    #[error("unknown status phrase: {0:?}")]
    UnknownStatusPhrase(String),
}

/// A message split into its three parts, before any typing.
#[derive(Debug)]
pub struct RawMessage<'a> {
    pub start_line: &'a str,
    pub headers: Vec<(&'a str, &'a str)>,
    pub body: String,
}

/// Splits wire text into start line, header pairs and body.
///
/// The first empty line separates headers from the body; body lines are
/// rejoined with CRLF. Without an empty line every remaining line is a
/// header and the body is empty.
///
/// Header lines are split on every `": "` and must yield exactly a name and
/// a value, so a value that itself contains `": "` is rejected.
pub fn split_message(text: &str) -> Result<RawMessage<'_>, ParseError> {
    let mut lines = text.lines();
    let start_line = lines.next().ok_or(ParseError::Empty)?;

    let rest: Vec<&str> = lines.collect();
    let (header_lines, body) = match rest.iter().position(|line| line.is_empty()) {
        Some(blank) => (&rest[..blank], rest[blank + 1..].join("\r\n")),
        None => (&rest[..], String::new()),
    };

    let headers = header_lines
        .iter()
        .copied()
        .map(split_header)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawMessage {
        start_line,
        headers,
        body,
    })
}

fn split_header(line: &str) -> Result<(&str, &str), ParseError> {
    let parts: Vec<&str> = line.split(": ").collect();
    match parts.as_slice() {
        [name, value] => Ok((*name, *value)),
        _ => Err(ParseError::InvalidHeader(line.to_string())),
    }
}

/// Whether a read buffer holds a whole request yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Complete,
    Incomplete,
}

/// Decides whether `buf` can be handed to the request parser.
///
/// Once the blank line after the headers has arrived, only the body
/// length matters: it must reach any declared `Content-Length`, with or
/// without a trailing line break. Messages without a blank line carry no
/// body and are complete as soon as their last line is terminated.
pub fn frame_status(buf: &[u8]) -> Framing {
    let Some(headers_end) = find_headers_end(buf) else {
        return if buf.ends_with(b"\n") {
            Framing::Complete
        } else {
            Framing::Incomplete
        };
    };

    let declared = std::str::from_utf8(&buf[..headers_end])
        .ok()
        .and_then(|head| {
            head.split("\r\n")
                .find_map(|line| line.strip_prefix("Content-Length: "))
        })
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body = &buf[headers_end + 4..];
    let body = body.strip_suffix(b"\r\n").unwrap_or(body);

    if body.len() >= declared {
        Framing::Complete
    } else {
        Framing::Incomplete
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple_get() {
        let raw = split_message("GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

        assert_eq!(raw.start_line, "GET / HTTP/1.1");
        assert_eq!(raw.headers, vec![("Host", "example.com")]);
        assert_eq!(raw.body, "");
    }

    #[test]
    fn headers_end_is_found() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\nbody"), Some(14));
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
    }
}
