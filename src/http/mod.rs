//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1: one request per connection, a fixed set of
//! typed headers, no chunked encoding.
//!
//! # Architecture
//!
//! - **`message`**: The [`HttpMessage`](message::HttpMessage) contract and header-field tables
//! - **`request`**: Request representation, parsing and serialization
//! - **`response`**: Response representation with builder pattern
//! - **`date`**: HTTP date formatting and comparison for conditional GETs
//! - **`parser`**: Splitting wire text into parts, and request framing
//! - **`connection`**: Per-connection state machine driving the dispatcher
//! - **`writer`**: Writes serialized responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Collect the request bytes
//!        └──────┬──────┘
//!               │ Request framed (or peer done / limit hit)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← parse → dispatch, on a blocking thread
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send serialized response
//!        └──────┬───────────┘
//!               │
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```
//! use mpweb::http::message::HttpMessage;
//! use mpweb::http::request::Request;
//!
//! let request = Request::parse("GET /index.html HTTP/1.1\r\nHost: localhost\r\n").unwrap();
//! assert_eq!(request.context, "index.html");
//! assert_eq!(request.host.as_deref(), Some("localhost"));
//! ```

pub mod connection;
pub mod date;
pub mod message;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
