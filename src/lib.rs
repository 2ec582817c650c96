//! MP Web Server - a minimal HTTP/1.1 server
//!
//! Core library: the HTTP message model, the mock CRUD dispatcher and the
//! TCP front end that ties them together.

pub mod config;
pub mod crud;
pub mod http;
pub mod server;
