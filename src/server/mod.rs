//! TCP front end: accepts connections and hands each one to a
//! [`Connection`](crate::http::connection::Connection).

pub mod listener;
