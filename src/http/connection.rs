use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::Config;
use crate::crud::Dispatcher;
use crate::http::message::HttpMessage;
use crate::http::parser::{frame_status, Framing};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// How much a connection reads before handling the request, and how long
/// it waits for more.
#[derive(Debug, Clone, Copy)]
pub struct ReadLimits {
    pub max_bytes: usize,
    pub timeout: Duration,
}

impl ReadLimits {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_bytes: cfg.max_request_bytes,
            timeout: cfg.read_timeout(),
        }
    }
}

/// One client connection carrying exactly one request.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    dispatcher: Dispatcher,
    limits: ReadLimits,
}

pub enum ConnectionState {
    Reading,
    Processing(Bytes),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, dispatcher: Dispatcher, limits: ReadLimits) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(limits.max_bytes),
            state: ConnectionState::Reading,
            dispatcher,
            limits,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let payload = self.read_request().await?;
                    self.state = ConnectionState::Processing(payload);
                }

                ConnectionState::Processing(payload) => {
                    let payload = payload.clone();
                    let dispatcher = self.dispatcher.clone();

                    // Handlers block (file reads, the delay path), so each
                    // request gets its own thread.
                    let response = match tokio::task::spawn_blocking(move || {
                        Self::respond(&payload, &dispatcher)
                    })
                    .await
                    {
                        Ok(response) => response,
                        Err(e) => {
                            tracing::error!("Request handler failed: {}", e);
                            Response::bad_request()
                        }
                    };

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the request is framed, the peer stops sending, or the
    /// size limit is reached. Whatever arrived is returned, even if empty.
    pub async fn read_request(&mut self) -> anyhow::Result<Bytes> {
        loop {
            if !self.buffer.is_empty() && frame_status(&self.buffer) == Framing::Complete {
                break;
            }

            if self.buffer.len() >= self.limits.max_bytes {
                self.buffer.truncate(self.limits.max_bytes);
                break;
            }

            let read = timeout(
                self.limits.timeout,
                self.stream.read_buf(&mut self.buffer),
            )
            .await;

            let n = match read {
                Ok(read) => read?,
                Err(_) => {
                    warn!(
                        received = self.buffer.len(),
                        "Timed out waiting for request data"
                    );
                    break;
                }
            };

            if n == 0 {
                // Client closed its side
                break;
            }
        }

        Ok(self.buffer.split().freeze())
    }

    /// Turns a raw payload into a response: decode, parse, validate the
    /// method, dispatch.
    ///
    /// Empty, non-ASCII or unparseable payloads and unknown methods get a
    /// 400 without reaching the dispatcher.
    pub fn respond(payload: &[u8], dispatcher: &Dispatcher) -> Response {
        let text = match std::str::from_utf8(payload) {
            Ok(text) if text.is_ascii() => text.trim(),
            _ => {
                warn!("Rejected non-ASCII request payload");
                return Response::bad_request();
            }
        };

        if text.is_empty() {
            warn!("Rejected empty request payload");
            return Response::bad_request();
        }

        let request = match Request::parse(text) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejected malformed request");
                return Response::bad_request();
            }
        };

        if request.method.known().is_none() {
            warn!(method = %request.method, "Rejected unsupported method");
            return Response::bad_request();
        }

        let response = dispatcher.dispatch(&request);

        info!(
            method = %request.method,
            context = %request.context,
            status = response.status_code.as_u16(),
            "Request handled"
        );

        response
    }
}
