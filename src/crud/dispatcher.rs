//! Routes a request to its handler by method.
//!
//! | Method        | Handler  |
//! |---------------|----------|
//! | `GET`, `HEAD` | `read`   |
//! | `POST`        | `create` |
//! | `PUT`         | `update` |
//! | `DELETE`      | `delete` |

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::crud::error::CrudError;
use crate::crud::store::{FileStore, LocalFileStore};
use crate::http::date::{format_http_date, is_greater_than};
use crate::http::request::{Method, Request, RequestMethod};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Body served for `GET /`.
pub const ROOT_BODY: &str = "hello :)";

/// Path that sleeps before answering.
pub const DELAY_CONTEXT: &str = "delay";

/// How long the `delay` path blocks by default.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Maps requests to the mock CRUD handlers.
///
/// Cheap to clone; clones share the same [`FileStore`].
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn FileStore>,
    delay: Duration,
}

impl Dispatcher {
    pub fn new(store: impl FileStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            delay: DEFAULT_DELAY,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(LocalFileStore::new(cfg.document_root.clone())).with_delay(cfg.delay())
    }

    /// Changes how long the `delay` path sleeps.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs the handler for `request.method` and always produces a response.
    ///
    /// Handler failures become body-less responses with the matching status.
    /// Unknown methods should be rejected before this point; if one slips
    /// through it gets a 400.
    pub fn dispatch(&self, request: &Request) -> Response {
        let result = match &request.method {
            RequestMethod::Known(Method::POST) => self.create(request),
            RequestMethod::Known(Method::GET | Method::HEAD) => self.read(request),
            RequestMethod::Known(Method::PUT) => self.update(request),
            RequestMethod::Known(Method::DELETE) => self.delete(request),
            RequestMethod::Raw(method) => Err(CrudError::UnsupportedMethod(method.clone())),
        };

        result.unwrap_or_else(|err| {
            tracing::debug!(
                method = %request.method,
                context = %request.context,
                error = %err,
                "Request refused by handler"
            );
            Response::status(err.status())
        })
    }

    fn create(&self, request: &Request) -> Result<Response, CrudError> {
        present(&request.content_type).ok_or(CrudError::MissingHeader("Content-Type"))?;
        request.declared_length().ok_or(CrudError::LengthRequired)?;

        Ok(Response::ok())
    }

    fn read(&self, request: &Request) -> Result<Response, CrudError> {
        if request.context.is_empty() {
            return Err(CrudError::MissingContext);
        }

        let includes_body = request.method == RequestMethod::Known(Method::GET);

        match request.context.as_str() {
            "/" if includes_body => {
                return Ok(ResponseBuilder::new(StatusCode::Ok).body(ROOT_BODY).build());
            }
            "/" => return Ok(Response::ok()),
            DELAY_CONTEXT => {
                tracing::debug!(delay = ?self.delay, "Sleeping before reply");
                thread::sleep(self.delay);
                return Ok(ResponseBuilder::new(StatusCode::Ok).body(DELAY_CONTEXT).build());
            }
            _ => {}
        }

        ensure_html(&request.context)?;

        let file = self
            .store
            .open(&request.context)
            .map_err(|e| CrudError::from_io(&request.context, e))?;
        let last_modified = format_http_date(Some(file.last_modified));

        if let Some(since) = present(&request.if_modified_since) {
            if !is_greater_than(&last_modified, since)? {
                return Ok(Response::status(StatusCode::NotModified));
            }
        }

        let builder = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .header("Last-Modified", last_modified);

        Ok(if includes_body {
            builder.body(file.content).build()
        } else {
            builder.build()
        })
    }

    fn update(&self, request: &Request) -> Result<Response, CrudError> {
        present(&request.content_type).ok_or(CrudError::MissingHeader("Content-Type"))?;
        if request.context.is_empty() {
            return Err(CrudError::MissingContext);
        }
        request.declared_length().ok_or(CrudError::LengthRequired)?;
        ensure_html(&request.context)?;

        self.store
            .probe(&request.context)
            .map_err(|e| CrudError::from_io(&request.context, e))?;

        Ok(Response::ok())
    }

    fn delete(&self, request: &Request) -> Result<Response, CrudError> {
        if request.context.is_empty() {
            return Err(CrudError::MissingContext);
        }
        ensure_html(&request.context)?;

        self.store
            .probe(&request.context)
            .map_err(|e| CrudError::from_io(&request.context, e))?;

        Ok(Response::ok())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn ensure_html(context: &str) -> Result<(), CrudError> {
    if context.ends_with("html") {
        Ok(())
    } else {
        Err(CrudError::Forbidden(context.to_string()))
    }
}
