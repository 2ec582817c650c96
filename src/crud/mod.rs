//! Method-based dispatch to mock create/read/update/delete handlers.
//!
//! Handlers validate headers and check that the target file exists, but
//! never create, write or delete anything. Reads honor `If-Modified-Since`.

pub mod dispatcher;
pub mod error;
pub mod store;

pub use dispatcher::Dispatcher;
pub use error::CrudError;
pub use store::{FileStore, LocalFileStore, StoredFile};
