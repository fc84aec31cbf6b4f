pub mod client;
pub mod error;
pub mod query;
pub mod request;
pub mod response;
pub mod transport;

// Re-export commonly used types
pub use client::OracleClient;
pub use error::{OracleError, Result};
pub use query::{Field, FieldError, Query};
pub use request::build_uri;
pub use response::{Response, classify};
pub use transport::{HttpTransport, Transport};
