//! Join-form submission: the handler, the seams it talks through, and the
//! HTTP transport that carries the form to the endpoint, plus a QR code
//! generator for the join URL.

pub mod config;
pub mod handler;
pub mod qr;
pub mod surface;
pub mod transport;

pub use handler::JoinFormHandler;
pub use surface::{FormSurface, PageSurface, StatusSurface, SubmitEvent, Transport};
pub use transport::HttpTransport;
