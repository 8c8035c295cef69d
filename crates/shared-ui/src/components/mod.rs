pub mod field;
pub mod form;
pub mod status_message;

pub use field::*;
pub use form::*;
pub use status_message::*;
