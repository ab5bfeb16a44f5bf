pub mod client;
pub mod error;
pub mod response;
pub mod source;
