//! Pipeline module - character pools, generation and persistence

pub mod charset;
pub mod error;
pub mod generator;
pub mod request;
pub mod writer;

pub use charset::*;
pub use error::CodegenError;
pub use generator::*;
pub use request::*;
pub use writer::*;
