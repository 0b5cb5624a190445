//! Upload pipeline services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload of dropped files to the backend

pub mod upload;

pub use upload::*;
