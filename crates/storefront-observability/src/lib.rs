//! Observability for storefront requests.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `RequestLogger` - Structured per-request logging with timing

mod logging;
mod request;

pub use logging::*;
pub use request::RequestId;
