//! Async client for the SmartHR REST API.
//!
//! One method per remote operation. Every call validates its request model,
//! sends exactly one HTTP request and returns an [`ApiResponse`]. Non-2xx
//! statuses surface as [`SmartHrError::Http`](crate::SmartHrError::Http)
//! carrying the raw body.

mod classifications;
pub mod core;
mod crews;
mod departments;
pub mod dependents;
pub mod response;

pub use self::core::{SmartHrClient, USER_AGENT};
pub use departments::DEPARTMENT_DISCONTINUED_MESSAGE;
pub use dependents::NO_DEPENDENTS_MESSAGE;
pub use response::ApiResponse;
