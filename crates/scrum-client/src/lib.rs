//! Remote Access Layer for the Scrum manager backend.
//!
//! One typed operation per REST endpoint; no caching, no retries, no
//! business logic. State reconciliation lives in `scrum-store`.

pub(crate) mod client;
pub(crate) mod error;


pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
