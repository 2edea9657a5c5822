//! Synchronous client core for the Freelancer project and job search API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A blocking `Transport`
//! executes the round-trip; `UreqTransport` is the default one, and tests
//! can substitute their own.
//!
//! # Design
//! - `FreelancerClient` holds only the auth token and base URL.
//! - Each search is split into `build_*` (produces request) and
//!   `parse_result` (consumes response), with `search_*` helpers running
//!   both around a `Transport`.
//! - Filters are plain structs with public fields and `Default` impls, so
//!   every call constructs its own empty lists.
//! - Only the `result` field of the response envelope is surfaced, as an
//!   `Option<serde_json::Value>`.

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{FreelancerClient, DEFAULT_BASE_URL, OAUTH_HEADER};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::QueryValue;
pub use transport::{Transport, TransportConfig, UreqTransport};
pub use types::{JobSearch, ProjectSearch, ProjectType};
