//! # Desktop Host Bridge
//!
//! Native implementations of the [`bridge_traits`] contracts for desktop
//! shells and integration tests:
//!
//! - [`ReqwestHttpClient`](http::ReqwestHttpClient) - reqwest-backed HTTP transport
//! - [`JsonFileStore`](storage::JsonFileStore) - JSON-file key-value storage
//! - [`TracingNotifier`](ui::TracingNotifier) - notifications via `tracing`
//!
//! A browser shell would supply fetch- and localStorage-backed adapters
//! instead; the core is identical either way.

pub mod http;
pub mod storage;
pub mod ui;

pub use http::ReqwestHttpClient;
pub use storage::JsonFileStore;
pub use ui::TracingNotifier;
