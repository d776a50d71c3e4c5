//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host shell.
//!
//! ## Overview
//!
//! This crate defines the contract between the admin-console core and the
//! shell it runs inside (a browser tab, a desktop webview, a test harness).
//! Each trait represents a capability the core requires but that must be
//! implemented differently per host.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP transport with TLS and timeouts
//! - [`KeyValueStore`](storage::KeyValueStore) - Durable string storage for the credential
//! - [`Navigator`](ui::Navigator) - Client-side navigation and display title
//! - [`Notifier`](ui::Notifier) - Transient user-visible notifications
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Host
//! implementations should convert platform-specific errors to the variant the
//! core can classify: `Timeout`/`Connection` for calls that went out without
//! a response, `InvalidRequest` for calls that could never be sent.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.

pub mod error;
pub mod http;
pub mod storage;
pub mod ui;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use storage::KeyValueStore;
pub use ui::{Navigator, Notifier};
