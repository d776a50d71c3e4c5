//! Platform-independent client core for the scheduler admin console.
//!
//! Everything here is host-agnostic: HTTP transport, credential persistence,
//! and navigation are reached only through the `bridge-traits` contracts, so
//! the same core drives a desktop shell or a browser shell unchanged.
//!
//! The pieces compose bottom-up:
//! - [`credentials::CredentialStore`] persists the bearer token.
//! - [`session::SessionService`] holds the in-memory session snapshot.
//! - [`pipeline::RequestPipeline`] sends authenticated requests and
//!   classifies failures.
//! - [`auth::AuthService`] drives login, profile fetch, and logout.
//! - [`guard::NavigationGuard`] gates in-app navigation.
//! - [`api`] exposes typed clients for the job, log, and user endpoints.

pub mod api;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod pipeline;
pub mod session;
pub mod types;

#[cfg(test)]
mod testutil;

pub use auth::AuthService;
pub use config::ClientConfig;
pub use credentials::CredentialStore;
pub use error::{ApiError, Result};
pub use guard::{GuardDecision, NavigationGuard, RouteDescriptor};
pub use pipeline::{RequestPipeline, SessionExpiryRedirect, UnauthorizedHandler};
pub use session::SessionService;
pub use types::{Credential, LoginState, Principal, Role, Session};
