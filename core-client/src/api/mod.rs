//! Typed endpoint clients.
//!
//! Thin, typed wrappers over the request pipeline for the resources the
//! console manages. The view layer calls these; all credential handling and
//! failure classification happens in the pipeline underneath.

pub mod jobs;
pub mod logs;
pub mod users;

pub use jobs::{Job, JobCreate, JobListQuery, JobStatus, JobUpdate, JobsApi};
pub use logs::{JobLog, LogListQuery, LogsApi};
pub use users::{UserCreate, UserUpdate, UsersApi};
