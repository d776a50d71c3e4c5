//! Host Shell Abstractions
//!
//! Contracts for the pieces of the surrounding application shell the core
//! needs to reach: the navigation surface (client-side routing) and the
//! transient notification surface (message toasts).

/// Client-side navigation surface.
///
/// The core never renders destinations; it only asks the shell to move and to
/// update the display title. Implementations must tolerate repeated redirects
/// to the same destination (the 401 path may fire once per in-flight call).
pub trait Navigator: Send + Sync {
    /// Navigate to the given in-app path, replacing the pending transition.
    fn redirect(&self, path: &str);

    /// Set the display title (browser tab / window title).
    fn set_title(&self, title: &str);

    /// The path currently displayed, or an empty string when the shell
    /// cannot report one.
    fn current_path(&self) -> String;
}

/// Transient user-visible notification surface.
///
/// Every classified request failure is surfaced here exactly once before it
/// is re-raised to the caller.
pub trait Notifier: Send + Sync {
    /// Show an error notification.
    fn notify_error(&self, message: &str);

    /// Show an informational notification.
    fn notify_info(&self, message: &str);
}
