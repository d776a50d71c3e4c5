//! Navigation guarding.
//!
//! Runs before every in-app navigation transition. The guard only reads the
//! session and decides; applying the decision (redirecting, setting the
//! display title) goes through the host's [`Navigator`].

use crate::session::SessionService;
use crate::types::Session;
use bridge_traits::ui::Navigator;
use tracing::debug;

/// Default application display title.
pub const APP_TITLE: &str = "Scheduler Admin";

/// The login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Default landing destination after login.
pub const HOME_PATH: &str = "/dashboard";

/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirect";

/// A navigable destination, as declared by the routing layer.
///
/// `requires_auth` defaults to true when unspecified; only destinations that
/// explicitly opt out (the login page, the not-found page) are public.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub title: Option<String>,
    pub requires_auth: Option<bool>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            title: None,
            requires_auth: None,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Mark the destination reachable without a session.
    pub fn public(mut self) -> Self {
        self.requires_auth = Some(false);
        self
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(true)
    }
}

/// Outcome of guarding one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed; `title` is the display title to install.
    Allow { title: String },
    /// Abort and go to the login entry point, remembering the original path.
    RedirectToLogin { resume: String },
}

/// The admin console's navigation surface.
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new(LOGIN_PATH, "login").titled("Sign In").public(),
        RouteDescriptor::new(HOME_PATH, "dashboard").titled("Dashboard"),
        RouteDescriptor::new("/jobs", "jobs").titled("Jobs"),
        RouteDescriptor::new("/jobs/create", "job-create").titled("Create Job"),
        RouteDescriptor::new("/jobs/edit/:id", "job-edit").titled("Edit Job"),
        RouteDescriptor::new("/logs", "logs").titled("Execution Logs"),
        RouteDescriptor::new("/users", "users").titled("Users"),
        RouteDescriptor::new("/settings", "settings").titled("Settings"),
        RouteDescriptor::new("/:pathMatch(.*)*", "not-found")
            .titled("Not Found")
            .public(),
    ]
}

/// Build the login destination carrying `resume` as the resumption
/// parameter. An empty resume path yields the bare login destination.
pub fn login_redirect(resume: &str) -> String {
    if resume.is_empty() || resume.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_PARAM, resume)
        .finish();
    format!("{}?{}", LOGIN_PATH, query)
}

/// Pre-navigation interceptor.
///
/// Reads the session, never mutates it.
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionService,
}

impl NavigationGuard {
    pub fn new(session: SessionService) -> Self {
        Self { session }
    }

    /// Decide whether a transition to `route` may proceed.
    pub fn check(&self, route: &RouteDescriptor) -> GuardDecision {
        let session: Session = self.session.current();

        if route.requires_auth() && session.credential.is_none() {
            debug!(path = %route.path, "Unauthenticated navigation, redirecting to login");
            return GuardDecision::RedirectToLogin {
                resume: route.path.clone(),
            };
        }

        let title = match &route.title {
            Some(title) => format!("{} - {}", title, APP_TITLE),
            None => APP_TITLE.to_string(),
        };
        GuardDecision::Allow { title }
    }

    /// Decide and apply: install the display title or perform the redirect.
    pub fn before_each(&self, route: &RouteDescriptor, navigator: &dyn Navigator) -> GuardDecision {
        let decision = self.check(route);

        match &decision {
            GuardDecision::Allow { title } => navigator.set_title(title),
            GuardDecision::RedirectToLogin { resume } => {
                navigator.redirect(&login_redirect(resume))
            }
        }

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::CredentialStore;
    use crate::testutil::{MemoryStore, RecordingNavigator};
    use crate::types::Credential;
    use std::sync::Arc;

    fn session() -> SessionService {
        SessionService::new(CredentialStore::new(Arc::new(MemoryStore::new())))
    }

    async fn authenticated_session() -> SessionService {
        let sessions = session();
        sessions.credentials().write(&Credential::new("tok")).await.unwrap();
        sessions.rehydrate().await.unwrap();
        sessions
    }

    #[tokio::test]
    async fn unauthenticated_navigation_redirects_with_resume() {
        let guard = NavigationGuard::new(session());
        let route = RouteDescriptor::new("/jobs", "jobs").titled("Jobs");

        let decision = guard.check(&route);
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                resume: "/jobs".to_string()
            }
        );

        let navigator = RecordingNavigator::new();
        guard.before_each(&route, &navigator);
        assert_eq!(
            navigator.last_redirect(),
            Some("/login?redirect=%2Fjobs".to_string())
        );
    }

    #[tokio::test]
    async fn requires_auth_defaults_to_true() {
        let guard = NavigationGuard::new(session());
        let route = RouteDescriptor::new("/settings", "settings");
        assert!(matches!(
            guard.check(&route),
            GuardDecision::RedirectToLogin { .. }
        ));
    }

    #[tokio::test]
    async fn public_route_never_redirects() {
        let guard = NavigationGuard::new(session());
        let route = RouteDescriptor::new(LOGIN_PATH, "login").titled("Sign In").public();

        let decision = guard.check(&route);
        assert_eq!(
            decision,
            GuardDecision::Allow {
                title: "Sign In - Scheduler Admin".to_string()
            }
        );
    }

    #[tokio::test]
    async fn authenticated_navigation_sets_the_title() {
        let guard = NavigationGuard::new(authenticated_session().await);
        let navigator = RecordingNavigator::new();

        guard.before_each(
            &RouteDescriptor::new("/jobs", "jobs").titled("Jobs"),
            &navigator,
        );
        assert_eq!(
            navigator.titles.lock().last(),
            Some(&"Jobs - Scheduler Admin".to_string())
        );
        assert!(navigator.last_redirect().is_none());
    }

    #[tokio::test]
    async fn untitled_route_falls_back_to_the_app_title() {
        let guard = NavigationGuard::new(authenticated_session().await);
        let decision = guard.check(&RouteDescriptor::new("/jobs", "jobs"));
        assert_eq!(
            decision,
            GuardDecision::Allow {
                title: APP_TITLE.to_string()
            }
        );
    }

    #[test]
    fn login_redirect_encodes_the_resume_path() {
        assert_eq!(login_redirect(""), "/login");
        assert_eq!(login_redirect("/login"), "/login");
        assert_eq!(
            login_redirect("/jobs/edit/3"),
            "/login?redirect=%2Fjobs%2Fedit%2F3"
        );
    }

    #[test]
    fn default_routes_cover_the_console_surface() {
        let routes = default_routes();
        let login = routes.iter().find(|r| r.name == "login").unwrap();
        assert!(!login.requires_auth());

        let jobs = routes.iter().find(|r| r.name == "jobs").unwrap();
        assert!(jobs.requires_auth());
    }
}
