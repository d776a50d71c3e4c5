use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer credential proving an authenticated session.
///
/// The token has no internal structure the client may rely on. It is
/// replaced or cleared, never mutated in place. The `Debug` implementation
/// redacts the value so credentials never reach logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// The authenticated user's identity as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Capability label derived from principal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superuser,
    User,
}

impl Role {
    /// Derive the role set for a principal.
    ///
    /// Pure function of the principal's privilege flag; the session never
    /// mutates roles independently of the principal they came from.
    pub fn derive(principal: &Principal) -> Vec<Role> {
        if principal.is_superuser {
            vec![Role::Superuser]
        } else {
            vec![Role::User]
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// In-memory representation of the current session.
///
/// Invariant: when `credential` is absent, `principal` is absent and `roles`
/// is empty. Mutated only through `SessionService`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub credential: Option<Credential>,
    pub principal: Option<Principal>,
    pub roles: Vec<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_superuser(&self) -> bool {
        self.has_role(Role::Superuser)
    }
}

/// Typed response contract of the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// State of the login handshake.
///
/// ```text
/// Idle -> Submitting -> Authenticated
///              |
///              v
///           Failed
/// ```
///
/// `Failed` is re-entrant: a new `login` may start from it exactly as from
/// `Idle`. Only `Submitting` rejects a concurrent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed,
}

impl LoginState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, LoginState::Submitting)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginState::Authenticated)
    }
}
