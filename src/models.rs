use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// --- Actor Identities ---

/// AdminIdentity
///
/// The back-office identity attached to a session after a successful admin
/// credential exchange. Resolved and issued by the external authentication
/// subsystem; this core only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct AdminIdentity {
    // Primary key in the external identity store.
    pub id: Uuid,
    pub email: String,
    // Shown in the admin chrome header.
    pub display_name: String,
    #[ts(type = "string")]
    pub signed_in_at: DateTime<Utc>,
}

/// CustomerIdentity
///
/// The self-service portal identity attached to a session after a successful
/// customer login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct CustomerIdentity {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    #[ts(type = "string")]
    pub signed_in_at: DateTime<Utc>,
}

/// ActorRole
///
/// The RBAC discriminant for an authenticated actor. The two authentication
/// domains (back office vs. customer portal) are mutually exclusive: a session
/// carries at most one of them at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActorRole {
    Admin,
    Customer,
}

// --- Session ---

/// AuthPayload
///
/// The authentication payload of a session, modeled as a tagged sum so that
/// "authenticated but no actor attached" is unrepresentable. Exactly one
/// variant is populated at any time; `Anonymous` is the state before login
/// and after logout or session invalidation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "actor")]
#[ts(export)]
pub enum AuthPayload {
    #[default]
    Anonymous,
    Admin(AdminIdentity),
    Customer(CustomerIdentity),
}

/// Session
///
/// The current visitor's authentication context. Created empty at application
/// start, populated by the external authentication subsystem on credential
/// exchange, cleared on logout or on a backend session-invalidation signal.
///
/// This core treats Session as read-only: evaluation functions take it as an
/// explicit parameter and never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub auth: AuthPayload,
    /// Opaque bearer token minted by the backend. Its storage medium is an
    /// external collaborator's concern; the router never inspects it.
    pub token: Option<String>,
}

impl Session {
    /// is_authenticated
    ///
    /// Derived view over the tagged payload. True exactly when an actor
    /// identity is attached, so the flag/actor invariant holds by
    /// construction.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.auth, AuthPayload::Anonymous)
    }

    /// actor_role
    ///
    /// The role of the attached actor, if any.
    pub fn actor_role(&self) -> Option<ActorRole> {
        match self.auth {
            AuthPayload::Anonymous => None,
            AuthPayload::Admin(_) => Some(ActorRole::Admin),
            AuthPayload::Customer(_) => Some(ActorRole::Customer),
        }
    }
}

// --- Notifications ---

/// NotificationKind
///
/// Severity/flavor of a user-facing message pushed to the presentation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationKind {
    Warning,
    Error,
    Success,
    Info,
}

/// Notification
///
/// A fire-and-forget user-facing message. Consumed by an external toast/queue
/// presenter; no acknowledgment flows back, and each access decision emits at
/// most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
