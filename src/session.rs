use std::sync::{Arc, RwLock};

use crate::models::{AdminIdentity, AuthPayload, CustomerIdentity, Session};

// 1. SessionProvider Contract
/// SessionProvider
///
/// Defines the read-only contract through which the routing core observes the
/// current authentication state. Reads are synchronous and reflect the latest
/// committed state at evaluation time; the core never assumes anything about
/// the storage or transport behind it.
///
/// Evaluation functions still take `Session` as an explicit parameter — this
/// trait only exists so the composer can take a fresh snapshot per
/// navigation without reaching into global state.
pub trait SessionProvider: Send + Sync {
    /// Returns a snapshot of the current session. Cheap to call; taken once
    /// per navigation so a mid-evaluation login/logout cannot tear a single
    /// decision.
    fn snapshot(&self) -> Session;
}

// 2. The Concrete Store
/// SharedSession
///
/// The concrete session store. The mutating surface (login/logout/invalidate)
/// models the external authentication subsystem; the routing core itself only
/// ever calls `snapshot()` through the `SessionProvider` trait.
///
/// All reads happen on the single UI thread between mutations, so the lock is
/// uncontended in practice; it exists to keep snapshots coherent.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    /// new
    ///
    /// Starts anonymous, exactly as the application boots before any stored
    /// credentials are exchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// login_admin
    ///
    /// Commits a successful back-office credential exchange. Replaces any
    /// previously attached actor: the two authentication domains are mutually
    /// exclusive, so an admin login implicitly ends a customer session.
    pub fn login_admin(&self, identity: AdminIdentity, token: impl Into<String>) {
        let mut session = self.inner.write().expect("session lock poisoned");
        tracing::info!(admin = %identity.email, "admin session established");
        session.auth = AuthPayload::Admin(identity);
        session.token = Some(token.into());
    }

    /// login_customer
    ///
    /// Commits a successful customer credential exchange.
    pub fn login_customer(&self, identity: CustomerIdentity, token: impl Into<String>) {
        let mut session = self.inner.write().expect("session lock poisoned");
        tracing::info!(customer = %identity.email, "customer session established");
        session.auth = AuthPayload::Customer(identity);
        session.token = Some(token.into());
    }

    /// logout
    ///
    /// Clears the session back to anonymous on explicit user logout.
    pub fn logout(&self) {
        let mut session = self.inner.write().expect("session lock poisoned");
        tracing::info!("session cleared on logout");
        *session = Session::default();
    }

    /// invalidate
    ///
    /// Clears the session in response to a backend session-invalidation
    /// signal (expired/revoked token). Same end state as `logout`, logged
    /// separately because it is not user-initiated.
    pub fn invalidate(&self) {
        let mut session = self.inner.write().expect("session lock poisoned");
        tracing::warn!("session invalidated by backend signal");
        *session = Session::default();
    }
}

impl SessionProvider for SharedSession {
    fn snapshot(&self) -> Session {
        self.inner.read().expect("session lock poisoned").clone()
    }
}

/// SessionState
///
/// The concrete type used to share session access across the router state.
pub type SessionState = Arc<dyn SessionProvider>;
