// --- Module Structure ---

// Core routing services and components.
pub mod access;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod loader;
pub mod models;
pub mod navigate;
pub mod notify;
pub mod session;

// Module for the static route table, segregated by access area
// (Public, Customer, Admin).
pub mod routes;

// --- Public Re-exports ---

// Makes the core types easily accessible to the composition root.
pub use access::{AccessDecision, RoleGuard, evaluate};
pub use catalog::{
    ComponentRef, LoadStrategy, RouteCatalog, RouteCategory, RouteDescriptor, classify_path,
    detect_route_kind,
};
pub use composer::{Chrome, PortalRouter, RenderOutcome, SlotPhase, chrome_for};
pub use config::RouterConfig;
pub use loader::{Component, ComponentSource, ComponentState, LoadError, StaticComponentSource};
pub use models::{ActorRole, AuthPayload, Notification, NotificationKind, Session};
pub use navigate::{NavigateOptions, Navigator, NavigatorState};
pub use notify::{NotificationSink, NotifierState};
pub use session::{SessionProvider, SessionState, SharedSession};

/// RouterState
///
/// Implements the unified state pattern for the routing core: the single,
/// thread-safe container holding every external collaborator the composer and
/// guards depend on — session provider, component source, navigation
/// primitive, notification sink, and the immutable configuration.
///
/// Assembled once at the composition root and shared by cloning; the
/// evaluation functions themselves stay pure and take `Session` explicitly.
#[derive(Clone)]
pub struct RouterState {
    /// Read-only view of the current authentication state.
    pub session: SessionState,
    /// Deferred component resolution (the core's only suspension point).
    pub source: ComponentState,
    /// Outbound navigation primitive for redirect decisions.
    pub navigator: NavigatorState,
    /// Fire-and-forget user-facing message queue.
    pub notifier: NotifierState,
    /// Immutable route/redirect configuration.
    pub config: RouterConfig,
}

impl RouterState {
    /// role_guard
    ///
    /// Builds the effectful secondary evaluator for standalone protected
    /// views, wired to this state's session, sink, and navigator.
    pub fn role_guard(&self) -> RoleGuard {
        RoleGuard {
            session: self.session.clone(),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
            config: self.config.clone(),
        }
    }

    /// portal_router
    ///
    /// Assembles the full dealership router: the standard catalog compiled
    /// against this state.
    pub fn portal_router(&self) -> PortalRouter {
        let catalog = routes::full_catalog(&self.config);
        PortalRouter::new(&catalog, self.clone())
    }
}
