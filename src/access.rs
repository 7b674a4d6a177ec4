use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::RouteCategory;
use crate::config::RouterConfig;
use crate::models::{ActorRole, Notification, Session};
use crate::navigate::{NavigateOptions, NavigatorState};
use crate::notify::NotifierState;
use crate::session::SessionState;

// --- Decision Values ---

/// AccessDecision
///
/// The outcome of evaluating a route category against a session. Produced
/// fresh on every navigation and never persisted. Access denial is not an
/// error anywhere in this core; it is this ordinary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "decision")]
#[ts(export)]
pub enum AccessDecision {
    /// Render the route.
    Allow,
    /// Send the visitor elsewhere. When `preserve_origin` is set, the caller
    /// must attach the interrupted path as retrievable state on the
    /// navigation so the login flow can return the visitor afterwards.
    RedirectTo {
        path: String,
        preserve_origin: bool,
    },
}

// --- Pure Evaluator ---

/// evaluate
///
/// The access decision table. Pure: reads the session, touches nothing,
/// performs no I/O, and is idempotent over identical inputs.
///
/// Rules:
/// - `Public`, `Immediate`, `Fallback` and both auth-page categories always
///   pass. Auth pages are never gated here — an already-authenticated actor
///   visiting a login page is let through, and any "already logged in, skip
///   login" redirect belongs to the login page itself.
/// - The two protected categories gate on authentication first (redirect to
///   that area's login, carrying the origin path), then on role (plain
///   bounce to the actor's own home area, no origin memory).
///
/// `redirect_override` replaces only the unauthenticated login target; the
/// wrong-role bounce targets are fixed by configuration.
pub fn evaluate(
    session: &Session,
    category: RouteCategory,
    current_path: &str,
    redirect_override: Option<&str>,
    config: &RouterConfig,
) -> AccessDecision {
    let decision = match category {
        RouteCategory::Immediate
        | RouteCategory::Public
        | RouteCategory::AdminAuth
        | RouteCategory::CustomerAuth
        | RouteCategory::Fallback => AccessDecision::Allow,

        RouteCategory::AdminProtected => {
            if !session.is_authenticated() {
                AccessDecision::RedirectTo {
                    path: redirect_override
                        .unwrap_or(config.admin_login_path.as_str())
                        .to_string(),
                    preserve_origin: true,
                }
            } else if session.actor_role() != Some(ActorRole::Admin) {
                // Wrong-role bounce: silent, to the other area's home.
                AccessDecision::RedirectTo {
                    path: config.customer_home_path.clone(),
                    preserve_origin: false,
                }
            } else {
                AccessDecision::Allow
            }
        }

        RouteCategory::CustomerProtected => {
            if !session.is_authenticated() {
                AccessDecision::RedirectTo {
                    path: redirect_override
                        .unwrap_or(config.customer_login_path.as_str())
                        .to_string(),
                    preserve_origin: true,
                }
            } else if session.actor_role() != Some(ActorRole::Customer) {
                AccessDecision::RedirectTo {
                    path: config.admin_home_path.clone(),
                    preserve_origin: false,
                }
            } else {
                AccessDecision::Allow
            }
        }
    };

    tracing::debug!(
        path = %current_path,
        category = ?category,
        decision = ?decision,
        authenticated = session.is_authenticated(),
        "access evaluated"
    );

    decision
}

// --- Effectful Guard ---

/// RoleGuard
///
/// The secondary evaluator used by standalone protected views that live
/// outside the main router. Unlike `evaluate`, this one performs its effects:
/// it publishes a user-facing notification and invokes the navigation
/// primitive as part of its execution.
///
/// The policy itself is not re-derived here: the guard maps the required role
/// to the matching protected category and delegates to `evaluate`, layering
/// notify + navigate around the pure decision. One consequence of that
/// delegation is that a wrong-role actor bounces to their *own* home area,
/// consistent with the main router path.
pub struct RoleGuard {
    pub session: SessionState,
    pub notifier: NotifierState,
    pub navigator: NavigatorState,
    pub config: RouterConfig,
}

impl RoleGuard {
    /// require
    ///
    /// Enforces that the current session carries the required role. Returns
    /// true when the view may render. On denial it emits exactly one
    /// notification ("please login" for anonymous visitors, "no permission"
    /// for wrong-role actors) and issues exactly one replace-navigation,
    /// carrying `current_path` as origin state only for the login redirect.
    ///
    /// `login_override` replaces the default login target for views that
    /// want a specific entry point.
    pub fn require(
        &self,
        required: ActorRole,
        current_path: &str,
        login_override: Option<&str>,
    ) -> bool {
        let session = self.session.snapshot();
        let category = match required {
            ActorRole::Admin => RouteCategory::AdminProtected,
            ActorRole::Customer => RouteCategory::CustomerProtected,
        };

        match evaluate(&session, category, current_path, login_override, &self.config) {
            AccessDecision::Allow => true,
            AccessDecision::RedirectTo {
                path,
                preserve_origin,
            } => {
                let notification = if session.is_authenticated() {
                    Notification::error("You do not have permission to view this page")
                } else {
                    Notification::warning("Please login to continue")
                };
                self.notifier.publish(notification);

                self.navigator.navigate(
                    &path,
                    NavigateOptions {
                        replace: true,
                        origin: preserve_origin.then(|| current_path.to_string()),
                    },
                );
                false
            }
        }
    }
}
