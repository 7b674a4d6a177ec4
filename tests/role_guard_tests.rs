use std::sync::Arc;

use chrono::Utc;
use dealer_portal::models::{AdminIdentity, CustomerIdentity, NotificationKind};
use dealer_portal::navigate::RecordingNavigator;
use dealer_portal::notify::RecordingSink;
use dealer_portal::{ActorRole, RoleGuard, RouterConfig, SharedSession};
use uuid::Uuid;

// --- Guard Fixtures ---

struct GuardHarness {
    guard: RoleGuard,
    sink: RecordingSink,
    navigator: RecordingNavigator,
    session: SharedSession,
}

fn make_harness() -> GuardHarness {
    let session = SharedSession::new();
    let sink = RecordingSink::new();
    let navigator = RecordingNavigator::new();

    let guard = RoleGuard {
        session: Arc::new(session.clone()),
        notifier: Arc::new(sink.clone()),
        navigator: Arc::new(navigator.clone()),
        config: RouterConfig::default(),
    };

    GuardHarness {
        guard,
        sink,
        navigator,
        session,
    }
}

fn login_admin(session: &SharedSession) {
    session.login_admin(
        AdminIdentity {
            id: Uuid::new_v4(),
            email: "staff@dealership.example".to_string(),
            display_name: "Staff".to_string(),
            signed_in_at: Utc::now(),
        },
        "admin-token",
    );
}

fn login_customer(session: &SharedSession) {
    session.login_customer(
        CustomerIdentity {
            id: Uuid::new_v4(),
            email: "rider@example.com".to_string(),
            full_name: "Test Rider".to_string(),
            signed_in_at: Utc::now(),
        },
        "customer-token",
    );
}

// --- Tests ---

#[test]
fn test_anonymous_visitor_is_sent_to_login_with_notification() {
    let harness = make_harness();

    let allowed = harness
        .guard
        .require(ActorRole::Admin, "/admin/bikes/add", None);
    assert!(!allowed);

    // Exactly one "please login" warning.
    let published = harness.sink.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].kind, NotificationKind::Warning);
    assert_eq!(published[0].message, "Please login to continue");

    // Exactly one replace-navigation carrying the origin path.
    let navigations = harness.navigator.navigations();
    assert_eq!(navigations.len(), 1);
    let (to, options) = &navigations[0];
    assert_eq!(to, "/admin/login/super");
    assert!(options.replace);
    assert_eq!(options.origin.as_deref(), Some("/admin/bikes/add"));
}

#[test]
fn test_wrong_role_is_bounced_home_with_no_permission_notification() {
    let harness = make_harness();
    login_customer(&harness.session);

    let allowed = harness
        .guard
        .require(ActorRole::Admin, "/admin/dashboard", None);
    assert!(!allowed);

    let published = harness.sink.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].kind, NotificationKind::Error);
    assert_eq!(
        published[0].message,
        "You do not have permission to view this page"
    );

    // Role bounces carry no origin memory.
    let navigations = harness.navigator.navigations();
    assert_eq!(navigations.len(), 1);
    let (to, options) = &navigations[0];
    assert_eq!(to, "/customer/dashboard");
    assert_eq!(options.origin, None);
}

#[test]
fn test_matching_role_passes_silently() {
    let harness = make_harness();
    login_admin(&harness.session);

    let allowed = harness
        .guard
        .require(ActorRole::Admin, "/admin/dashboard", None);
    assert!(allowed);

    // Allowed decisions produce no effects at all.
    assert!(harness.sink.published().is_empty());
    assert!(harness.navigator.navigations().is_empty());
}

#[test]
fn test_login_override_replaces_the_default_target() {
    let harness = make_harness();

    let allowed = harness
        .guard
        .require(ActorRole::Customer, "/customer/test-rides", Some("/customer/signup"));
    assert!(!allowed);

    let navigations = harness.navigator.navigations();
    assert_eq!(navigations.len(), 1);
    assert_eq!(navigations[0].0, "/customer/signup");
    assert_eq!(
        navigations[0].1.origin.as_deref(),
        Some("/customer/test-rides")
    );
}

#[test]
fn test_guard_effects_are_at_most_once_per_decision() {
    let harness = make_harness();

    // Two separate decisions produce two effects, never more.
    let _ = harness.guard.require(ActorRole::Admin, "/admin/orders", None);
    let _ = harness.guard.require(ActorRole::Admin, "/admin/bikes", None);

    assert_eq!(harness.sink.published().len(), 2);
    assert_eq!(harness.navigator.navigations().len(), 2);
}

#[test]
fn test_guard_follows_the_session_lifecycle() {
    let harness = make_harness();

    assert!(!harness.guard.require(ActorRole::Customer, "/customer/orders", None));

    login_customer(&harness.session);
    assert!(harness.guard.require(ActorRole::Customer, "/customer/orders", None));

    harness.session.logout();
    assert!(!harness.guard.require(ActorRole::Customer, "/customer/orders", None));
}
