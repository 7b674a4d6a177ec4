use chrono::Utc;
use dealer_portal::models::{AdminIdentity, CustomerIdentity};
use dealer_portal::{AccessDecision, AuthPayload, RouteCategory, RouterConfig, Session, evaluate};
use uuid::Uuid;

// --- Session Fixtures ---

fn anonymous_session() -> Session {
    Session::default()
}

fn admin_session() -> Session {
    Session {
        auth: AuthPayload::Admin(AdminIdentity {
            id: Uuid::new_v4(),
            email: "staff@dealership.example".to_string(),
            display_name: "Staff".to_string(),
            signed_in_at: Utc::now(),
        }),
        token: Some("admin-token".to_string()),
    }
}

fn customer_session() -> Session {
    Session {
        auth: AuthPayload::Customer(CustomerIdentity {
            id: Uuid::new_v4(),
            email: "rider@example.com".to_string(),
            full_name: "Test Rider".to_string(),
            signed_in_at: Utc::now(),
        }),
        token: Some("customer-token".to_string()),
    }
}

fn redirect(path: &str, preserve_origin: bool) -> AccessDecision {
    AccessDecision::RedirectTo {
        path: path.to_string(),
        preserve_origin,
    }
}

// --- Tests: ungated categories ---

#[test]
fn test_public_immediate_and_fallback_always_allow() {
    let config = RouterConfig::default();

    for session in [anonymous_session(), admin_session(), customer_session()] {
        for category in [
            RouteCategory::Public,
            RouteCategory::Immediate,
            RouteCategory::Fallback,
        ] {
            assert_eq!(
                evaluate(&session, category, "/finance", None, &config),
                AccessDecision::Allow
            );
        }
    }
}

#[test]
fn test_auth_pages_pass_through_regardless_of_session() {
    let config = RouterConfig::default();

    // An already-authenticated actor visiting a login page is allowed through
    // by this layer; any "skip login" redirect is the login page's concern.
    for session in [anonymous_session(), admin_session(), customer_session()] {
        assert_eq!(
            evaluate(&session, RouteCategory::AdminAuth, "/admin/login/super", None, &config),
            AccessDecision::Allow
        );
        assert_eq!(
            evaluate(&session, RouteCategory::CustomerAuth, "/customer/login", None, &config),
            AccessDecision::Allow
        );
    }
}

// --- Tests: unauthenticated redirects ---

#[test]
fn test_unauthenticated_admin_route_redirects_to_admin_login() {
    let config = RouterConfig::default();
    let decision = evaluate(
        &anonymous_session(),
        RouteCategory::AdminProtected,
        "/admin/bikes/add",
        None,
        &config,
    );
    assert_eq!(decision, redirect("/admin/login/super", true));
}

#[test]
fn test_unauthenticated_customer_route_redirects_to_customer_login() {
    let config = RouterConfig::default();
    let decision = evaluate(
        &anonymous_session(),
        RouteCategory::CustomerProtected,
        "/customer/orders",
        None,
        &config,
    );
    assert_eq!(decision, redirect("/customer/login", true));
}

#[test]
fn test_explicit_redirect_override_replaces_login_target_only() {
    let config = RouterConfig::default();

    let decision = evaluate(
        &anonymous_session(),
        RouteCategory::AdminProtected,
        "/admin/orders",
        Some("/admin/login"),
        &config,
    );
    assert_eq!(decision, redirect("/admin/login", true));

    // The override never touches the wrong-role bounce target.
    let decision = evaluate(
        &customer_session(),
        RouteCategory::AdminProtected,
        "/admin/orders",
        Some("/admin/login"),
        &config,
    );
    assert_eq!(decision, redirect("/customer/dashboard", false));
}

// --- Tests: role bounces (both directions) ---

#[test]
fn test_admin_visiting_customer_route_bounces_to_admin_home() {
    let config = RouterConfig::default();
    let decision = evaluate(
        &admin_session(),
        RouteCategory::CustomerProtected,
        "/customer/orders",
        None,
        &config,
    );
    assert_eq!(decision, redirect("/admin/dashboard", false));
}

#[test]
fn test_customer_visiting_admin_route_bounces_to_customer_home() {
    let config = RouterConfig::default();
    let decision = evaluate(
        &customer_session(),
        RouteCategory::AdminProtected,
        "/admin/dashboard",
        None,
        &config,
    );
    assert_eq!(decision, redirect("/customer/dashboard", false));
}

#[test]
fn test_matching_role_is_allowed() {
    let config = RouterConfig::default();

    assert_eq!(
        evaluate(&admin_session(), RouteCategory::AdminProtected, "/admin/bikes", None, &config),
        AccessDecision::Allow
    );
    assert_eq!(
        evaluate(
            &customer_session(),
            RouteCategory::CustomerProtected,
            "/customer/profile",
            None,
            &config
        ),
        AccessDecision::Allow
    );
}

// --- Tests: purity and idempotence ---

#[test]
fn test_evaluation_is_idempotent() {
    let config = RouterConfig::default();
    let session = customer_session();

    let first = evaluate(&session, RouteCategory::AdminProtected, "/admin/bikes", None, &config);
    let second = evaluate(&session, RouteCategory::AdminProtected, "/admin/bikes", None, &config);
    assert_eq!(first, second);
}

#[test]
fn test_evaluation_does_not_mutate_the_session() {
    let config = RouterConfig::default();
    let session = admin_session();
    let before = serde_json::to_value(&session).unwrap();

    let _ = evaluate(&session, RouteCategory::CustomerProtected, "/customer/orders", None, &config);
    let _ = evaluate(&session, RouteCategory::AdminProtected, "/admin/bikes", None, &config);

    let after = serde_json::to_value(&session).unwrap();
    assert_eq!(before, after);
}
