use super::entry;
use crate::catalog::RouteDescriptor;
use crate::config::RouterConfig;

/// Customer Route Module
///
/// Declares the customer self-service portal. The login and signup paths sit
/// in the configured auth-path list, so the static classifier files them as
/// `CustomerAuth` (ungated, chrome-free); every other path under the customer
/// namespace classifies as `CustomerProtected` and gets the access gate plus
/// customer chrome.
pub fn customer_descriptors(config: &RouterConfig) -> Vec<RouteDescriptor> {
    vec![
        // Auth pages. An already-authenticated customer is still let through
        // here; any "skip login" redirect is the login page's own concern.
        entry("/customer/login", "pages/customer/Login", config),
        entry("/customer/signup", "pages/customer/Signup", config),
        // Protected portal views.
        entry("/customer/dashboard", "pages/customer/Dashboard", config),
        entry("/customer/orders", "pages/customer/Orders", config),
        entry("/customer/orders/:id", "pages/customer/OrderDetail", config),
        entry("/customer/profile", "pages/customer/Profile", config),
        entry("/customer/test-rides", "pages/customer/TestRides", config),
    ]
}
