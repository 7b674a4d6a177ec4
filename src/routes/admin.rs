use super::entry;
use crate::catalog::RouteDescriptor;
use crate::config::RouterConfig;

/// Admin Route Module
///
/// Declares the back-office area. Only the super-admin login path is an auth
/// page; everything else under the admin namespace classifies as
/// `AdminProtected`, which means the composer inserts the access gate in
/// front of it and wraps it in the admin chrome.
///
/// Access control for these routes is evaluated before the page component is
/// ever fetched, so an unauthenticated visitor can never observe protected
/// content, not even a flash of it.
pub fn admin_descriptors(config: &RouterConfig) -> Vec<RouteDescriptor> {
    vec![
        // Auth page, rendered chrome-free.
        entry("/admin/login/super", "pages/admin/Login", config),
        // Protected back-office views.
        entry("/admin/dashboard", "pages/admin/Dashboard", config),
        entry("/admin/bikes", "pages/admin/BikeList", config),
        entry("/admin/bikes/add", "pages/admin/BikeAdd", config),
        entry("/admin/bikes/:id/edit", "pages/admin/BikeEdit", config),
        entry("/admin/orders", "pages/admin/Orders", config),
        entry("/admin/customers", "pages/admin/Customers", config),
    ]
}
