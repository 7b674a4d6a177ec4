/// RouterConfig
///
/// Holds the routing core's entire configuration: namespace prefixes, the
/// canonical login/home paths for both authentication domains, and the
/// explicit auth-path lists used by the static classifier. Designed to be
/// immutable once constructed and shared freely across evaluations.
///
/// Unlike a server process, the browser-hosted core has no environment to
/// read from; configuration is plain data supplied at composition time.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// URL namespace for the customer self-service portal.
    pub customer_prefix: String,
    /// URL namespace for the admin back office.
    pub admin_prefix: String,

    /// Where an unauthenticated visitor to an admin-protected route is sent.
    pub admin_login_path: String,
    /// Where an unauthenticated visitor to a customer-protected route is sent.
    pub customer_login_path: String,

    /// Home area for an authenticated admin (wrong-role bounce target).
    pub admin_home_path: String,
    /// Home area for an authenticated customer (wrong-role bounce target).
    pub customer_home_path: String,

    /// Explicit list of customer paths that are auth pages (login/signup).
    /// Consulted by the static classifier; the ad-hoc detector instead does
    /// substring matching and ignores this list.
    pub customer_auth_paths: Vec<String>,
    /// Explicit list of admin paths that are auth pages (login).
    pub admin_auth_paths: Vec<String>,
}

impl Default for RouterConfig {
    /// default
    ///
    /// The production route map of the dealership portal. Also serves as the
    /// non-panicking configuration for unit and integration tests, in place
    /// of any environment-driven loading.
    fn default() -> Self {
        Self {
            customer_prefix: "/customer".to_string(),
            admin_prefix: "/admin".to_string(),
            admin_login_path: "/admin/login/super".to_string(),
            customer_login_path: "/customer/login".to_string(),
            admin_home_path: "/admin/dashboard".to_string(),
            customer_home_path: "/customer/dashboard".to_string(),
            customer_auth_paths: vec![
                "/customer/login".to_string(),
                "/customer/signup".to_string(),
            ],
            admin_auth_paths: vec!["/admin/login/super".to_string()],
        }
    }
}
