use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::RouterConfig;

// --- Category Taxonomy ---

/// RouteCategory
///
/// The access classification of a route. Category determines three things
/// downstream: which chrome the composer wraps around the page, whether an
/// access gate is inserted in front of it, and (by default) whether its
/// component resolves eagerly or lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RouteCategory {
    /// Must be renderable before first paint (root page, catch-all shell).
    Immediate,
    /// Anonymous-accessible catalog/content pages. No gate, public chrome.
    Public,
    /// Back-office pages. Gated on an authenticated admin actor.
    AdminProtected,
    /// Admin login pages. Never gated, rendered chrome-free.
    AdminAuth,
    /// Customer portal pages. Gated on an authenticated customer actor.
    CustomerProtected,
    /// Customer login/signup pages. Never gated, rendered chrome-free.
    CustomerAuth,
    /// The wildcard catch-all (404). Matched only when nothing else does.
    Fallback,
}

/// LoadStrategy
///
/// Whether a route's component is resolved at startup or on first navigation.
/// Carried as explicit data on every descriptor (rather than inferred from
/// category at composition time) so the policy is overridable per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LoadStrategy {
    Eager,
    Lazy,
}

impl LoadStrategy {
    /// for_category
    ///
    /// The default policy: `Immediate` entries must be available before
    /// first paint; everything else defers until first navigation.
    pub fn for_category(category: RouteCategory) -> Self {
        match category {
            RouteCategory::Immediate => LoadStrategy::Eager,
            _ => LoadStrategy::Lazy,
        }
    }
}

// --- Descriptors ---

/// ComponentRef
///
/// A deferred-loadable reference to a page component: the module specifier
/// the component source resolves (the dynamic-import path of the bundle
/// chunk, in SPA terms). Leaf data; resolution lives in `loader`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentRef {
    pub module: String,
}

impl ComponentRef {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

/// RouteDescriptor
///
/// A single static entry in the catalog: a URL pattern (may contain `:param`
/// segments), its access category, the component it renders, and its loading
/// strategy. Defined at configuration time and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteDescriptor {
    pub path: String,
    pub category: RouteCategory,
    pub component: ComponentRef,
    pub load: LoadStrategy,
}

impl RouteDescriptor {
    /// new
    ///
    /// Builds a descriptor with the default loading strategy for its
    /// category.
    pub fn new(
        path: impl Into<String>,
        category: RouteCategory,
        component: ComponentRef,
    ) -> Self {
        Self {
            path: path.into(),
            category,
            component,
            load: LoadStrategy::for_category(category),
        }
    }

    /// with_load
    ///
    /// Overrides the per-route loading strategy (e.g. preloading a heavily
    /// trafficked lazy page) without touching the composer's policy.
    pub fn with_load(mut self, load: LoadStrategy) -> Self {
        self.load = load;
        self
    }
}

/// RouteCatalog
///
/// The ordered, immutable set of every navigable path in the application.
/// Entries retain their declaration order (which is grouped by category by
/// the `routes` modules); the composer re-sorts them by match specificity
/// without disturbing the catalog itself.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    descriptors: Vec<RouteDescriptor>,
}

impl RouteCatalog {
    pub fn from_descriptors(descriptors: Vec<RouteDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.descriptors.iter()
    }

    /// by_category
    ///
    /// All descriptors carrying the given classification, in declaration
    /// order.
    pub fn by_category(
        &self,
        category: RouteCategory,
    ) -> impl Iterator<Item = &RouteDescriptor> {
        self.descriptors.iter().filter(move |d| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

// --- Classification ---
//
// Two classification functions coexist on purpose. `classify_path` is the
// canonical, list-based rule set used when the static route table is built:
// auth pages are recognized by exact membership in the configured auth-path
// lists, and the wildcard lands in its own `Fallback` bucket so the table can
// keep it last. `detect_route_kind` is the ad-hoc variant used for one-off
// type detection on arbitrary paths: it substring-matches "login"/"signup"
// anywhere in the path and special-cases both the root and the wildcard as
// `Immediate`. The two deliberately disagree on the wildcard and on auth
// paths that are not in the configured lists (e.g. "/customer/login-help");
// callers pick per use-case and must not assume the functions are
// interchangeable.

/// classify_path
///
/// Canonical classification, total over any path string. Used to build and
/// validate the static route table.
pub fn classify_path(path: &str, config: &RouterConfig) -> RouteCategory {
    if path == "/" {
        return RouteCategory::Immediate;
    }
    if path == "*" {
        return RouteCategory::Fallback;
    }
    if path.starts_with(&config.customer_prefix) {
        if config.customer_auth_paths.iter().any(|p| p == path) {
            return RouteCategory::CustomerAuth;
        }
        return RouteCategory::CustomerProtected;
    }
    if path.starts_with(&config.admin_prefix) {
        if config.admin_auth_paths.iter().any(|p| p == path) {
            return RouteCategory::AdminAuth;
        }
        return RouteCategory::AdminProtected;
    }
    // Anything unmatched is publicly renderable. This is a defined fallback,
    // not an error, but it means a typoed protected path silently becomes
    // public; the static table never relies on it for namespaced paths.
    RouteCategory::Public
}

/// detect_route_kind
///
/// Ad-hoc classification, total over any path string. Substring-based auth
/// detection; root and wildcard both report `Immediate` here.
pub fn detect_route_kind(path: &str, config: &RouterConfig) -> RouteCategory {
    if path == "/" || path == "*" {
        return RouteCategory::Immediate;
    }
    if path.starts_with(&config.customer_prefix) {
        if path.contains("login") || path.contains("signup") {
            return RouteCategory::CustomerAuth;
        }
        return RouteCategory::CustomerProtected;
    }
    if path.starts_with(&config.admin_prefix) {
        if path.contains("login") {
            return RouteCategory::AdminAuth;
        }
        return RouteCategory::AdminProtected;
    }
    RouteCategory::Public
}
