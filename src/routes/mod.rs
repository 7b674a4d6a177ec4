//! Route Catalog Index
//!
//! Organizes the static route table into access-segregated modules, so that
//! the classification applied to every path is explicit at the module level
//! and protected entries cannot be declared accidentally next to public ones.
//!
//! The three modules map directly to the portal's access areas; the root and
//! wildcard shell entries are owned by this index because they belong to no
//! area.

use crate::catalog::{ComponentRef, RouteCatalog, RouteDescriptor, classify_path};
use crate::config::RouterConfig;

/// Anonymous-accessible showroom and content pages.
pub mod public;

/// Customer self-service portal pages (login/signup plus protected views).
pub mod customer;

/// Admin back-office pages, restricted to back-office actors.
pub mod admin;

/// full_catalog
///
/// Assembles the complete dealership route table. Declaration order groups
/// entries by category: shell first, then public, customer, admin, and the
/// catch-all last. Every category is assigned through the static classifier
/// so the table and the classification rules cannot drift apart.
pub fn full_catalog(config: &RouterConfig) -> RouteCatalog {
    let mut descriptors = Vec::new();

    // Shell entries. The root page must be renderable before first paint.
    descriptors.push(entry("/", "pages/Home", config));

    descriptors.extend(public::public_descriptors(config));
    descriptors.extend(customer::customer_descriptors(config));
    descriptors.extend(admin::admin_descriptors(config));

    // The 404 catch-all matches only when nothing else does; the composer
    // relies on its Fallback classification to keep it last.
    descriptors.push(entry("*", "pages/NotFound", config));

    RouteCatalog::from_descriptors(descriptors)
}

/// entry
///
/// Shared descriptor constructor for all area modules: the category always
/// comes from `classify_path`, never hand-assigned.
pub(crate) fn entry(path: &str, module: &str, config: &RouterConfig) -> RouteDescriptor {
    RouteDescriptor::new(
        path,
        classify_path(path, config),
        ComponentRef::new(module),
    )
}
