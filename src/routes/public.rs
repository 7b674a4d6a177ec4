use super::entry;
use crate::catalog::RouteDescriptor;
use crate::config::RouterConfig;

/// Public Route Module
///
/// Declares the anonymous-accessible showroom pages. These carry no gate and
/// render inside the public navigation chrome; their components resolve
/// lazily on first navigation.
///
/// Visibility of the underlying data (e.g. which vehicles are listed) is
/// enforced by the backend REST API, not by the router.
pub fn public_descriptors(config: &RouterConfig) -> Vec<RouteDescriptor> {
    vec![
        // Vehicle catalog listing with client-side filtering/sorting.
        entry("/vehicles", "pages/VehicleList", config),
        // Detail view for a single vehicle.
        entry("/vehicles/:id", "pages/VehicleDetail", config),
        // Financing calculator and offers.
        entry("/finance", "pages/Finance", config),
        entry("/about", "pages/About", config),
        entry("/contact", "pages/Contact", config),
    ]
}
