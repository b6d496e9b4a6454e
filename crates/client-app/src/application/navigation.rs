//! Navigation target computation
//!
//! `install-app` and `shut-down` are terminal for the current view: the
//! client computes a sibling path (final segment of the current location
//! replaced by the target resource) and performs a replace-style redirect.
//! Install resources arrive with a leading slash, shut-down resources
//! without; both normalize to the same sibling form.

/// Terminal redirect derived from a navigation fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDirective {
    /// Swap the current view for a sibling app resource
    InstallApp(String),
    /// Session over; leave for the screen's exit resource
    ShutDown,
}

/// Compute the redirect target for a directive.
///
/// `shutdown_resource` is the deployment-variant exit resource
/// (`logout` or `expire`), taken from the screen profile.
pub fn resolve_target(
    current_path: &str,
    directive: &NavigationDirective,
    shutdown_resource: &str,
) -> String {
    let resource = match directive {
        NavigationDirective::InstallApp(resource) => resource.as_str(),
        NavigationDirective::ShutDown => shutdown_resource,
    };
    let parent = current_path
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .unwrap_or("");
    format!("{}/{}", parent, resource.trim_start_matches('/'))
}
