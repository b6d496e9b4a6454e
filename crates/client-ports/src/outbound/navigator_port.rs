//! Navigator Port - outbound port for terminal redirects
//!
//! `install-app` and `shut-down` facts end the current session view with a
//! replace-style redirect (no history entry, so back-navigation cannot
//! return to the stale session). What "redirect" means is up to the
//! adapter: a browser shell replaces the location, the terminal runner
//! swaps screens or exits.

pub trait NavigatorPort: Send + Sync {
    /// Path of the current session view, used as the base for sibling
    /// target computation.
    fn current_path(&self) -> String;

    /// Replace the current location with `path`. Terminal for this view.
    fn replace(&self, path: &str);
}
