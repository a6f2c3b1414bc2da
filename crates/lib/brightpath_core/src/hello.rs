//! Service greeting used by the health endpoint.

/// Returns a greeting string with the crate version.
pub fn greeting() -> String {
    format!("Hello from brightpath_core v{}", super::version())
}
