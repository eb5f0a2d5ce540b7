//! Deployment environment resolution from CI context.

/// Resolve the environment name from a CI base reference.
///
/// Returns the last `/`-separated segment, so `refs/heads/staging` resolves
/// to `staging`. An empty reference resolves to an empty name; the result is
/// not checked against any list of known environments.
pub fn resolve_environment(base_ref: &str) -> &str {
    base_ref.rsplit('/').next().unwrap_or_default()
}
