//! Signer identity resolution.

use std::sync::Arc;

/// Injectable lookup for the ambient process identity.
pub(crate) type EnvIdentity = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Read the ambient identity from `USER`, falling back to `USERNAME`.
pub(crate) fn env_identity() -> Option<String> {
    std::env::var("USER")
        .ok()
        .filter(|user| !user.is_empty())
        .or_else(|| std::env::var("USERNAME").ok().filter(|user| !user.is_empty()))
}

/// Pick the signer identity: explicit override, then configured identity,
/// then the ambient lookup, then `"unknown"`. Empty strings count as unset.
pub(crate) fn resolve_identity(
    explicit: Option<&str>,
    configured: Option<&str>,
    ambient: &EnvIdentity,
) -> String {
    explicit
        .filter(|identity| !identity.is_empty())
        .or(configured.filter(|identity| !identity.is_empty()))
        .map(str::to_string)
        .or_else(|| ambient())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambient(value: Option<&str>) -> EnvIdentity {
        let value = value.map(str::to_string);
        Arc::new(move || value.clone())
    }

    #[test]
    fn explicit_wins_over_everything() {
        let resolved = resolve_identity(Some("alice"), Some("config-user"), &ambient(Some("env")));
        assert_eq!(resolved, "alice");
    }

    #[test]
    fn configured_wins_over_ambient() {
        let resolved = resolve_identity(None, Some("config-user"), &ambient(Some("env")));
        assert_eq!(resolved, "config-user");
    }

    #[test]
    fn ambient_is_used_when_nothing_configured() {
        let resolved = resolve_identity(None, None, &ambient(Some("env-user")));
        assert_eq!(resolved, "env-user");
    }

    #[test]
    fn falls_back_to_unknown() {
        let resolved = resolve_identity(None, None, &ambient(None));
        assert_eq!(resolved, "unknown");
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let resolved = resolve_identity(Some(""), Some(""), &ambient(Some("env-user")));
        assert_eq!(resolved, "env-user");
    }
}
