//! Apps path resolution.
//!
//! Produces the two directories the host application loads extensions from:
//! the read-only built-in `apps` directory under the server root, and the
//! writable custom apps directory, which `NEXTCLOUD_PATH_CUSTOM_APPS` may
//! relocate outside the server root.

mod descriptor;
mod error;

pub use descriptor::{PathConfig, PathDescriptor};
pub use error::ResolveError;

use std::collections::HashMap;
use std::ffi::OsString;

/// Environment variable that overrides the custom apps directory.
pub const CUSTOM_APPS_ENV: &str = "NEXTCLOUD_PATH_CUSTOM_APPS";

pub const BUILTIN_APPS_URL: &str = "/apps";
pub const CUSTOM_APPS_URL: &str = "/custom_apps";

const BUILTIN_APPS_DIR: &str = "apps";
const CUSTOM_APPS_DIR: &str = "custom_apps";

/// Custom apps directory: the env override when set and non-empty, else
/// `<server_root>/custom_apps`.
pub fn custom_apps_path(server_root: &str, env: &HashMap<String, String>) -> String {
    match env.get(CUSTOM_APPS_ENV) {
        Some(dir) if !dir.is_empty() => {
            tracing::debug!("custom apps path from {}: {}", CUSTOM_APPS_ENV, dir);
            dir.clone()
        }
        _ => format!("{server_root}/{CUSTOM_APPS_DIR}"),
    }
}

/// Resolve the apps path configuration for `server_root`.
///
/// Paths are joined by plain concatenation; `server_root` is used as given.
/// Fails only when `server_root` is empty.
pub fn resolve(
    server_root: &str,
    env: &HashMap<String, String>,
) -> Result<PathConfig, ResolveError> {
    if server_root.is_empty() {
        return Err(ResolveError::InvalidInput(
            "server root must not be empty".to_string(),
        ));
    }

    let builtin = format!("{server_root}/{BUILTIN_APPS_DIR}");
    let custom = custom_apps_path(server_root, env);
    tracing::debug!(builtin = %builtin, custom = %custom, "resolved apps paths");

    Ok(PathConfig::new(builtin, custom))
}

/// [`resolve`] against the process environment.
///
/// Only `NEXTCLOUD_PATH_CUSTOM_APPS` is read. A value that is not valid
/// Unicode is rejected rather than ignored.
pub fn resolve_from_process_env(server_root: &str) -> Result<PathConfig, ResolveError> {
    let env = override_env(std::env::var_os(CUSTOM_APPS_ENV))?;
    resolve(server_root, &env)
}

fn override_env(raw: Option<OsString>) -> Result<HashMap<String, String>, ResolveError> {
    let mut env = HashMap::new();
    if let Some(raw) = raw {
        let dir = raw.into_string().map_err(|raw| {
            ResolveError::InvalidInput(format!(
                "{} is not valid UTF-8: {}",
                CUSTOM_APPS_ENV,
                raw.to_string_lossy()
            ))
        })?;
        env.insert(CUSTOM_APPS_ENV.to_string(), dir);
    }
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(value: &str) -> HashMap<String, String> {
        HashMap::from([(CUSTOM_APPS_ENV.to_string(), value.to_string())])
    }

    #[test]
    fn defaults_without_override() {
        let cfg = resolve("/srv/app", &HashMap::new()).unwrap();
        assert_eq!(cfg.builtin().path(), "/srv/app/apps");
        assert_eq!(cfg.builtin().url(), "/apps");
        assert!(!cfg.builtin().writable());
        assert_eq!(cfg.custom().path(), "/srv/app/custom_apps");
        assert_eq!(cfg.custom().url(), "/custom_apps");
        assert!(cfg.custom().writable());
    }

    #[test]
    fn override_replaces_custom_path() {
        let cfg = resolve("/srv/app", &env_with("/mnt/ext")).unwrap();
        assert_eq!(cfg.custom().path(), "/mnt/ext");
        assert_eq!(cfg.builtin().path(), "/srv/app/apps");
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let cfg = resolve("/var/www/html", &env_with("")).unwrap();
        assert_eq!(cfg.custom().path(), "/var/www/html/custom_apps");
    }

    #[test]
    fn zero_override_is_a_path() {
        let cfg = resolve("/srv/app", &env_with("0")).unwrap();
        assert_eq!(cfg.custom().path(), "0");
    }

    #[test]
    fn unrelated_vars_ignored() {
        let env = HashMap::from([
            ("NEXTCLOUD_PATH_APPS".to_string(), "/elsewhere".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ]);
        let cfg = resolve("/srv/app", &env).unwrap();
        assert_eq!(cfg.builtin().path(), "/srv/app/apps");
        assert_eq!(cfg.custom().path(), "/srv/app/custom_apps");
    }

    #[test]
    fn override_independent_of_server_root() {
        for root in ["/", "/a", "/srv/app/", "/opt/nextcloud"] {
            let cfg = resolve(root, &env_with("/data/apps")).unwrap();
            assert_eq!(cfg.custom().path(), "/data/apps", "root={root}");
        }
    }

    #[test]
    fn server_root_used_verbatim() {
        let cfg = resolve("/srv/app/", &HashMap::new()).unwrap();
        assert_eq!(cfg.builtin().path(), "/srv/app//apps");
        assert_eq!(cfg.custom().path(), "/srv/app//custom_apps");
    }

    #[test]
    fn invariants_hold_for_all_inputs() {
        let envs = [HashMap::new(), env_with(""), env_with("/mnt/ext")];
        for root in ["/", "/srv/app", "/var/www/html"] {
            for env in &envs {
                let cfg = resolve(root, env).unwrap();
                let writable: Vec<bool> = cfg.iter().map(|d| d.writable()).collect();
                let urls: Vec<&str> = cfg.iter().map(|d| d.url()).collect();
                assert_eq!(writable, vec![false, true]);
                assert_eq!(urls, vec!["/apps", "/custom_apps"]);
            }
        }
    }

    #[test]
    fn idempotent() {
        let env = env_with("/mnt/ext");
        assert_eq!(
            resolve("/srv/app", &env).unwrap(),
            resolve("/srv/app", &env).unwrap()
        );
    }

    #[test]
    fn empty_server_root_rejected() {
        let err = resolve("", &HashMap::new()).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput(_)));
    }

    #[test]
    fn custom_apps_path_alone() {
        assert_eq!(custom_apps_path("/x", &HashMap::new()), "/x/custom_apps");
        assert_eq!(custom_apps_path("/x", &env_with("/y")), "/y");
    }

    #[test]
    fn override_env_keeps_unicode_value() {
        let env = override_env(Some(OsString::from("/mnt/ext"))).unwrap();
        assert_eq!(env.get(CUSTOM_APPS_ENV).map(String::as_str), Some("/mnt/ext"));
        assert!(override_env(None).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn override_env_rejects_non_utf8_value() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/mnt/\xffext").to_os_string();
        match override_env(Some(raw)) {
            Err(ResolveError::InvalidInput(msg)) => assert!(msg.contains(CUSTOM_APPS_ENV)),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
