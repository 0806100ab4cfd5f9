//! Home-directory shorthand expansion for paths.

use std::path::PathBuf;

/// Source of the current user's home directory.
///
/// The OS lookup sits behind this trait so tests can substitute a fixed
/// or failing home.
pub trait HomeDir {
    /// Resolve the home directory, or `None` if the user profile cannot
    /// be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Production provider resolving the home directory through the OS user
/// profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsHomeDir;

impl HomeDir for OsHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Expand a leading `~` in `path` to the current user's home directory.
///
/// Only `~` on its own or a `~/` prefix is expanded; a tilde anywhere
/// else, including `~user` forms, is left alone. Expansion is
/// best-effort: if the home directory cannot be resolved, the input is
/// returned unchanged rather than failing the caller.
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, &OsHomeDir)
}

/// Expand a leading `~` using the given home directory source.
pub fn expand_tilde_with<H: HomeDir>(path: &str, home: &H) -> String {
    if path != "~" && !path.starts_with("~/") {
        return path.to_string();
    }

    match home.home_dir() {
        Some(dir) => path.replacen('~', &dir.to_string_lossy(), 1),
        None => {
            tracing::warn!("could not resolve home directory, leaving {} unexpanded", path);
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHome(&'static str);

    impl HomeDir for FixedHome {
        fn home_dir(&self) -> Option<PathBuf> {
            Some(PathBuf::from(self.0))
        }
    }

    struct NoHome;

    impl HomeDir for NoHome {
        fn home_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_expand_without_tilde() {
        let home = FixedHome("/home/user");
        assert_eq!(expand_tilde_with("/this/is/a/path", &home), "/this/is/a/path");
    }

    #[test]
    fn test_expand_bare_tilde() {
        let home = FixedHome("/home/user");
        assert_eq!(expand_tilde_with("~", &home), "/home/user");
    }

    #[test]
    fn test_expand_tilde_prefix() {
        let home = FixedHome("/home/user");
        assert_eq!(expand_tilde_with("~/a/path", &home), "/home/user/a/path");
    }

    #[test]
    fn test_expand_tilde_not_first_char() {
        let home = FixedHome("/home/user");
        assert_eq!(expand_tilde_with("/something/~", &home), "/something/~");
    }

    #[test]
    fn test_expand_tilde_username_form_unchanged() {
        let home = FixedHome("/home/user");
        assert_eq!(expand_tilde_with("~other/a/path", &home), "~other/a/path");
    }

    #[test]
    fn test_expand_unresolvable_home_returns_input() {
        assert_eq!(expand_tilde_with("~/a/path", &NoHome), "~/a/path");
        assert_eq!(expand_tilde_with("~", &NoHome), "~");
    }

    #[test]
    fn test_expand_tilde_uses_os_home() {
        match dirs::home_dir() {
            Some(home) => assert_eq!(expand_tilde("~"), home.to_string_lossy()),
            None => assert_eq!(expand_tilde("~"), "~"),
        }
    }
}
