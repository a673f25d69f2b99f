// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.
//!
//! Placeholder resolution and environment overrides read variables through this
//! trait instead of the process environment directly, so tests can supply a
//! fixed set of variables.

/// Read-only access to environment variables.
///
/// # Examples
///
/// ```rust
/// use flatcfg::ports::Environment;
///
/// struct Fixed;
///
/// impl Environment for Fixed {
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "HOME").then(|| "/home/demo".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.non_empty_var("HOME").as_deref(), Some("/home/demo"));
/// assert_eq!(Fixed.non_empty_var("PATH"), None);
/// ```
pub trait Environment: Send + Sync {
    /// Returns the value of the variable, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value of the variable when it is set and not empty.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyValued;

    impl Environment for EmptyValued {
        fn var(&self, _name: &str) -> Option<String> {
            Some(String::new())
        }
    }

    #[test]
    fn test_empty_value_is_treated_as_unset() {
        assert_eq!(EmptyValued.var("X"), Some(String::new()));
        assert_eq!(EmptyValued.non_empty_var("X"), None);
    }

    #[test]
    fn test_environment_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Environment>();
    }
}
