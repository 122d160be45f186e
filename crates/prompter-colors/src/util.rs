/// Access to environment variables.
///
/// Implementors only look up variables. Values that are not valid Unicode
/// count as undefined.
pub(crate) trait Environment {
    /// Look up the variable's value.
    fn var(&self, key: &str) -> Option<String>;

    /// Determine whether the variable is defined.
    fn is_defined(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// Determine whether the variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.var(key).is_some_and(|value| !value.is_empty())
    }

    /// Determine whether the variable has the given value, ignoring ASCII
    /// case.
    fn has_value(&self, key: &str, expected: &str) -> bool {
        self.var(key)
            .is_some_and(|value| value.eq_ignore_ascii_case(expected))
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env;

impl Environment for Env {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    /// An environment with explicitly set variables.
    #[derive(Debug, Default)]
    pub(crate) struct FakeEnv {
        vars: HashMap<String, String>,
    }

    impl FakeEnv {
        pub(crate) fn with(mut self, key: &str, value: &str) -> Self {
            self.vars.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }
    }

    #[test]
    fn test_fake_env() {
        let env = FakeEnv::default().with("TERM", "XTERM").with("EMPTY", "");
        assert!(env.has_value("TERM", "xterm"));
        assert!(env.is_defined("EMPTY"));
        assert!(!env.is_non_empty("EMPTY"));
        assert!(!env.is_defined("COLORTERM"));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
