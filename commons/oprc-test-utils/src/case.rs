use crate::env::EnvScope;

/// One row of a table-driven environment test.
///
/// `expected` is the outcome the accessor under test should produce; failures
/// are compared by kind (`E`), never by message.
#[derive(Debug, Clone)]
pub struct TestCase<T, E = ()> {
    pub name: &'static str,
    pub env: Vec<(&'static str, &'static str)>,
    pub given: &'static str,
    pub expected: Result<T, E>,
}

impl<T, E> TestCase<T, E> {
    pub fn ok(name: &'static str, given: &'static str, expected: T) -> Self {
        Self {
            name,
            env: Vec::new(),
            given,
            expected: Ok(expected),
        }
    }

    pub fn fails(name: &'static str, given: &'static str, kind: E) -> Self {
        Self {
            name,
            env: Vec::new(),
            given,
            expected: Err(kind),
        }
    }

    pub fn with_env(mut self, key: &'static str, val: &'static str) -> Self {
        self.env.push((key, val));
        self
    }

    /// Apply the case's variables for the lifetime of the returned scope.
    /// The key under test is unset first so nothing leaks in from earlier cases.
    pub fn populate(&self) -> EnvScope {
        EnvScope::new()
            .unset(self.given)
            .extend(self.env.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn populate_scopes_variables() {
        let case: TestCase<&str> = TestCase::ok("scoped", "OPRC_TEST_UTILS_CASE", "bar")
            .with_env("OPRC_TEST_UTILS_CASE", "bar");
        {
            let _scope = case.populate();
            assert_eq!(std::env::var("OPRC_TEST_UTILS_CASE").unwrap(), "bar");
        }
        assert!(std::env::var_os("OPRC_TEST_UTILS_CASE").is_none());
    }

    #[test]
    #[serial]
    fn populate_clears_key_under_test() {
        let _stale = crate::env::set_env_guarded("OPRC_TEST_UTILS_STALE", "old");
        let case: TestCase<(), &str> =
            TestCase::fails("unset", "OPRC_TEST_UTILS_STALE", "undefined");
        let _scope = case.populate();
        assert!(std::env::var_os("OPRC_TEST_UTILS_STALE").is_none());
        assert_eq!(case.expected, Err("undefined"));
    }
}
