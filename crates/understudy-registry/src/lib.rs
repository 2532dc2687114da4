#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod runner;

use std::collections::HashMap;

use tracing::debug;

#[doc(hidden)]
pub use inventory;

/// A test declared through [`harness_test!`], collected at startup.
pub struct RegisteredTest {
    /// The test's unique name.
    pub name: &'static str,
    /// The test procedure itself.
    pub func: fn(),
}

inventory::collect!(RegisteredTest);

/// Declare a test procedure and submit it for discovery.
///
/// ```
/// fn cache_starts_empty() {
///     // assertions
/// }
/// understudy_registry::harness_test!(cache_starts_empty);
///
/// let registry = understudy_registry::TestRegistry::discover();
/// assert!(registry.list().contains(&"cache_starts_empty"));
/// ```
#[macro_export]
macro_rules! harness_test {
    ($func:ident) => {
        $crate::inventory::submit! {
            $crate::RegisteredTest {
                name: stringify!($func),
                func: $func,
            }
        }
    };
}

/// Error type for test dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `run` was invoked with a name absent from the registry. Distinct
    /// from a failed assertion, which propagates as a panic.
    UnknownTest(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownTest(name) => write!(f, "unknown test '{}'", name),
        }
    }
}

impl std::error::Error for RegistryError {}

struct TestEntry {
    name: String,
    func: fn(),
}

/// Mapping from test name to test procedure.
///
/// Enumeration order is registration order; dispatch is by exact name only.
#[derive(Default)]
pub struct TestRegistry {
    tests: Vec<TestEntry>,
    index: HashMap<String, usize>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every [`harness_test!`] declaration linked
    /// into the binary.
    ///
    /// Collection order is link-dependent, so entries are sorted by name to
    /// keep enumeration deterministic for discovery tooling.
    pub fn discover() -> Self {
        let mut collected: Vec<&RegisteredTest> =
            inventory::iter::<RegisteredTest>.into_iter().collect();
        collected.sort_by_key(|test| test.name);

        let mut registry = Self::new();
        for test in collected {
            registry.register(test.name, test.func);
        }
        registry
    }

    /// Build a registry from a fixed declaration list, keeping its order.
    pub fn from_static(tests: &[(&str, fn())]) -> Self {
        let mut registry = Self::new();
        for (name, func) in tests {
            registry.register(*name, *func);
        }
        registry
    }

    /// Add a named test. Registering a duplicate name rebinds the
    /// procedure (last registration wins) while the name keeps its original
    /// position in [`list`](TestRegistry::list).
    pub fn register(&mut self, name: impl Into<String>, func: fn()) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.tests[idx].func = func,
            None => {
                self.index.insert(name.clone(), self.tests.len());
                self.tests.push(TestEntry { name, func });
            }
        }
    }

    /// Invoke the named test synchronously to completion.
    ///
    /// Unknown names fail with [`RegistryError::UnknownTest`]; assertion
    /// failures raised inside the procedure propagate to the caller
    /// unchanged.
    pub fn run(&self, name: &str) -> Result<(), RegistryError> {
        let &idx = self
            .index
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTest(name.to_owned()))?;
        debug!(name, "running test");
        (self.tests[idx].func)();
        Ok(())
    }

    /// All known test names, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.tests.iter().map(|test| test.name.as_str()).collect()
    }

    /// Name/procedure pairs, in registration order.
    pub fn tests(&self) -> impl Iterator<Item = (&str, fn())> {
        self.tests.iter().map(|test| (test.name.as_str(), test.func))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RUNS: AtomicUsize = AtomicUsize::new(0);

    fn bump() {
        RUNS.fetch_add(1, Ordering::SeqCst);
    }

    fn noop() {}

    fn failing() {
        panic!("expected 200, got 500");
    }

    #[test]
    fn unknown_test_is_a_typed_error() {
        let registry = TestRegistry::new();
        assert_eq!(
            registry.run("missing").err(),
            Some(RegistryError::UnknownTest("missing".to_owned()))
        );
        assert!(!registry.list().contains(&"missing"));
    }

    #[test]
    fn list_is_registration_order() {
        let mut registry = TestRegistry::new();
        registry.register("charlie", noop);
        registry.register("alpha", noop);
        registry.register("bravo", noop);

        assert_eq!(registry.list(), vec!["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn duplicate_registration_rebinds_in_place() {
        let mut registry = TestRegistry::new();
        registry.register("first", noop);
        registry.register("counted", noop);
        registry.register("counted", bump);

        let before = RUNS.load(Ordering::SeqCst);
        registry.run("counted").unwrap();
        assert_eq!(RUNS.load(Ordering::SeqCst), before + 1);

        // Position of the first registration is retained.
        assert_eq!(registry.list(), vec!["first", "counted"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn run_invokes_the_procedure() {
        let mut registry = TestRegistry::new();
        registry.register("bump", bump);

        let before = RUNS.load(Ordering::SeqCst);
        registry.run("bump").unwrap();
        registry.run("bump").unwrap();
        assert_eq!(RUNS.load(Ordering::SeqCst), before + 2);
    }

    #[test]
    fn assertion_failures_propagate_unchanged() {
        let mut registry = TestRegistry::new();
        registry.register("failing", failing);

        let panic = std::panic::catch_unwind(|| registry.run("failing")).unwrap_err();
        let message = panic.downcast_ref::<&str>().copied().unwrap_or_default();
        assert_eq!(message, "expected 200, got 500");
    }

    #[test]
    fn from_static_keeps_declaration_order() {
        let registry = TestRegistry::from_static(&[("b", noop), ("a", noop)]);
        assert_eq!(registry.list(), vec!["b", "a"]);
        assert!(registry.contains("a"));
    }

    fn discovered_one() {}
    fn discovered_two() {}

    harness_test!(discovered_two);
    harness_test!(discovered_one);

    #[test]
    fn discover_collects_sorted_by_name() {
        let registry = TestRegistry::discover();
        let names = registry.list();
        let one = names.iter().position(|n| *n == "discovered_one");
        let two = names.iter().position(|n| *n == "discovered_two");
        assert!(one.is_some() && two.is_some());
        assert!(one < two);
    }
}
