//! libtest-mimic integration.
//!
//! Maps a [`TestRegistry`](crate::TestRegistry) onto `libtest-mimic`
//! trials: one trial per registered name, pass/fail reported per name, and
//! a nonzero process exit if any trial fails. Assertion panics inside a
//! procedure are caught and rendered by libtest-mimic; unknown-name
//! dispatch never reaches this layer because trials are built from the
//! registry's own enumeration.

use libtest_mimic::{Arguments, Conclusion, Trial};

use crate::TestRegistry;

/// Build one trial per registered test.
pub fn trials(registry: &TestRegistry) -> Vec<Trial> {
    registry
        .tests()
        .map(|(name, func)| {
            Trial::test(name.to_owned(), move || {
                func();
                Ok(())
            })
        })
        .collect()
}

/// Run every registered test under the given arguments.
pub fn run(registry: &TestRegistry, args: &Arguments) -> Conclusion {
    libtest_mimic::run(args, trials(registry))
}

/// Run with arguments parsed from the process command line.
pub fn run_cli(registry: &TestRegistry) -> Conclusion {
    run(registry, &Arguments::from_args())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() {}

    fn failing() {
        panic!("boom");
    }

    #[test]
    fn one_trial_per_registered_test() {
        let mut registry = TestRegistry::new();
        registry.register("a", passing);
        registry.register("b", failing);

        let trials = trials(&registry);
        assert_eq!(trials.len(), 2);
        assert_eq!(trials[0].name(), "a");
        assert_eq!(trials[1].name(), "b");
    }
}
