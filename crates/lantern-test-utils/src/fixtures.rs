//! Small fixtures for constructing test inputs.

use lantern_core::CallSite;

/// A call site for `function` at a fixed synthetic location.
pub fn site(function: &'static str) -> CallSite {
    CallSite::new(function, "tests/fixture.rs", 1)
}
