//! The [`CallSite`] location triple and the [`callsite!`](crate::callsite)
//! capture macro.

use std::fmt;
use std::panic::Location;

/// A function name plus the file and line it was invoked from.
///
/// Instrumented operations hand one of these to their diagnostic and trace
/// collaborators so that a report or trace entry can name the offending
/// call rather than a line inside the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Name of the function the entry describes.
    pub function: &'static str,
    /// Source file of the call.
    pub file: &'static str,
    /// Line within [`file`](CallSite::file).
    pub line: u32,
}

impl CallSite {
    /// Build a call site from its parts.
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Build a call site for `function` at the caller's location.
    ///
    /// Callers must be annotated `#[track_caller]` for the location to
    /// propagate past them; the chain bottoms out at the first frame
    /// without the attribute.
    #[track_caller]
    pub fn here(function: &'static str) -> Self {
        let loc = Location::caller();
        Self {
            function,
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, line: {}, file: {}",
            self.function, self.line, self.file
        )
    }
}

/// Capture a [`CallSite`] naming the enclosing function.
///
/// The function path is recovered from `std::any::type_name` on a local
/// item, so it includes the module path
/// (`my_crate::parser::parse_block`).
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = name_of(__here);
        let function = full.strip_suffix("::__here").unwrap_or(full);
        $crate::CallSite::new(function, ::std::file!(), ::std::line!())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_trace_line_shape() {
        let site = CallSite::new("bump_init", "src/alloc.rs", 41);
        assert_eq!(site.to_string(), "bump_init, line: 41, file: src/alloc.rs");
    }

    #[test]
    fn here_records_this_file() {
        let site = CallSite::here("op");
        assert_eq!(site.function, "op");
        assert!(site.file.ends_with("site.rs"));
        assert!(site.line > 0);
    }

    #[test]
    fn callsite_macro_names_enclosing_function() {
        fn named_helper() -> CallSite {
            crate::callsite!()
        }
        let site = named_helper();
        assert!(
            site.function.ends_with("named_helper"),
            "got {}",
            site.function
        );
        assert!(site.file.ends_with("site.rs"));
    }

    #[track_caller]
    fn tracked() -> CallSite {
        CallSite::here("tracked")
    }

    #[test]
    fn here_propagates_through_track_caller() {
        let before = line!();
        let site = tracked();
        assert_eq!(site.line, before + 1);
    }
}
