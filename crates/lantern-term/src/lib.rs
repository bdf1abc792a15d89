//! ANSI-styled console output for the Lantern debug library.
//!
//! Styling is plain SGR escape output — no terminal detection, no
//! capability negotiation. Callers that need to stay plain pick the
//! unstyled path themselves (or a different [`DiagSink`](lantern_core::DiagSink)).
//!
//! ```
//! use lantern_term::{paint, Color, Mode, Style};
//!
//! let warn = Style::new().mode(Mode::Bold).fg(Color::Yellow);
//! println!("{}", paint("low on scratch space", warn));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod console;
pub mod print;
pub mod sink;
pub mod style;

pub use console::{console_width, rule, rule_labeled};
pub use sink::ConsoleSink;
pub use style::{paint, Bg, Color, Mode, Style, RESET};
