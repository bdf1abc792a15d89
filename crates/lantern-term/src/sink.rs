//! The styled [`ConsoleSink`] diagnostic sink.

use lantern_core::{CallSite, DiagSink};

use crate::style::{paint, Color, Mode, Style, RESET};

const TAG: Style = Style::new().fg(Color::Red);
const LOCATION: Style = Style::new().mode(Mode::Italic).fg(Color::White);

/// A [`DiagSink`] that prints each report as a styled `[ERROR]` line to
/// stderr, with the reporting call site on a dim trailer line.
///
/// Printing is the whole policy: the sink never aborts, and the
/// instrumented component still returns its typed error.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagSink for ConsoleSink {
    fn report(&mut self, message: &str, site: CallSite) {
        eprintln!("{}", render_report(message, site));
    }
}

pub(crate) fn render_report(message: &str, site: CallSite) -> String {
    format!(
        "{}{message}\n{LOCATION} -> {site}{RESET}",
        paint("[ERROR] ", TAG)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_test_utils::site;

    #[test]
    fn report_lines_carry_tag_message_and_site() {
        let text = render_report("arena ran out of memory", site("alloc"));
        assert!(text.contains("[ERROR] "));
        assert!(text.contains("arena ran out of memory"));
        assert!(text.contains("alloc, line: 1, file: tests/fixture.rs"));
        assert!(text.starts_with("\x1b[0;31m"));
        assert!(text.ends_with(RESET));
    }
}
