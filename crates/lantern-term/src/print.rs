//! Tagged and value-dump printing.
//!
//! [`pinfo!`](crate::pinfo) and [`perror!`](crate::perror) print a
//! colored tag, the message, and a dim location trailer naming the
//! macro's expansion site. [`pvar!`](crate::pvar) and friends print a
//! `name: value` pair with the name highlighted — one macro over
//! `Display` instead of a macro per scalar type.

use std::fmt;
use std::panic::Location;

use crate::style::{paint, Color, Mode, Style, RESET};

const TAG_INFO: Style = Style::new().fg(Color::Yellow);
const TAG_ERROR: Style = Style::new().fg(Color::Red);
const NAME: Style = Style::new().fg(Color::Cyan);
const LOCATION: Style = Style::new().mode(Mode::Italic).fg(Color::White);

/// Print an `[INFO]` line with a location trailer to stdout.
///
/// Prefer the [`pinfo!`](crate::pinfo) macro, which forwards format
/// arguments and captures the call location.
#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    println!("{}", render_tagged("[INFO] ", TAG_INFO, args, Location::caller()));
}

/// Print an `[ERROR]` line with a location trailer to stderr.
///
/// Prefer the [`perror!`](crate::perror) macro.
#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    eprintln!("{}", render_tagged("[ERROR] ", TAG_ERROR, args, Location::caller()));
}

/// Print `name: value` with the name highlighted.
///
/// Prefer the [`pvar!`](crate::pvar) macro.
pub fn var(name: &str, value: &dyn fmt::Display) {
    println!("{}: {value}", paint(name, NAME));
}

/// Like [`var`] but formats the value with `Debug`.
///
/// Prefer the [`pvar_dbg!`](crate::pvar_dbg) macro.
pub fn var_dbg(name: &str, value: &dyn fmt::Debug) {
    println!("{}: {value:?}", paint(name, NAME));
}

/// Print `name: <binary octets>`, most significant octet first.
///
/// Prefer the [`pbin!`](crate::pbin) macro, which derives `bits` from
/// the value's type.
pub fn bin(name: &str, value: u64, bits: usize) {
    println!("{}: {}", paint(name, NAME), octets(value, bits));
}

pub(crate) fn render_tagged(
    tag: &str,
    tag_style: Style,
    args: fmt::Arguments<'_>,
    loc: &Location<'_>,
) -> String {
    format!(
        "{}{args}\n{}",
        paint(tag, tag_style),
        location_trailer(loc)
    )
}

pub(crate) fn location_trailer(loc: &Location<'_>) -> String {
    format!(
        "{LOCATION} -> file: {}, line: {}{RESET}",
        loc.file(),
        loc.line()
    )
}

/// `value`'s low `bits` bits as dot-separated binary octets.
pub(crate) fn octets(value: u64, bits: usize) -> String {
    let count = (bits / 8).max(1);
    let mut out = String::with_capacity(count * 9);
    for i in (0..count).rev() {
        if !out.is_empty() {
            out.push('.');
        }
        let byte = (value >> (i * 8)) & 0xff;
        out.push_str(&format!("{byte:08b}"));
    }
    out
}

/// Print a yellow `[INFO]` tagged line with the call location.
///
/// ```
/// lantern_term::pinfo!("loaded {} assets", 3);
/// ```
#[macro_export]
macro_rules! pinfo {
    ($($arg:tt)*) => {
        $crate::print::info(::std::format_args!($($arg)*))
    };
}

/// Print a red `[ERROR]` tagged line with the call location to stderr.
///
/// ```
/// lantern_term::perror!("missing texture: {}", "grass.png");
/// ```
#[macro_export]
macro_rules! perror {
    ($($arg:tt)*) => {
        $crate::print::error(::std::format_args!($($arg)*))
    };
}

/// Print `name: value` for any `Display` expression, name in cyan.
///
/// ```
/// let frame_count = 128;
/// lantern_term::pvar!(frame_count);
/// ```
#[macro_export]
macro_rules! pvar {
    ($v:expr) => {
        $crate::print::var(::std::stringify!($v), &$v)
    };
}

/// Print `name: value` for any `Debug` expression, name in cyan.
#[macro_export]
macro_rules! pvar_dbg {
    ($v:expr) => {
        $crate::print::var_dbg(::std::stringify!($v), &$v)
    };
}

/// Print an unsigned integer as dot-separated binary octets.
///
/// ```
/// let flags: u16 = 0b0000_0001_1000_0000;
/// lantern_term::pbin!(flags);
/// ```
#[macro_export]
macro_rules! pbin {
    ($v:expr) => {
        $crate::print::bin(
            ::std::stringify!($v),
            ::std::convert::Into::into($v),
            ::std::mem::size_of_val(&$v) * 8,
        )
    };
}
