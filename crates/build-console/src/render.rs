//! Colorized rendering of classified output lines.
//!
//! Categories map onto ANSI styles (pass=green, fail=red, summary=bold,
//! warning=yellow). Styling is suppressed when stdout is not a terminal so
//! piped output stays clean.

use std::io::IsTerminal;

use crate::classify::LineClass;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders classified lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Renderer for the current stdout; color only when it is a tty.
    pub fn stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Renderer with styling forced on or off.
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn style(class: LineClass) -> Option<&'static str> {
        match class {
            LineClass::Pass => Some(GREEN),
            LineClass::Fail => Some(RED),
            LineClass::Summary => Some(BOLD),
            LineClass::Warning => Some(YELLOW),
            LineClass::Plain => None,
        }
    }

    /// Produce the display string for a classified line.
    pub fn render(&self, class: LineClass, line: &str) -> String {
        match Self::style(class) {
            Some(code) if self.color => format!("{code}{line}{RESET}"),
            _ => line.to_string(),
        }
    }

    /// Render and print one line.
    pub fn print(&self, class: LineClass, line: &str) {
        println!("{}", self.render(class, line));
    }
}
