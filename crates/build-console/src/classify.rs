//! Line classification for cargo output.
//!
//! Each captured line is matched against a small set of case-insensitive
//! substring rules and assigned a display category. Lines that match no rule
//! are not displayed at all, which keeps the console focused on test
//! outcomes and diagnostics rather than full build noise.

/// Display category for one line of build output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A passing test line
    Pass,
    /// A failing test, panic, or stack overflow
    Fail,
    /// A "test result:" summary line
    Summary,
    /// A compiler warning
    Warning,
    /// Displayed without styling (e.g. "running N tests")
    Plain,
}

/// Classify one line of cargo output.
///
/// Returns `None` for blank lines and for lines the console does not
/// display. Rule order matters: a "test result:" summary also contains the
/// word "test", so the summary rule runs first.
pub fn classify(line: &str) -> Option<LineClass> {
    if line.trim().is_empty() {
        return None;
    }

    let lower = line.to_lowercase();

    if lower.contains("test result:") {
        Some(LineClass::Summary)
    } else if lower.contains("test") && lower.contains("...") {
        if lower.contains("ok") {
            Some(LineClass::Pass)
        } else if lower.contains("failed") {
            Some(LineClass::Fail)
        } else {
            None
        }
    } else if lower.contains("running ") && lower.contains("tests") {
        Some(LineClass::Plain)
    } else if lower.contains("warning:") {
        Some(LineClass::Warning)
    } else if lower.contains("panicked at") {
        Some(LineClass::Fail)
    } else if lower.contains("stack overflow") {
        Some(LineClass::Fail)
    } else {
        None
    }
}
