//! Output styling hook. The library only ships the plain theme; the binary
//! supplies a terminal theme when stdout is a TTY.

/// What a message is, so a theme can decide how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Startup banner.
    Banner,
    /// Menu headings.
    Heading,
    /// Confirmations.
    Success,
    /// Rejections and denials.
    Warning,
}

/// Paints message text for a given tone.
pub trait Theme {
    /// Return `text` decorated for `tone`.
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}
