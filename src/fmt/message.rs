//! The facade's plain variants carry a list of loose values, the formatted
//! variants a bound format template. Both collapse to one payload type so
//! every sink applies the same format-or-join rule.

use std::fmt;

/// One log call's message payload, before any sink-specific framing.
///
/// Implements `Display` so sinks can stream it straight into a buffer or
/// stream without an intermediate allocation; [`render`](Self::render) is for
/// sinks that need an owned string (the remote backend takes the payload
/// without tag or timestamp).
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Values concatenated with no separator, the plain variants' rule.
    Joined(&'a [&'a dyn fmt::Display]),
    /// A format template with its arguments already bound via `format_args!`,
    /// the `..f` variants' rule. Placeholder/argument mismatches are compile
    /// errors, so no malformed rendering can reach a sink.
    Formatted(fmt::Arguments<'a>),
}

impl Message<'_> {
    /// Owned rendering for sinks that forward the payload as a single string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined(args) => {
                for arg in *args {
                    write!(f, "{arg}")?;
                }
                Ok(())
            }
            Self::Formatted(args) => f.write_fmt(*args),
        }
    }
}
