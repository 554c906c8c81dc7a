use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, without the quotes and escapes that
/// [`str`]'s Debug implementation adds. Used for placeholders such as an opaque closure.
pub struct DebugRaw(pub &'static str);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
