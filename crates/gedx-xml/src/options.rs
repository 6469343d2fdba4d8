/// Writer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level. `0` writes everything on one line.
    pub indent: usize,
    /// Whether `ChangeInfo.objectType` is written. The object type is
    /// treated as transient by some producers; leaving it out is the
    /// caller's choice and does not affect reading.
    pub emit_object_type: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            emit_object_type: true,
        }
    }
}

impl XmlOptions {
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            indent: 0,
            emit_object_type: true,
        }
    }
}
