/// Shown in place of a name until the first confirmation.
pub const FALLBACK_NAME: &str = "unknown entity";

/// The name captured from the input field.
///
/// Starts absent. Every confirmation replaces it with the field's raw content,
/// so an empty string is a set value and does not fall back to
/// [`FALLBACK_NAME`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnteredName {
    value: Option<String>,
}

impl EnteredName {
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the stored name with `raw`, verbatim.
    pub fn confirm(&mut self, raw: String) {
        self.value = Some(raw);
    }

    pub fn display_name(&self) -> &str {
        self.value.as_deref().unwrap_or(FALLBACK_NAME)
    }

    pub fn greeting(&self) -> String {
        format!("Welcome {}", self.display_name())
    }
}
