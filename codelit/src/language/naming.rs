//! Identifier rules for target languages.

/// Language-specific naming conventions.
///
/// Identifiers coming from runtime metadata (enum constants, method names,
/// type names) may collide with keywords of the target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}
