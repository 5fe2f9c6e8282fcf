/// Trim surrounding whitespace and lowercase. Inner whitespace is left alone.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// A query term normalized once up front, compared against many table fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(term: &str) -> Self {
        Needle(normalize(term))
    }

    pub fn matches(&self, field: &str) -> bool {
        // Fast path for fields that are already in normal form.
        field.trim() == self.0 || normalize(field) == self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
