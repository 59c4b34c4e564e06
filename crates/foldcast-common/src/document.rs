//! The raw PDB text artifact returned by the folding backend.

/// PDB-format text, exactly as the backend sent it.
///
/// Opaque until parsed; the pipeline never reformats it, so the same
/// bytes can be handed on to a viewer or written to disk unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbDocument(String);

impl PdbDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PdbDocument {
    fn from(text: String) -> Self {
        Self(text)
    }
}
