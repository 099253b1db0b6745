use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Whether a diagnostic stops the operation it was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// The location of an attribute within a schema, e.g. `metadata.name`. List elements and map
/// entries are addressed by their index or key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    pub fn root<S: Into<String>>(name: S) -> Self {
        Self(vec![name.into()])
    }

    pub fn attribute<S: Into<String>>(&self, name: S) -> Self {
        let mut steps = self.0.clone();
        steps.push(name.into());
        Self(steps)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A user-facing error or warning, shaped after Terraform's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributePath>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "{}: {}", severity, self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, "\n\n  with {}", attribute)?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// The diagnostics collected while handling one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn add_error<S1, S2>(&mut self, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Severity::Error, summary.into(), detail.into(), None);
    }

    pub fn add_attribute_error<S1, S2>(&mut self, path: AttributePath, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Severity::Error, summary.into(), detail.into(), Some(path));
    }

    pub fn add_warning<S1, S2>(&mut self, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Severity::Warning, summary.into(), detail.into(), None);
    }

    /// Moves all of `other`'s diagnostics into this collection.
    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(
        &mut self,
        severity: Severity,
        summary: String,
        detail: String,
        attribute: Option<AttributePath>,
    ) {
        self.0.push(Diagnostic {
            severity,
            summary,
            detail,
            attribute,
        })
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
