//! Validated, deduplicated sets of CSS class tokens.

use std::collections::BTreeSet;
use std::fmt;

/// Returned when one or more class-name candidates are empty or contain whitespace.
///
/// Carries every offending candidate, in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNameError {
    invalid: Vec<String>,
}

impl ClassNameError {
    /// The rejected candidates.
    pub fn invalid_names(&self) -> &[String] {
        &self.invalid
    }
}

impl fmt::Display for ClassNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.invalid.len() == 1 { "" } else { "s" };
        write!(f, "invalid class name{plural}: ")?;
        for (index, name) in self.invalid.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name:?}")?;
        }
        write!(f, " (class names must be non-empty and contain no whitespace)")
    }
}

impl std::error::Error for ClassNameError {}

fn is_valid_class_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// An immutable set of class tokens.
///
/// Iteration is lexicographic, so the joined `class` attribute value is
/// deterministic regardless of the order the names were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassSet {
    names: BTreeSet<String>,
}

impl ClassSet {
    /// A set holding exactly one class.
    pub fn singleton(name: impl Into<String>) -> Result<Self, ClassNameError> {
        let name = name.into();
        if !is_valid_class_name(&name) {
            return Err(ClassNameError {
                invalid: vec![name],
            });
        }
        Ok(Self {
            names: BTreeSet::from([name]),
        })
    }

    /// Builds a set from a list of names, collapsing duplicates.
    ///
    /// Fails if any name is empty or contains whitespace; the error lists all of them.
    pub fn from_list<I, S>(names: I) -> Result<Self, ClassNameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut valid = BTreeSet::new();
        let mut invalid = Vec::new();
        for name in names {
            let name = name.into();
            if is_valid_class_name(&name) {
                valid.insert(name);
            } else {
                invalid.push(name);
            }
        }
        if invalid.is_empty() {
            Ok(Self { names: valid })
        } else {
            Err(ClassNameError { invalid })
        }
    }

    /// Tokens in lexicographic order.
    pub fn to_ordered_list(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// The space-joined form used as the `class` attribute value.
    pub fn joined(&self) -> String {
        self.to_ordered_list().join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Tokens present in either set.
    pub fn union(&self, other: &ClassSet) -> ClassSet {
        ClassSet {
            names: self.names.union(&other.names).cloned().collect(),
        }
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
