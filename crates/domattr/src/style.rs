//! Inline style input.
//!
//! The CSS value model lives outside this crate; all the attribute layer needs
//! from it is an ordered list of `(property, value)` string pairs.

use std::fmt;

use indexmap::IndexMap;

/// Anything that can produce inline style declarations.
pub trait StyleModel {
    /// Declarations in the order they should be written.
    fn declarations(&self) -> Vec<(String, String)>;
}

/// A minimal ordered declaration list.
///
/// Setting a property twice keeps its first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Css {
    declarations: IndexMap<String, String>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut css = Css::new();
        for (property, value) in pairs {
            css.set(property, value);
        }
        css
    }

    /// Snapshot of another style model.
    pub fn from_model(model: &dyn StyleModel) -> Self {
        Self::from_pairs(model.declarations())
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.insert(property.into(), value.into());
    }

    /// Builder form of [`Css::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl StyleModel for Css {
    fn declarations(&self) -> Vec<(String, String)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.clone(), value.clone()))
            .collect()
    }
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
