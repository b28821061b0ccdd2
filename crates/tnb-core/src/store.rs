//! In-memory notes registry.
//!
//! Categories keep the order in which they were first created; notes inside a
//! category keep insertion order, which is what the 1-based display index
//! refers to.

use serde::{Deserialize, Serialize};

/// Category used when `/add` gets a note without an explicit category.
pub const FALLBACK_CATEGORY: &str = "Без категории";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Category name → ordered note texts.
///
/// A category that was emptied by `delete` stays registered with an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStore {
    #[serde(default)]
    categories: Vec<Category>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Append `text` to `category`, creating the category on first use.
    pub fn add(&mut self, category: &str, text: String) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(c) => c.notes.push(text),
            None => self.categories.push(Category {
                name: category.to_string(),
                notes: vec![text],
            }),
        }
    }

    /// Remove the note at zero-based `index`; later notes shift down by one.
    pub fn delete(&mut self, category: &str, index: usize) -> Option<String> {
        let c = self.categories.iter_mut().find(|c| c.name == category)?;
        if index >= c.notes.len() {
            return None;
        }
        Some(c.notes.remove(index))
    }

    pub fn notes(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.notes.as_slice())
    }

    /// Categories in creation order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Fold duplicate category entries (possible in a hand-edited snapshot)
    /// into the first occurrence.
    pub(crate) fn normalize(self) -> Self {
        let mut out = NoteStore::new();
        for c in self.categories {
            match out.categories.iter_mut().find(|x| x.name == c.name) {
                Some(existing) => existing.notes.extend(c.notes),
                None => out.categories.push(c),
            }
        }
        out
    }
}
