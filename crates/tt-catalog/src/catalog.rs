//! `SubjectCatalog` — which subjects each class sits.

use std::collections::BTreeMap;

/// Class label → ordered list of subject names.
///
/// Names are trimmed, blanks are dropped, and repeated names keep only their
/// first occurrence, so every list is ready to hand to the generator as-is.
/// Classes iterate in sorted label order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectCatalog {
    classes: BTreeMap<String, Vec<String>>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject list for `class`, replacing any earlier list.
    pub fn insert<I, S>(&mut self, class: &str, subjects: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for s in subjects {
            let name = s.as_ref().trim();
            if !name.is_empty() && !list.iter().any(|existing| existing == name) {
                list.push(name.to_owned());
            }
        }
        self.classes.insert(class.trim().to_owned(), list);
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_class<I, S>(mut self, class: &str, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(class, subjects);
        self
    }

    /// Subjects for `class`, or `None` if the class is unknown.
    pub fn subjects(&self, class: &str) -> Option<&[String]> {
        self.classes.get(class.trim()).map(Vec::as_slice)
    }

    /// Class labels in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
