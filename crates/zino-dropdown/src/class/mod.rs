//! CSS classes for components.

use crate::SharedString;
use dioxus_core::{AttributeValue, prelude::*};
use smallvec::SmallVec;
use std::fmt;

/// A list of CSS classes which can be merged with caller-supplied classes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[SharedString; 4]>,
}

impl Class {
    /// Creates a new instance from a whitespace-separated class list.
    #[inline]
    pub fn new(class: impl Into<SharedString>) -> Self {
        let mut classes = Self::default();
        classes.extend(class);
        classes
    }

    /// Adds a class to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: impl Into<SharedString>) {
        let class = class.into();
        if !(class.is_empty() || self.contains(&class)) {
            self.classes.push(class);
        }
    }

    /// Adds each class in a whitespace-separated class list.
    pub fn extend(&mut self, class: impl Into<SharedString>) {
        match class.into() {
            SharedString::Borrowed(class) => {
                for class in class.split_whitespace() {
                    self.add(class);
                }
            }
            SharedString::Owned(class) => {
                for class in class.split_whitespace() {
                    self.add(class.to_owned());
                }
            }
        }
    }

    /// Returns a new instance with the classes of `other` appended to `self`.
    #[must_use]
    pub fn merge(&self, other: &Class) -> Self {
        let mut merged = self.clone();
        for class in other.classes.iter() {
            merged.add(class.clone());
        }
        merged
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| **s != *class)
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|s| &**s == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a `SharedString`.
    pub fn format(&self) -> SharedString {
        match self.classes.as_slice() {
            [] => SharedString::Borrowed(""),
            [class] => class.clone(),
            classes => classes.join(" ").into(),
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl From<String> for Class {
    #[inline]
    fn from(class: String) -> Self {
        Self::new(class)
    }
}

impl From<SharedString> for Class {
    #[inline]
    fn from(class: SharedString) -> Self {
        Self::new(class)
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(classes: [&'static str; N]) -> Self {
        let mut class = Self::default();
        for s in classes {
            class.extend(s);
        }
        class
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn it_merges_classes() {
        let base = Class::new("dropdown");
        let merged = base.merge(&Class::new("mh3  dropdown is-dark"));
        assert_eq!(merged.format(), "dropdown mh3 is-dark");
        assert_eq!(base.merge(&Class::default()).to_string(), "dropdown");

        let owned = Class::from(format!("{} {}", "pv1", "ph3"));
        assert!(owned.contains("ph3"));
        assert_eq!(Class::from(["a b", "c"]).to_string(), "a b c");
    }

    #[test]
    fn it_ignores_empty_classes() {
        let mut class = Class::new("   ");
        assert!(class.is_empty());
        assert_eq!(class.format(), "");

        class.add("");
        class.add("menu");
        class.add("menu");
        assert_eq!(class.to_string(), "menu");

        class.remove("menu");
        assert!(class.is_empty());
    }
}
