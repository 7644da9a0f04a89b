use std::collections::{BTreeMap, BTreeSet};

/// Set of presentational class names on one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; false if it was already present
    pub fn add(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_string())
    }

    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Flip a class and return whether it is now present
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.add(class)
        }
    }

    /// Add or remove depending on `on`
    pub fn set(&mut self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Space-separated form, as in a `class` attribute
    pub fn to_attribute(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

/// Inline style properties of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: BTreeMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property; an empty value removes it
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.properties.remove(property);
        } else {
            self.properties.insert(property.to_string(), value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.remove(property)
    }

    /// Serialized declarations, as in a `style` attribute
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
