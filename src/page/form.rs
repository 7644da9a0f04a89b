use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use super::dom::ClassList;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Thank you for reaching out.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [FieldName::Name, FieldName::Email, FieldName::Subject, FieldName::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Your Name",
            FieldName::Email => "Your Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Your Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == FieldName::Message
    }
}

/// One form control and the classes of its wrapping group
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub value: String,
    pub group: ClassList,
}

/// Collected field values of one submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub data: BTreeMap<&'static str, String>,
    pub submitted_at: DateTime<Local>,
}

/// Contact form; submission is simulated and always succeeds
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: BTreeMap<FieldName, FormField>,
    last_submission: Option<Submission>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(|name| (name, FormField::default())).collect(),
            last_submission: None,
        }
    }

    /// Floating label rises while the control has focus
    pub fn focus(&mut self, name: FieldName) {
        self.field_mut(name).group.add("focused");
    }

    /// The label only drops back when the control is left empty
    pub fn blur(&mut self, name: FieldName) {
        let field = self.field_mut(name);
        if field.value.is_empty() {
            field.group.remove("focused");
        }
    }

    pub fn is_focused(&self, name: FieldName) -> bool {
        self.fields.get(&name).is_some_and(|field| field.group.contains("focused"))
    }

    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.fields.get(&name).map_or("", |field| field.value.as_str())
    }

    /// Editable value, for text widgets
    pub fn value_mut(&mut self, name: FieldName) -> &mut String {
        &mut self.field_mut(name).value
    }

    /// Collect every field, keep it as the last submission and reset the values
    pub fn submit(&mut self) -> &Submission {
        let data = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.value.clone()))
            .collect();

        for field in self.fields.values_mut() {
            field.value.clear();
        }

        let submission = Submission {
            data,
            submitted_at: Local::now(),
        };
        log::info!(
            "contact form submitted at {} ({} fields)",
            submission.submitted_at.format("%H:%M:%S"),
            submission.data.len()
        );

        self.last_submission.insert(submission)
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|field| field.value.is_empty())
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        self.fields.entry(name).or_default()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
