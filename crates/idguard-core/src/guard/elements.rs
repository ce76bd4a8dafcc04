use super::{Alert, SubmitControl, SubmitEvent, TextField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputElement {
    value: String,
}

impl InputElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl TextField for InputElement {
    fn value(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonElement {
    label: String,
    disabled: bool,
}

impl ButtonElement {
    /// An enabled submit button showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}

impl SubmitControl for ButtonElement {
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitEventState {
    default_prevented: bool,
}

impl SubmitEvent for SubmitEventState {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Keeps every alert instead of showing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedAlerts {
    messages: Vec<String>,
}

impl RecordedAlerts {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Alert for RecordedAlerts {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
