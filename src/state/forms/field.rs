//! Form field value objects

/// Longest quantity the form accepts, in digits
const MAX_QUANTITY_DIGITS: usize = 6;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Raw digits typed for a quantity
    Quantity(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single editable form field with its label and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: None,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new quantity field, starting at 1
    pub fn quantity(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: None,
            value: FieldValue::Quantity("1".to_string()),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Get the text value (returns the raw digits for quantity fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Quantity(s) => s,
        }
    }

    /// Quantity value; blank, zero or unparsable input counts as 1
    pub fn as_quantity(&self) -> u32 {
        match &self.value {
            FieldValue::Quantity(s) => s.parse::<u32>().ok().filter(|q| *q > 0).unwrap_or(1),
            FieldValue::Text(_) => 1,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Quantity(s) => *s = value.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Quantity(s) => {
                if c.is_ascii_digit() && s.len() < MAX_QUANTITY_DIGITS {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Quantity(s) => {
                s.pop();
            }
        }
    }

    /// Rewrite a quantity buffer to the value it stands for
    pub fn normalize(&mut self) {
        if let FieldValue::Quantity(_) = self.value {
            self.value = FieldValue::Quantity(self.as_quantity().to_string());
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.as_text().to_string()
    }
}
