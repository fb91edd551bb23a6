//! Form field value objects

/// The option values the size selector can emit, in cycle order.
pub const SIZE_OPTIONS: [&str; 3] = ["S", "M", "L"];

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Free text, edited per keystroke
    Text(String),
    /// A size selector value: empty or one of [`SIZE_OPTIONS`]
    Size(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new size selector field with no selection
    pub fn size(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Size(String::new()),
        }
    }

    /// Get the raw stored value
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Size(s) => s,
        }
    }

    /// Set the raw stored value
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Size(s) => *s = value,
        }
    }

    /// Push a character to the field value.
    ///
    /// Text fields append it verbatim. The size selector only has options
    /// for s/m/l (case-insensitive) and emits the option value; any other
    /// character has no matching option and is ignored.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Size(s) => {
                if let Some(option) = SIZE_OPTIONS
                    .iter()
                    .find(|o| o.eq_ignore_ascii_case(&c.to_string()))
                {
                    *s = (*option).to_string();
                }
            }
        }
    }

    /// Remove the last character (text) or clear the selection (size)
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Size(s) => s.clear(),
        }
    }

    /// Cycle the size selector forward: "" -> S -> M -> L -> ""
    pub fn cycle_next(&mut self) {
        if let FieldValue::Size(s) = &mut self.value {
            let next = match SIZE_OPTIONS.iter().position(|o| *o == s.as_str()) {
                None => SIZE_OPTIONS[0],
                Some(i) if i + 1 < SIZE_OPTIONS.len() => SIZE_OPTIONS[i + 1],
                Some(_) => "",
            };
            *s = next.to_string();
        }
    }

    /// Cycle the size selector backward: "" -> L -> M -> S -> ""
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Size(s) = &mut self.value {
            let prev = match SIZE_OPTIONS.iter().position(|o| *o == s.as_str()) {
                None => SIZE_OPTIONS[SIZE_OPTIONS.len() - 1],
                Some(0) => "",
                Some(i) => SIZE_OPTIONS[i - 1],
            };
            *s = prev.to_string();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Size(s) => {
                if s.is_empty() {
                    "---- Choose Size ----".to_string()
                } else {
                    s.clone()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod text_field {
        use super::*;

        #[test]
        fn test_starts_empty() {
            let field = FormField::text("full_name", "Full Name");
            assert_eq!(field.as_text(), "");
            assert_eq!(field.name, "full_name");
            assert_eq!(field.label, "Full Name");
        }

        #[test]
        fn test_push_char_appends() {
            let mut field = FormField::text("full_name", "Full Name");
            field.push_char('J');
            field.push_char('o');
            assert_eq!(field.as_text(), "Jo");
        }

        #[test]
        fn test_push_char_keeps_whitespace() {
            let mut field = FormField::text("full_name", "Full Name");
            field.push_char(' ');
            field.push_char('J');
            assert_eq!(field.as_text(), " J");
        }

        #[test]
        fn test_pop_char_removes_last() {
            let mut field = FormField::text("full_name", "Full Name");
            field.set_text("Jane".to_string());
            field.pop_char();
            assert_eq!(field.as_text(), "Jan");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut field = FormField::text("full_name", "Full Name");
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_display_value_is_raw() {
            let mut field = FormField::text("full_name", "Full Name");
            field.set_text("  Jane  ".to_string());
            assert_eq!(field.display_value(), "  Jane  ");
        }
    }

    mod size_field {
        use super::*;

        #[test]
        fn test_starts_with_no_selection() {
            let field = FormField::size("size", "Size");
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_push_char_maps_to_option_value() {
            let mut field = FormField::size("size", "Size");
            field.push_char('m');
            assert_eq!(field.as_text(), "M");
            field.push_char('S');
            assert_eq!(field.as_text(), "S");
        }

        #[test]
        fn test_push_char_without_matching_option_is_ignored() {
            let mut field = FormField::size("size", "Size");
            field.push_char('x');
            assert_eq!(field.as_text(), "");
            field.push_char('l');
            field.push_char('7');
            assert_eq!(field.as_text(), "L");
        }

        #[test]
        fn test_pop_char_clears_selection() {
            let mut field = FormField::size("size", "Size");
            field.push_char('l');
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_cycle_next_walks_options_and_wraps() {
            let mut field = FormField::size("size", "Size");
            field.cycle_next();
            assert_eq!(field.as_text(), "S");
            field.cycle_next();
            assert_eq!(field.as_text(), "M");
            field.cycle_next();
            assert_eq!(field.as_text(), "L");
            field.cycle_next();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_cycle_prev_walks_options_backward() {
            let mut field = FormField::size("size", "Size");
            field.cycle_prev();
            assert_eq!(field.as_text(), "L");
            field.cycle_prev();
            assert_eq!(field.as_text(), "M");
            field.cycle_prev();
            assert_eq!(field.as_text(), "S");
            field.cycle_prev();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_display_value_placeholder_when_empty() {
            let field = FormField::size("size", "Size");
            assert_eq!(field.display_value(), "---- Choose Size ----");
        }

        #[test]
        fn test_display_value_shows_selection() {
            let mut field = FormField::size("size", "Size");
            field.push_char('l');
            assert_eq!(field.display_value(), "L");
        }
    }
}
