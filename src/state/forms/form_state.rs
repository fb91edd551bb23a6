//! Order form state and operations

use super::field::FormField;
use super::validation::{self, ValidationErrors};
use crate::state::toppings::TOPPINGS;

/// Focusable rows of the order form, top to bottom
pub const FIELD_FULL_NAME: usize = 0;
pub const FIELD_SIZE: usize = 1;
pub const FIELD_TOPPINGS: usize = 2;
pub const FIELD_SUBMIT: usize = 3;

const FIELD_COUNT: usize = 4;

/// The order form: field values, per-field errors, focus state, and the
/// one-way completion flag.
///
/// Errors are advisory only; invalid input is stored as-is and never blocks
/// editing. Each edit revalidates just the edited field. Whether submission
/// is possible is derived from the values, not stored.
#[derive(Debug, Clone)]
pub struct OrderForm {
    pub full_name: FormField,
    pub size: FormField,
    /// Selected topping identifiers, insertion-ordered, no duplicates
    pub toppings: Vec<String>,
    pub errors: ValidationErrors,
    pub active_field_index: usize,
    /// Cursor within the topping checklist
    pub topping_cursor: usize,
    completed: bool,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full Name"),
            size: FormField::size("size", "Size"),
            toppings: Vec::new(),
            errors: ValidationErrors::default(),
            active_field_index: FIELD_FULL_NAME,
            topping_cursor: 0,
            completed: false,
        }
    }

    pub fn field_count(&self) -> usize {
        FIELD_COUNT
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    /// Move focus to the next row (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FIELD_COUNT;
    }

    /// Move focus to the previous row (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FIELD_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Type a character into the active field and revalidate it.
    /// No-op once the order is complete or on rows without a value.
    pub fn input_char(&mut self, c: char) {
        if self.completed {
            return;
        }
        match self.active_field_index {
            FIELD_FULL_NAME => {
                self.full_name.push_char(c);
                self.revalidate_full_name();
            }
            FIELD_SIZE => {
                self.size.push_char(c);
                self.revalidate_size();
            }
            _ => {}
        }
    }

    /// Backspace in the active field and revalidate it
    pub fn backspace(&mut self) {
        if self.completed {
            return;
        }
        match self.active_field_index {
            FIELD_FULL_NAME => {
                self.full_name.pop_char();
                self.revalidate_full_name();
            }
            FIELD_SIZE => {
                self.size.pop_char();
                self.revalidate_size();
            }
            _ => {}
        }
    }

    /// Cycle the size selector when it is focused
    pub fn cycle_size_next(&mut self) {
        if self.completed || self.active_field_index != FIELD_SIZE {
            return;
        }
        self.size.cycle_next();
        self.revalidate_size();
    }

    /// Cycle the size selector backward when it is focused
    pub fn cycle_size_prev(&mut self) {
        if self.completed || self.active_field_index != FIELD_SIZE {
            return;
        }
        self.size.cycle_prev();
        self.revalidate_size();
    }

    /// Move the topping checklist cursor up
    pub fn topping_cursor_up(&mut self) {
        if self.topping_cursor == 0 {
            self.topping_cursor = TOPPINGS.len() - 1;
        } else {
            self.topping_cursor -= 1;
        }
    }

    /// Move the topping checklist cursor down
    pub fn topping_cursor_down(&mut self) {
        self.topping_cursor = (self.topping_cursor + 1) % TOPPINGS.len();
    }

    /// Toggle a topping: add if absent, remove if present. Set semantics,
    /// insertion order preserved. Toppings carry no validation rule.
    pub fn toggle_topping(&mut self, id: &str) {
        if self.completed {
            return;
        }
        if let Some(pos) = self.toppings.iter().position(|t| t == id) {
            self.toppings.remove(pos);
        } else {
            self.toppings.push(id.to_string());
        }
    }

    /// Toggle the topping under the checklist cursor
    pub fn toggle_topping_at_cursor(&mut self) {
        let id = TOPPINGS[self.topping_cursor].id;
        self.toggle_topping(id);
    }

    pub fn is_topping_selected(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }

    /// Derived submit-enabled flag: a pure function of the current values
    pub fn submit_enabled(&self) -> bool {
        validation::form_is_valid(self.full_name.as_text(), self.size.as_text())
    }

    /// Flip the completion flag. The submit control is disabled while the
    /// form is invalid, so the guard here only closes the programmatic
    /// path; no per-field revalidation happens on submit.
    /// Returns whether the order was placed.
    pub fn submit(&mut self) -> bool {
        if self.completed || !self.submit_enabled() {
            return false;
        }
        self.completed = true;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    fn revalidate_full_name(&mut self) {
        self.errors.full_name = validation::validate_full_name(self.full_name.as_text()).err();
    }

    fn revalidate_size(&mut self) {
        self.errors.size = validation::validate_size(self.size.as_text()).err();
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}
