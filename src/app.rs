//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, SplashState, View, FIELD_FULL_NAME, FIELD_SIZE, FIELD_SUBMIT, FIELD_TOPPINGS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState::default();

        let splash_state = if config.skip_splash() {
            state.current_view = View::Home;
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        Self {
            state,
            config,
            splash_state,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true if the animation completed and we moved to the landing view.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Home;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            tracing::debug!(to = ?view, "go back");
            self.state.current_view = view;
        }
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Home => self.handle_home_key(key),
            View::Order => self.handle_order_key(key),
        }
        Ok(())
    }

    /// Handle a mouse event for the current view
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        match self.state.current_view {
            // Clicking skips the animation, same as any key
            View::Splash => self.handle_splash_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            // Clicking the artwork starts an order
            View::Home => self.navigate(View::Order),
            View::Order => {}
        }
        Ok(())
    }

    /// Any key skips the splash animation
    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    /// Handle keys in the landing view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.navigate(View::Order),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the order view
    fn handle_order_key(&mut self, key: KeyEvent) {
        // Once the order is placed the form is read-only; only navigation
        // keys are dispatched.
        if self.state.order.is_complete() {
            match key.code {
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }

        let active = self.state.order.active_field();
        match key.code {
            KeyCode::Tab => self.state.order.next_field(),
            KeyCode::BackTab => self.state.order.prev_field(),
            KeyCode::Esc => self.go_back(),

            // Topping checklist navigation and toggling
            KeyCode::Up if active == FIELD_TOPPINGS => self.state.order.topping_cursor_up(),
            KeyCode::Down if active == FIELD_TOPPINGS => self.state.order.topping_cursor_down(),
            KeyCode::Char(' ') if active == FIELD_TOPPINGS => {
                self.state.order.toggle_topping_at_cursor()
            }

            // Size selector cycling
            KeyCode::Left if active == FIELD_SIZE => self.state.order.cycle_size_prev(),
            KeyCode::Right if active == FIELD_SIZE => self.state.order.cycle_size_next(),
            KeyCode::Char(' ') if active == FIELD_SIZE => self.state.order.cycle_size_next(),

            // Enter places the order from the submit row (the control is
            // disabled while the form is invalid), toggles on the
            // checklist, and advances focus elsewhere.
            KeyCode::Enter => match active {
                FIELD_SUBMIT => {
                    if self.state.order.submit() {
                        tracing::info!(
                            full_name = self.state.order.full_name.as_text(),
                            size = self.state.order.size.as_text(),
                            toppings = self.state.order.toppings.len(),
                            "order placed"
                        );
                    }
                }
                FIELD_TOPPINGS => self.state.order.toggle_topping_at_cursor(),
                _ => self.state.order.next_field(),
            },

            // Field input
            KeyCode::Char(c) if active == FIELD_FULL_NAME || active == FIELD_SIZE => {
                self.state.order.input_char(c)
            }
            KeyCode::Backspace => self.state.order.backspace(),
            _ => {}
        }
    }
}
