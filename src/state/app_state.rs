//! Application state definitions

use crate::state::OrderForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// Landing view: welcome artwork, activate to start an order
    #[default]
    Home,
    /// The order form (or its confirmation once placed)
    Order,
}

/// Top-level mutable state owned by the app
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Previous views, most recent last
    pub view_history: Vec<View>,
    /// The one order form; lives for the whole session
    pub order: OrderForm,
}
