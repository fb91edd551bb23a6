//! UI module for rendering the TUI

mod home;
mod order;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Splash => {
            if let Some(ref splash_state) = app.splash_state {
                splash::draw(frame, area, splash_state);
            }
        }
        View::Home => home::draw(frame, area, app),
        View::Order => order::draw(frame, area, app),
    }
}
