pub mod counter;
pub mod faq;
pub mod layout;
mod note_input;
mod palette;
mod status_bar;
pub mod tabs;
pub mod theme_toggle;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub use palette::Palette;

pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_mode(state.theme.mode());
    let area = frame.area();

    // Page background follows the active theme, like a root attribute
    // restyling the whole document.
    frame.render_widget(Block::default().style(palette.base()), area);

    let app_layout = layout::compute_layout(area);
    theme_toggle::render(frame, app_layout.header, state, &palette);
    counter::render(frame, app_layout.counter, state, &palette);
    faq::render(frame, app_layout.faq, state, &palette);
    tabs::render(frame, app_layout.tabs, state, &palette);
    note_input::render(frame, app_layout.note, state, &palette);
    status_bar::render(frame, app_layout.status_bar, state, &palette);
}
