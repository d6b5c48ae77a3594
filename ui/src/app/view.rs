use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

/// Rows of the main screen
pub struct ScreenChunks {
    pub label: Rect,
    pub toggle: Rect,
    pub main: Rect,
    pub help: Rect,
}

pub fn split_screen(area: Rect) -> ScreenChunks {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1),
            Constraint::Min(8), // Book list
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(rows[0]);

    ScreenChunks {
        label: header[0],
        toggle: header[1],
        main: rows[2],
        help: rows[3],
    }
}

/// Draws mounted overlays over the main screen, lowest priority first so
/// the focused one ends up on top.
pub fn view_overlays(app: &mut Application<ComponentId, Msg, NoUserEvent>, f: &mut Frame) {
    let area = f.area();
    let layers: [(ComponentId, Rect); 5] = [
        (ComponentId::DetailPopup, PopupLayout::large(area)),
        (ComponentId::SettingsPopup, PopupLayout::centered(area, 40, 40)),
        (ComponentId::SearchPopup, PopupLayout::medium(area)),
        (ComponentId::WarningPopup, PopupLayout::small(area)),
        (ComponentId::ErrorPopup, PopupLayout::centered(area, 60, 35)),
    ];

    for (id, popup_area) in layers {
        if app.mounted(&id) {
            app.view(&id, f, popup_area);
        }
    }
}
