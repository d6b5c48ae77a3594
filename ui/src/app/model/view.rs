use super::Model;
use crate::app::view::{split_screen, view_overlays};
use crate::components::common::ComponentId;
use crate::components::help_bar::HelpBar;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let active_component = self.active_component.clone();
        let keys = &self.keys;
        let app = &mut self.app;

        self.terminal
            .draw(|f| {
                let chunks = split_screen(f.area());

                app.view(&ComponentId::TextLabel, f, chunks.label);
                app.view(&ComponentId::ToggleTheme, f, chunks.toggle);
                app.view(&ComponentId::BookList, f, chunks.main);
                HelpBar::view_with_active(f, chunks.help, &active_component, keys);

                view_overlays(app, f);
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
