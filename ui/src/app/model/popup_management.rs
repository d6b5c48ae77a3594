use super::Model;
use crate::app::model::initialization::HEADER_TEXT;
use crate::components::book_list::BookList;
use crate::components::common::ComponentId;
use crate::components::detail_popup::{BookDetail, DetailPopup};
use crate::components::error_popup::ErrorPopup;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::reactive::ReactiveHost;
use crate::components::search_popup::SearchPopup;
use crate::components::settings_popup::SettingsPopup;
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::components::toggle_theme::ToggleTheme;
use crate::components::warning_popup::WarningPopup;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{State, StateValue, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error),
            Vec::default(),
        )?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Unmount error popup and return focus to the next component in line
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        self.umount_if_mounted(&ComponentId::ErrorPopup)?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");

        self.app.remount_with_state(
            ComponentId::WarningPopup,
            WarningPopup::new(message),
            Vec::default(),
        )?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn unmount_warning_popup(&mut self) -> AppResult<()> {
        self.umount_if_mounted(&ComponentId::WarningPopup)?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Opens the search form with the title field focused and the last
    /// submitted criteria preselected. The overlay phase opens only once the
    /// popup is mounted.
    pub fn mount_search_popup(&mut self) -> AppResult<()> {
        let filters = self.renderer.filters();
        let popup = SearchPopup::new(
            filters.genre_markup(),
            filters.author_markup(),
            self.renderer.store().criteria(),
        );
        self.app
            .remount_with_state(ComponentId::SearchPopup, popup, Vec::default())?;
        self.overlays.open_search();
        self.update_global_key_watcher_input_state()?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn unmount_search_popup(&mut self) -> AppResult<()> {
        self.umount_if_mounted(&ComponentId::SearchPopup)?;
        self.update_global_key_watcher_input_state()?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Opens the settings form preselected with the engine's settings value.
    pub fn mount_settings_popup(&mut self) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::SettingsPopup,
            SettingsPopup::new(ThemeManager::current_settings_value()),
            Vec::default(),
        )?;
        self.overlays.open_settings();
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn unmount_settings_popup(&mut self) -> AppResult<()> {
        self.umount_if_mounted(&ComponentId::SettingsPopup)?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn mount_detail_popup(&mut self, detail: BookDetail) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::DetailPopup,
            DetailPopup::new(detail),
            Vec::default(),
        )?;
        self.overlays.open_detail();
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn unmount_detail_popup(&mut self) -> AppResult<()> {
        self.umount_if_mounted(&ComponentId::DetailPopup)?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Swap the key watcher so character shortcuts are off while the search
    /// form has the keyboard.
    pub fn update_global_key_watcher_input_state(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::GlobalKeyWatcher,
                Box::new(GlobalKeyWatcher::new(
                    self.keys.clone(),
                    self.overlays.captures_input(),
                )),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)],
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }

    /// Rebuilds the list from the renderer. The cursor survives unless
    /// `reset_cursor` is set.
    pub fn remount_book_list(&mut self, reset_cursor: bool) -> AppResult<()> {
        let cursor = if reset_cursor {
            0
        } else {
            match self.app.state(&ComponentId::BookList) {
                Ok(State::One(StateValue::Usize(cursor))) => cursor,
                _ => 0,
            }
        };

        self.app.remount_with_state(
            ComponentId::BookList,
            BookList::new(self.renderer.snapshot(), cursor, &self.keys),
            Vec::default(),
        )?;
        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Header widgets read colors at construction; remount them after a
    /// theme change.
    pub fn remount_theme_dependents(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::TextLabel,
                Box::new(TextLabel::new(HEADER_TEXT)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.app.remount_with_state(
            ComponentId::ToggleTheme,
            ReactiveHost::new(ToggleTheme::new(self.keys.toggle_theme()))
                .with_policy(self.renderer.policy()),
            Self::toggle_theme_subscriptions(self.keys.toggle_theme()),
        )?;

        self.activate_focus_target()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Focus the highest-priority mounted component: error, warning, then
    /// the open overlays, then the list.
    pub fn activate_focus_target(&mut self) -> AppResult<()> {
        let target = if self.app.mounted(&ComponentId::ErrorPopup) {
            ComponentId::ErrorPopup
        } else if self.app.mounted(&ComponentId::WarningPopup) {
            ComponentId::WarningPopup
        } else {
            self.overlays.focus_target()
        };

        self.app
            .active(&target)
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.active_component = target;
        Ok(())
    }

    fn umount_if_mounted(&mut self, id: &ComponentId) -> AppResult<()> {
        if !self.app.mounted(id) {
            log::debug!("{id:?} not mounted, skipping unmount");
            return Ok(());
        }
        self.app
            .umount(id)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
