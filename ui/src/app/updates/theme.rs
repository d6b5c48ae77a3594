use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, ThemeActivityMsg};
use crate::theme::ThemeManager;
use catalog::Mode;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::Toggle => self.handle_theme_toggle(),
            ThemeActivityMsg::SettingsSubmitted(mode) => self.handle_settings_submitted(mode),
        }
    }

    fn handle_theme_toggle(&mut self) -> Option<Msg> {
        // The subscription already skips the forms; this covers a toggle
        // queued before one of them opened.
        if self.app.mounted(&ComponentId::SearchPopup)
            || self.app.mounted(&ComponentId::SettingsPopup)
        {
            log::debug!("Ignoring theme toggle while a form is open");
            return None;
        }

        match ThemeManager::with_global_mut(|manager| manager.toggle()) {
            Ok(mode) => {
                log::info!("Theme toggled to {mode}");
                self.after_theme_change()
            }
            Err(e) => {
                self.error_reporter.report_theme_error("toggle", e);
                None
            }
        }
    }

    fn handle_settings_submitted(&mut self, mode: Mode) -> Option<Msg> {
        if let Err(e) = ThemeManager::with_global_mut(|manager| manager.set_theme(mode)) {
            self.error_reporter.report_theme_error("set_theme", e);
        }

        self.overlays.close_settings();
        if let Err(e) = self.unmount_settings_popup() {
            log::error!("Failed to unmount settings popup: {e}");
            return Some(Msg::Error(e));
        }
        self.after_theme_change()
    }

    fn after_theme_change(&mut self) -> Option<Msg> {
        if let Err(e) = self.remount_theme_dependents() {
            self.error_reporter
                .report_mount_error("Header", "remount", e);
        }
        self.redraw = true;
        None
    }
}
