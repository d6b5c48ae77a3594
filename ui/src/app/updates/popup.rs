use crate::app::model::Model;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::error::AppError;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_popup(&mut self, msg: PopupActivityMsg) -> Option<Msg> {
        match msg {
            PopupActivityMsg::ShowError(error) => self.handle_show_error(error),
            PopupActivityMsg::CloseError => self.handle_close_error(),
            PopupActivityMsg::ShowWarning(message) => self.handle_show_warning(message),
            PopupActivityMsg::CloseWarning => self.handle_close_warning(),
        }
    }

    fn handle_show_error(&mut self, error: AppError) -> Option<Msg> {
        if let Err(e) = self.mount_error_popup(&error) {
            log::error!("Failed to mount error popup: {e}");
            Some(Msg::Error(e))
        } else {
            None
        }
    }

    fn handle_close_error(&mut self) -> Option<Msg> {
        if let Err(e) = self.unmount_error_popup() {
            log::error!("Failed to unmount error popup: {e}");
            Some(Msg::Error(e))
        } else {
            None
        }
    }

    fn handle_show_warning(&mut self, message: String) -> Option<Msg> {
        if let Err(e) = self.mount_warning_popup(&message) {
            log::error!("Failed to mount warning popup: {e}");
            Some(Msg::Error(e))
        } else {
            None
        }
    }

    fn handle_close_warning(&mut self) -> Option<Msg> {
        if let Err(e) = self.unmount_warning_popup() {
            log::error!("Failed to unmount warning popup: {e}");
            Some(Msg::Error(e))
        } else {
            None
        }
    }
}
