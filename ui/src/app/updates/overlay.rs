use crate::app::model::Model;
use crate::components::common::{Msg, OverlayActivityMsg};
use crate::error::AppResult;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_overlay(&mut self, msg: OverlayActivityMsg) -> Option<Msg> {
        let result = match msg {
            OverlayActivityMsg::OpenSearch => {
                if self.overlays.search().is_open() {
                    return None;
                }
                log::debug!("Opening search overlay");
                self.mount_search_popup()
            }
            OverlayActivityMsg::CloseSearch => self.close_search(),
            OverlayActivityMsg::OpenSettings => {
                if self.overlays.settings().is_open() {
                    return None;
                }
                log::debug!("Opening settings overlay");
                self.mount_settings_popup()
            }
            OverlayActivityMsg::CloseSettings => {
                self.overlays.close_settings();
                self.unmount_settings_popup()
            }
            OverlayActivityMsg::CloseDetail => {
                self.overlays.close_detail();
                self.unmount_detail_popup()
            }
        };

        match result {
            Ok(()) => None,
            Err(e) => {
                log::error!("Overlay transition failed: {e}");
                Some(Msg::Error(e))
            }
        }
    }

    pub(crate) fn close_search(&mut self) -> AppResult<()> {
        self.overlays.close_search();
        self.unmount_search_popup()
    }
}
