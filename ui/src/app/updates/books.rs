use crate::app::model::Model;
use crate::components::common::{CatalogActivityMsg, Msg};
use catalog::FilterCriteria;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_catalog(&mut self, msg: CatalogActivityMsg) -> Option<Msg> {
        match msg {
            CatalogActivityMsg::SearchSubmitted {
                genre,
                title,
                author,
            } => self.handle_search_submitted(&genre, &title, &author),
            CatalogActivityMsg::ShowMore => self.handle_show_more(),
            CatalogActivityMsg::PreviewSelected(id) => self.handle_preview_selected(&id),
        }
    }

    fn handle_search_submitted(&mut self, genre: &str, title: &str, author: &str) -> Option<Msg> {
        let criteria = FilterCriteria::from_submission(genre, title, author);
        log::info!("Search submitted: {criteria:?}");

        if let Err(e) = self.renderer.submit_search(criteria) {
            return Some(Msg::Error(e));
        }
        if let Err(e) = self.close_search() {
            return Some(Msg::Error(e));
        }
        if let Err(e) = self.remount_book_list(true) {
            return Some(Msg::Error(e));
        }
        None
    }

    fn handle_show_more(&mut self) -> Option<Msg> {
        match self.renderer.show_more() {
            Ok(true) => {
                log::debug!(
                    "Showing {} books, {} remaining",
                    self.renderer.list().len(),
                    self.renderer.store().remaining_count()
                );
                self.remount_book_list(false).err().map(Msg::Error)
            }
            Ok(false) => None,
            Err(e) => Some(Msg::Error(e)),
        }
    }

    fn handle_preview_selected(&mut self, id: &str) -> Option<Msg> {
        let detail = match self.renderer.preview_detail(id) {
            Ok(detail) => detail,
            Err(e) => {
                self.error_reporter.report_lookup_error("open_detail", &e);
                return None;
            }
        };

        self.mount_detail_popup(detail).err().map(Msg::Error)
    }
}
