//! Paints catalog pages from [`CatalogStore`] output.
//!
//! The renderer owns the store and the list container. Every mutation of the
//! match set or page goes through here, followed by a repaint of the regions
//! it affects. Nothing in this module touches the terminal; the model copies
//! a [`BookListSnapshot`] out after each change.

use crate::components::book_list::{BookListSnapshot, ShowMoreControl};
use crate::components::book_preview::{BookPreview, PreviewMarkup};
use crate::components::detail_popup::BookDetail;
use crate::components::reactive::{ReactiveHost, RenderPolicy};
use crate::components::search_filter::{
    ATTR_DEFAULT_OPTION, ATTR_OPTIONS, SearchFilter, SelectMarkup,
};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use catalog::{Catalog, CatalogStore, FilterCriteria, LookupError, PageWindow};
use std::sync::Arc;

pub const GENRE_DEFAULT_LABEL: &str = "All Genres";
pub const AUTHOR_DEFAULT_LABEL: &str = "All Authors";

/// Ordered previews, appended one batch per page.
#[derive(Default)]
pub struct ListContainer {
    previews: Vec<ReactiveHost<BookPreview>>,
    batches: usize,
}

impl ListContainer {
    pub fn append_batch(&mut self, batch: Vec<ReactiveHost<BookPreview>>) {
        self.previews.extend(batch);
        self.batches += 1;
    }

    pub fn clear(&mut self) {
        self.previews.clear();
        self.batches = 0;
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Batches appended since the last clear.
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    /// Preview id of the row at `index`, as the delegated handler reads it.
    pub fn preview_id_at(&self, index: usize) -> Option<&str> {
        self.previews
            .get(index)
            .and_then(|host| host.output())
            .map(|markup| markup.preview_id.as_str())
    }

    pub fn markups(&self) -> impl Iterator<Item = &PreviewMarkup> {
        self.previews.iter().filter_map(|host| host.output())
    }
}

/// The two search dropdowns, mounted once when the renderer is built.
pub struct SearchFilters {
    pub genre: ReactiveHost<SearchFilter>,
    pub author: ReactiveHost<SearchFilter>,
}

impl SearchFilters {
    fn mount(catalog: &Catalog, policy: RenderPolicy) -> AppResult<Self> {
        let mut genre = ReactiveHost::new(SearchFilter)
            .with_policy(policy)
            .with_attribute(ATTR_OPTIONS, catalog.genres().to_json())
            .with_attribute(ATTR_DEFAULT_OPTION, GENRE_DEFAULT_LABEL);
        let mut author = ReactiveHost::new(SearchFilter)
            .with_policy(policy)
            .with_attribute(ATTR_OPTIONS, catalog.authors().to_json())
            .with_attribute(ATTR_DEFAULT_OPTION, AUTHOR_DEFAULT_LABEL);
        genre.mount()?;
        author.mount()?;
        Ok(Self { genre, author })
    }

    pub fn genre_markup(&self) -> SelectMarkup {
        Self::markup_of(&self.genre)
    }

    pub fn author_markup(&self) -> SelectMarkup {
        Self::markup_of(&self.author)
    }

    fn markup_of(host: &ReactiveHost<SearchFilter>) -> SelectMarkup {
        host.output().cloned().unwrap_or(SelectMarkup {
            entries: Vec::new(),
        })
    }
}

pub struct CatalogRenderer {
    store: CatalogStore,
    catalog: Arc<Catalog>,
    list: ListContainer,
    show_more: ShowMoreControl,
    message_visible: bool,
    filters: SearchFilters,
    policy: RenderPolicy,
}

impl CatalogRenderer {
    pub fn new(store: CatalogStore, policy: RenderPolicy) -> AppResult<Self> {
        let catalog = store.catalog().clone();
        let filters = SearchFilters::mount(&catalog, policy)?;
        Ok(Self {
            store,
            catalog,
            list: ListContainer::default(),
            show_more: ShowMoreControl::default(),
            message_visible: false,
            filters,
            policy,
        })
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn list(&self) -> &ListContainer {
        &self.list
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn show_more_control(&self) -> ShowMoreControl {
        self.show_more
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    /// First page of the unfiltered catalog.
    pub fn initial_render(&mut self) -> AppResult<()> {
        let window = self.store.first_page_window();
        self.render_page(window)?;
        self.update_show_more();
        log::info!(
            "Initial render: {} of {} books",
            self.list.len(),
            self.store.matches().len()
        );
        Ok(())
    }

    /// Builds one preview per book and appends them as a single batch.
    pub fn render_page(&mut self, window: PageWindow) -> AppResult<()> {
        let mut batch = Vec::with_capacity(window.len());
        for book in &window.books {
            let mut host =
                ReactiveHost::new(BookPreview::new(self.catalog.clone())).with_policy(self.policy);
            for (name, value) in BookPreview::attributes_for(book) {
                host.set_attribute(name, value);
            }
            host.mount()?;
            batch.push(host);
        }
        log::debug!(
            "Rendered page window {}..{} ({} previews)",
            window.start,
            window.end(),
            batch.len()
        );
        self.list.append_batch(batch);
        Ok(())
    }

    /// Appends the next page. Returns `false` when the control is disabled.
    pub fn show_more(&mut self) -> AppResult<bool> {
        if !self.show_more.enabled {
            log::debug!("Show more activated while disabled, ignoring");
            return Ok(false);
        }
        let window = self.store.next_page_window();
        self.render_page(window)?;
        self.store.advance_page();
        self.update_show_more();
        Ok(true)
    }

    pub fn update_show_more(&mut self) {
        self.show_more = ShowMoreControl::from_remaining(self.store.remaining_count());
    }

    /// Applies new criteria: filter, message, clear, first page, then the
    /// show-more count, in that order.
    pub fn submit_search(&mut self, criteria: FilterCriteria) -> AppResult<()> {
        let matched = self.store.apply_filter(criteria).len();
        self.message_visible = matched == 0;
        self.list.clear();
        let window = self.store.first_page_window();
        self.render_page(window)?;
        self.update_show_more();
        log::info!(
            "Search matched {matched} books, showing {}",
            self.list.len()
        );
        Ok(())
    }

    /// Resolves a preview id against the full catalog.
    pub fn preview_detail(&self, id: &str) -> Result<BookDetail, LookupError> {
        BookDetail::lookup(&self.catalog, id)
    }

    pub fn snapshot(&self) -> BookListSnapshot {
        BookListSnapshot {
            rows: self.list.markups().cloned().collect(),
            show_more: self.show_more,
            message_visible: self.message_visible,
            total_matches: self.store.matches().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Dataset;
    use claims::{assert_ok, assert_some_eq};

    fn renderer(page_size: usize) -> CatalogRenderer {
        let catalog = Arc::new(assert_ok!(Catalog::new(assert_ok!(Dataset::bundled()))));
        let store = CatalogStore::with_page_size(catalog, page_size);
        assert_ok!(CatalogRenderer::new(store, RenderPolicy::EveryWrite))
    }

    #[test]
    fn each_page_is_one_batch() {
        let mut renderer = renderer(10);
        assert_ok!(renderer.initial_render());
        assert_ok!(renderer.show_more());
        assert_eq!(renderer.list().batch_count(), 2);
        assert_eq!(renderer.list().len(), 20);
    }

    #[test]
    fn preview_ids_follow_catalog_order() {
        let mut renderer = renderer(3);
        assert_ok!(renderer.initial_render());
        let expected = renderer.store().matches()[1].id.clone();
        assert_some_eq!(renderer.list().preview_id_at(1), expected.as_str());
    }

    #[test]
    fn filters_list_registry_entries_after_placeholder() {
        let renderer = renderer(10);
        let genres = renderer.filters().genre_markup();
        assert_eq!(genres.entries[0].label, GENRE_DEFAULT_LABEL);
        assert_eq!(
            genres.len(),
            renderer.store().catalog().genres().len() + 1
        );
        assert_eq!(
            renderer.filters().author_markup().entries[0].label,
            AUTHOR_DEFAULT_LABEL
        );
    }
}
