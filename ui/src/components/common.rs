use crate::error::AppError;
use catalog::Mode;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    TextLabel,
    ToggleTheme,
    BookList,
    SearchPopup,
    SettingsPopup,
    DetailPopup,
    ErrorPopup,
    WarningPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    CatalogActivity(CatalogActivityMsg),
    ThemeActivity(ThemeActivityMsg),
    OverlayActivity(OverlayActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

/// Events routed into the catalog store.
#[derive(Debug, PartialEq)]
pub enum CatalogActivityMsg {
    /// Raw search-form values; dropdowns send `"any"` when unselected
    SearchSubmitted {
        genre: String,
        title: String,
        author: String,
    },
    ShowMore,
    /// Delegated selection from the list container, carrying the preview id
    PreviewSelected(String),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    Toggle,
    /// Settings-form submission
    SettingsSubmitted(Mode),
}

/// Open/close triggers for the three overlays.
#[derive(Debug, PartialEq)]
pub enum OverlayActivityMsg {
    OpenSearch,
    CloseSearch,
    OpenSettings,
    CloseSettings,
    CloseDetail,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    CloseError,
    ShowWarning(String),
    CloseWarning,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
