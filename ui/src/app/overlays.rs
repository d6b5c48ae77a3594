use crate::components::common::ComponentId;

/// Whether one overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Open,
}

impl OverlayPhase {
    pub fn is_open(self) -> bool {
        self == OverlayPhase::Open
    }
}

/// The three overlays, each opened and closed only by an explicit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    search: OverlayPhase,
    settings: OverlayPhase,
    detail: OverlayPhase,
}

impl OverlayState {
    pub fn search(&self) -> OverlayPhase {
        self.search
    }

    pub fn settings(&self) -> OverlayPhase {
        self.settings
    }

    pub fn detail(&self) -> OverlayPhase {
        self.detail
    }

    pub fn open_search(&mut self) -> bool {
        Self::open(&mut self.search)
    }

    /// Cancel or successful submission.
    pub fn close_search(&mut self) -> bool {
        Self::close(&mut self.search)
    }

    pub fn open_settings(&mut self) -> bool {
        Self::open(&mut self.settings)
    }

    pub fn close_settings(&mut self) -> bool {
        Self::close(&mut self.settings)
    }

    pub fn open_detail(&mut self) -> bool {
        Self::open(&mut self.detail)
    }

    pub fn close_detail(&mut self) -> bool {
        Self::close(&mut self.detail)
    }

    /// True while a text field owns the keyboard.
    pub fn captures_input(&self) -> bool {
        self.search.is_open()
    }

    /// Component that should hold focus, highest priority first:
    /// search, settings, detail, then the list. Popups for errors and
    /// warnings sit above all of these and are handled by the caller.
    pub fn focus_target(&self) -> ComponentId {
        if self.search.is_open() {
            ComponentId::SearchPopup
        } else if self.settings.is_open() {
            ComponentId::SettingsPopup
        } else if self.detail.is_open() {
            ComponentId::DetailPopup
        } else {
            ComponentId::BookList
        }
    }

    /// Returns whether the phase changed.
    fn open(phase: &mut OverlayPhase) -> bool {
        let changed = *phase == OverlayPhase::Closed;
        *phase = OverlayPhase::Open;
        changed
    }

    fn close(phase: &mut OverlayPhase) -> bool {
        let changed = *phase == OverlayPhase::Open;
        *phase = OverlayPhase::Closed;
        changed
    }
}
