use super::Model;
use crate::app::overlays::OverlayState;
use crate::app::renderer::CatalogRenderer;
use crate::components::book_list::BookList;
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::reactive::ReactiveHost;
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::components::toggle_theme::ToggleTheme;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use std::sync::mpsc;
use tuirealm::event::{Key, KeyEvent, KeyModifiers, NoUserEvent};
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

pub const HEADER_TEXT: &str = "📚 Folio";

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Builds the model around an already-constructed terminal. Input comes
    /// from whatever ports `listener` carries.
    pub fn with_terminal(
        mut renderer: CatalogRenderer,
        config: &AppConfig,
        terminal: TerminalBridge<T>,
        listener: EventListenerCfg<NoUserEvent>,
    ) -> AppResult<Self> {
        renderer.initial_render()?;

        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        Ok(Self {
            app: Self::init_app(config, &renderer, listener)?,
            quit: false,
            redraw: true,
            terminal,
            tx_to_main,
            rx_to_main,
            renderer,
            overlays: OverlayState::default(),
            keys: config.keys().clone(),
            active_component: ComponentId::BookList,
            error_reporter,
        })
    }

    fn init_app(
        config: &AppConfig,
        renderer: &CatalogRenderer,
        listener: EventListenerCfg<NoUserEvent>,
    ) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(listener);

        app.mount(
            ComponentId::TextLabel,
            Box::new(TextLabel::new(HEADER_TEXT)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount_with_state(
            ComponentId::ToggleTheme,
            ReactiveHost::new(ToggleTheme::new(config.keys().toggle_theme()))
                .with_policy(config.ui().render_policy()),
            Self::toggle_theme_subscriptions(config.keys().toggle_theme()),
        )?;

        app.mount_with_state(
            ComponentId::BookList,
            BookList::new(renderer.snapshot(), 0, config.keys()),
            Vec::default(),
        )?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::new(config.keys().clone(), false)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::BookList)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    /// The toggle key reaches the button from anywhere except the forms,
    /// where it is ordinary input.
    pub(super) fn toggle_theme_subscriptions(key: char) -> Vec<Sub<ComponentId, NoUserEvent>> {
        let form_open = SubClause::Or(
            Box::new(SubClause::IsMounted(ComponentId::SearchPopup)),
            Box::new(SubClause::IsMounted(ComponentId::SettingsPopup)),
        );
        vec![Sub::new(
            SubEventClause::Keyboard(KeyEvent::new(Key::Char(key), KeyModifiers::NONE)),
            SubClause::Not(Box::new(form_open)),
        )]
    }
}

impl Model<CrosstermTerminalAdapter> {
    /// Paints the first page and builds the application around `renderer`,
    /// reading keys from the crossterm input listener.
    pub fn new(renderer: CatalogRenderer, config: &AppConfig) -> AppResult<Self> {
        let terminal =
            TerminalBridge::init_crossterm().map_err(|e| AppError::Component(e.to_string()))?;
        let listener = EventListenerCfg::default()
            .crossterm_input_listener(
                config.crossterm_input_listener_interval(),
                config.crossterm_input_listener_retries(),
            )
            .poll_timeout(config.poll_timeout())
            .tick_interval(config.tick_interval());

        Self::with_terminal(renderer, config, terminal, listener)
    }
}
