use crate::app::overlays::OverlayState;
use crate::app::renderer::CatalogRenderer;
use crate::components::common::{ComponentId, Msg};
use crate::config::keys::KeyBindingsConfig;
use crate::error::ErrorReporter;
use std::sync::mpsc::{Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod popup_management;
mod update_handler;
mod view;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    /// Catalog store plus the list it paints
    pub renderer: CatalogRenderer,
    pub overlays: OverlayState,
    pub keys: KeyBindingsConfig,
    pub active_component: ComponentId,

    pub error_reporter: ErrorReporter,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Messages queued by the error reporter
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
