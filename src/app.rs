use crate::chooser::{DirectoryChooser, SelectionResult};
use crate::config::Config;
use crate::screens::{ChooserScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::tui::Tui;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// How long the event loop waits for input before running background work
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    config: Config,
    tui: Tui,
    screen: ChooserScreen,
}

impl App {
    /// Create the app showing `start_dir`, offering to create
    /// `new_dir_name` when given.
    pub fn new(config: Config, start_dir: PathBuf, new_dir_name: Option<String>) -> Result<Self> {
        let chooser = DirectoryChooser::open(&start_dir, new_dir_name);
        if chooser.current_dir().is_none() {
            error!("Could not open start directory {:?}", start_dir);
        }
        let screen = ChooserScreen::new(chooser, config.toast_duration());
        let tui = Tui::new()?;

        Ok(Self {
            config,
            tui,
            screen,
        })
    }

    /// Run until the user chooses a directory or cancels
    pub fn run(&mut self) -> Result<SelectionResult> {
        self.tui.enter()?;
        let result = self.event_loop();
        // Terminal goes back to normal even when the loop failed
        let exited = self.tui.exit();
        let result = result?;
        exited?;
        info!("Finished with {:?}", result);
        Ok(result)
    }

    fn event_loop(&mut self) -> Result<SelectionResult> {
        self.screen.on_enter(&ScreenContext::new(&self.config))?;

        let mut needs_redraw = true;
        loop {
            if self.screen.tick() {
                needs_redraw = true;
            }
            if needs_redraw {
                self.draw()?;
                needs_redraw = false;
            }

            // Poll for events with 250ms timeout
            let Some(event) = self.tui.poll_event(POLL_INTERVAL)? else {
                continue;
            };

            let ctx = ScreenContext::new(&self.config);
            if let ScreenAction::Finish(result) = self.screen.handle_event(event, &ctx)? {
                self.screen.on_exit(&ctx)?;
                return Ok(result);
            }
            // Keys, focus changes and resizes can all alter the frame
            needs_redraw = true;
        }
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = RenderContext::new(&self.config);
        let screen = &mut self.screen;
        let mut render_result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            render_result = screen.render(frame, area, &ctx);
        })?;
        render_result
    }
}
