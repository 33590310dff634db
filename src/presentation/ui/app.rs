//! Main application orchestrator.

use crossterm::event::{Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::application::{CalculatorService, CalculatorState};
use crate::infrastructure::AppConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{CalculatorScreen, ScreenEvent};

/// Owns the calculator snapshot, the screen, and the event loop.
pub struct App {
    theme: Theme,
    state: CalculatorState,
    screen: CalculatorScreen,
    events: EventHandler,
}

impl App {
    /// Builds the app from loaded configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let state = CalculatorState::with_defaults(
            config.ui.overlay_16ths,
            config.ui.split_doors,
            config.ui.center_gap_16ths,
        );

        Self {
            theme: Theme::new(&config.theme.accent_color),
            state,
            screen: CalculatorScreen::new(),
            events: EventHandler::new(),
        }
    }

    /// Runs the draw/poll/reduce loop until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        loop {
            let summary = CalculatorService::summarize(&self.state);
            terminal.draw(|frame| self.screen.render(&self.state, &summary, &self.theme, frame))?;

            let Some(event) = self.events.poll()? else {
                continue;
            };

            match event {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match self.screen.handle_key(key, &self.state) {
                        ScreenEvent::Exit => break,
                        ScreenEvent::Calc(calc_event) => {
                            debug!(?calc_event, "Applying calculator event");
                            self.state = CalculatorService::reduce(self.state, calc_event);
                        }
                        ScreenEvent::None => {}
                    }
                }
                _ => {}
            }
        }

        info!("Application exiting normally");
        Ok(())
    }
}
