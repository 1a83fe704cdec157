mod canvas;
mod logging;
mod scheduler;
mod terminal_geometry;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use orbfield_config::AppConfig;
use orbfield_core::{FieldConfig, Geometry, Preset};
use orbfield_field::{DiscBuffer, FieldRenderer};
use orbfield_viewport::{GeometryCell, GeometrySource, ViewportTracker};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use tracing::{info, warn};

use crate::canvas::FieldCanvas;
use crate::scheduler::{Due, Scheduler};
use crate::terminal_geometry::TerminalGeometry;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Load first since the log filter comes from the config; the outcome
    // is reported once the subscriber is installed.
    let loaded = orbfield_config::load_default();
    let config = match &loaded {
        Ok((config, _)) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("orbfield: logging disabled: {e}");
    }
    info!("orbfield v{} starting", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok((config, origin)) => info!("{origin} (preset: {})", config.preset.name()),
        Err(e) => warn!("config load failed, using defaults: {e}"),
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App<G = TerminalGeometry> {
    /// Is the application running?
    running: bool,
    config: AppConfig,
    /// Currently selected preset.
    preset: Preset,
    renderer: FieldRenderer,
    tracker: ViewportTracker<G>,
    /// Drawing surface the renderer writes into.
    surface: DiscBuffer,
    rng: StdRng,
    scheduler: Scheduler,
    /// Geometry must be re-read before the next frame.
    geometry_stale: bool,
    show_help: bool,
}

impl App {
    /// Construct a new instance of [`App`] over the controlling terminal.
    pub fn new(config: AppConfig) -> Self {
        Self::with_source(config, TerminalGeometry::new())
    }
}

impl<G: GeometrySource> App<G> {
    pub fn with_source(config: AppConfig, source: G) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scheduler = Scheduler::new(
            config.render_interval(),
            config.geometry_interval(),
            Instant::now(),
        );
        let tracker = ViewportTracker::new(source, GeometryCell::default());

        Self {
            running: false,
            preset: config.preset,
            renderer: FieldRenderer::new(config.field()),
            tracker,
            surface: DiscBuffer::new(),
            rng,
            scheduler,
            geometry_stale: true,
            show_help: true,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let due = self.scheduler.poll(Instant::now());
            if self.step(due) {
                self.draw(&mut terminal)?;
            }

            let timeout = self.scheduler.timeout(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.on_event(event);
            }
        }
        Ok(())
    }

    /// Act on the timers that fell due this turn.
    ///
    /// Re-reads geometry when its tick is due or a resize made it stale.
    /// Returns whether to draw; a geometry update always draws, and at most
    /// one frame is drawn per turn.
    fn step(&mut self, due: Due) -> bool {
        if due.geometry || self.geometry_stale {
            self.tracker.update(&mut self.surface);
            self.geometry_stale = false;
            return true;
        }
        due.render
    }

    /// Compute a frame from the current time and put it on screen.
    fn draw(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let now_ms = Utc::now().timestamp_millis() as f64;
        let geometry = self.compose(now_ms);
        terminal.draw(|frame| self.render(frame, &geometry))?;
        Ok(())
    }

    /// Render the field at `t_ms` into the surface using the latest geometry.
    fn compose(&mut self, t_ms: f64) -> Arc<Geometry> {
        let geometry = self.tracker.cell().snapshot();
        self.renderer
            .render(&mut self.surface, &geometry, t_ms, &mut self.rng);
        geometry
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame, geometry: &Geometry) {
        let area = frame.area();
        frame.render_widget(FieldCanvas::new(&self.surface, geometry.window), area);

        if !self.show_help {
            return;
        }
        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
        let field = self.renderer.config();
        let help = Line::from(vec![
            "q".bold().white(),
            " quit  ".dark_gray(),
            "p".bold().white(),
            format!(" preset ({})  ", self.preset.name()).dark_gray(),
            "l".bold().white(),
            format!(" dust ({})  ", field.dust_law.name()).dark_gray(),
            "h".bold().white(),
            " hide help".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Updates the state of [`App`] from a crossterm event.
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(_, _) => self.geometry_stale = true,
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.cycle_preset(),
            (_, KeyCode::Char('l')) => self.toggle_dust_law(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Switch to the next preset, keeping the config file's overrides.
    fn cycle_preset(&mut self) {
        self.preset = self.preset.next();
        let field = self.config.field.apply(self.preset.field());
        let field = match field.validate() {
            Ok(()) => field,
            Err(e) => {
                warn!("overrides invalid for preset {}: {e}", self.preset.name());
                self.preset.field()
            }
        };
        info!("switched to preset {}", self.preset.name());
        self.renderer.set_config(field);
    }

    /// Flip between the banded and wave dust laws.
    fn toggle_dust_law(&mut self) {
        let current = *self.renderer.config();
        let field = FieldConfig {
            dust_law: current.dust_law.toggle(),
            ..current
        };
        let field = match field.validate() {
            Ok(()) => field,
            Err(e) => {
                warn!("cannot switch dust law: {e}");
                current
            }
        };
        self.renderer.set_config(field);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
