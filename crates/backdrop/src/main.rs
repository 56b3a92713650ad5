use std::path::PathBuf;
use std::time::Instant;

use backdrop_config::{Config, config_path, save_theme};
use backdrop_core::Theme;
use backdrop_field::FramePacer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

mod logging;
mod scene;

use scene::Scene;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    match logging::init() {
        Ok(path) => info!("logging to {}", path.display()),
        Err(e) => eprintln!("backdrop: file logging disabled: {e}"),
    }

    let config = Config::load();
    let config_path = match config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("{e}; theme changes will not be saved");
            None
        }
    };

    let terminal = ratatui::try_init()?;
    let result = run(config, config_path, terminal);
    ratatui::restore();
    result
}

fn run(
    config: Config,
    config_path: Option<PathBuf>,
    terminal: DefaultTerminal,
) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    App::new(config, config_path, area)?.run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current display theme.
    theme: Theme,
    /// Where the theme preference is saved, if anywhere.
    config_path: Option<PathBuf>,
    /// Heading over the point field.
    title: String,
    /// Line over the blob field.
    tagline: String,
    /// Both animated fields.
    scene: Scene,
    /// Frame schedule shared by both fields.
    pacer: FramePacer,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of size `area`.
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        area: Rect,
    ) -> color_eyre::Result<Self> {
        let scene = Scene::new(&config, area, config.theme)?;
        info!(
            "started with {} points and {} blobs at {} fps",
            config.points.count, config.blobs.count, config.fps
        );
        Ok(Self {
            running: false,
            theme: config.theme,
            config_path,
            title: config.title,
            tagline: config.tagline,
            scene,
            pacer: FramePacer::new(config.fps, Instant::now()),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = Instant::now();
            if self.pacer.is_due(now) {
                self.scene.tick();
                self.pacer.advance(now);
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!("exiting");
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.scene.render(frame);

        let sections = self.scene.sections();
        let accent = self.theme.accent().color();
        let foreground = self.theme.foreground().color();
        let muted = self.theme.muted().color();

        // Title centered over the point field
        let [_, title_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(self.scene.hero.area());
        let title = Paragraph::new(self.title.as_str().bold().fg(accent))
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        // Tagline centered over the blob field
        let [_, tagline_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(sections.about);
        let tagline = Paragraph::new(self.tagline.as_str().fg(foreground))
            .alignment(Alignment::Center);
        frame.render_widget(tagline, tagline_area);

        // Render help text
        let mut spans: Vec<Span> = vec![
            "q".bold().fg(accent),
            " quit  ".fg(muted),
            "t".bold().fg(accent),
            format!(" theme {}  ", self.theme.symbol()).fg(muted),
            "space".bold().fg(accent),
            " pause  ".fg(muted),
            "1".bold().fg(accent),
            " hero  ".fg(muted),
            "2".bold().fg(accent),
            " about".fg(muted),
        ];
        if !self.scene.hero.animation().is_running() {
            spans.push("  [hero paused]".fg(foreground));
        }
        if !self.scene.about.animation().is_running() {
            spans.push("  [about paused]".fg(foreground));
        }
        let help = Paragraph::new(Line::from(spans).centered())
            .style(Style::new().bg(self.theme.background().color()));
        frame.render_widget(help, sections.help);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.pacer.until_next(Instant::now());
        if event::poll(timeout)? {
            self.on_event(event::read()?);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(width, height) => self.scene.resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char(' ')) => self.toggle_all(),
            (_, KeyCode::Char('1')) => self.toggle_hero(),
            (_, KeyCode::Char('2')) => self.toggle_about(),
            _ => {}
        }
    }

    /// Switch theme and remember the choice.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.scene.set_theme(self.theme);
        info!("theme set to {:?}", self.theme);

        if let Some(path) = &self.config_path
            && let Err(e) = save_theme(path, self.theme)
        {
            warn!("could not save theme: {e}");
        }
    }

    /// Pause both fields if either is running, otherwise resume both.
    fn toggle_all(&mut self) {
        let hero = self.scene.hero.handle();
        let about = self.scene.about.handle();
        if hero.is_running() || about.is_running() {
            hero.stop();
            about.stop();
        } else {
            hero.start();
            about.start();
            self.pacer.reset(Instant::now());
        }
    }

    fn toggle_hero(&mut self) {
        if self.scene.hero.handle().toggle() {
            self.pacer.reset(Instant::now());
        }
    }

    fn toggle_about(&mut self) {
        if self.scene.about.handle().toggle() {
            self.pacer.reset(Instant::now());
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
