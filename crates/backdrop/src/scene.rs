//! The two animated sections of the screen and their canvases.

use backdrop_config::Config;
use backdrop_core::Theme;
use backdrop_field::{
    Animation, Blob, CellCanvas, Entity, Field, FieldError, Point, StopHandle, Surface, Xorshift64,
};
use log::debug;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
};

/// Screen regions: hero field, about field and the help line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub hero: Rect,
    pub about: Rect,
    pub help: Rect,
}

impl Sections {
    /// Split the terminal area into sections.
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Fill(3),   // Hero
            Constraint::Fill(2),   // About
            Constraint::Length(1), // Help text
        ])
        .split(area);
        Self {
            hero: chunks[0],
            about: chunks[1],
            help: chunks[2],
        }
    }
}

/// An animation drawing into the canvas that covers one screen region.
#[derive(Debug)]
pub struct Section<E: Entity> {
    animation: Animation<E>,
    canvas: CellCanvas,
    area: Rect,
}

impl<E: Entity> Section<E> {
    fn new(
        count: usize,
        options: E::Options,
        area: Rect,
        cell: (u16, u16),
        theme: Theme,
        rng: &mut Xorshift64,
    ) -> Result<Self, FieldError> {
        let canvas = CellCanvas::new(area.width, area.height, cell.0, cell.1, theme.background());
        let field = Field::new(count, canvas.size(), options, rng)?;
        let mut section = Self {
            animation: Animation::new(field),
            canvas,
            area,
        };
        section.animation.redraw(&mut section.canvas);
        Ok(section)
    }

    /// Follow a layout change: reallocate the canvas and hand the field
    /// its new bounds. Entities are not touched.
    fn place(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        self.area = area;
        self.canvas.resize(area.width, area.height);
        self.animation.field_mut().resize(self.canvas.size());
        self.animation.redraw(&mut self.canvas);
    }

    fn tick(&mut self) -> bool {
        self.animation.tick(&mut self.canvas)
    }

    fn set_theme(&mut self, theme: Theme) {
        self.canvas.set_background(theme.background());
        self.animation.redraw(&mut self.canvas);
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.canvas.to_lines()), self.area);
    }

    pub fn handle(&self) -> StopHandle {
        self.animation.handle()
    }

    pub fn animation(&self) -> &Animation<E> {
        &self.animation
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

/// Both animated sections.
#[derive(Debug)]
pub struct Scene {
    pub hero: Section<Point>,
    pub about: Section<Blob>,
    sections: Sections,
}

impl Scene {
    /// Spawn both fields for a terminal of size `area`.
    pub fn new(config: &Config, area: Rect, theme: Theme) -> Result<Self, FieldError> {
        let mut rng = config
            .seed
            .map(Xorshift64::new)
            .unwrap_or_else(Xorshift64::from_clock);
        let cell = (config.cell.width, config.cell.height);
        let sections = Sections::split(area);

        let hero = Section::<Point>::new(
            config.points.count,
            config.points.options(),
            sections.hero,
            cell,
            theme,
            &mut rng,
        )?;
        let about = Section::<Blob>::new(
            config.blobs.count,
            config.blobs.options(),
            sections.about,
            cell,
            theme,
            &mut rng,
        )?;

        Ok(Self {
            hero,
            about,
            sections,
        })
    }

    /// Recompute the layout for a new terminal size.
    pub fn resize(&mut self, area: Rect) {
        let sections = Sections::split(area);
        if sections == self.sections {
            return;
        }
        debug!("terminal resized to {}x{}", area.width, area.height);
        self.sections = sections;
        self.hero.place(sections.hero);
        self.about.place(sections.about);
    }

    /// Run one frame of every running field.
    pub fn tick(&mut self) {
        self.hero.tick();
        self.about.tick();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.hero.set_theme(theme);
        self.about.set_theme(theme);
    }

    pub fn sections(&self) -> Sections {
        self.sections
    }

    /// Draw both canvases.
    pub fn render(&self, frame: &mut Frame) {
        self.hero.render(frame);
        self.about.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            seed: Some(7),
            ..Config::default()
        }
    }

    fn positions(scene: &Scene) -> Vec<backdrop_core::Vec2> {
        scene
            .hero
            .animation()
            .field()
            .entities()
            .iter()
            .map(|p| p.motion.position)
            .collect()
    }

    #[test]
    fn test_sections_cover_area() {
        let sections = Sections::split(Rect::new(0, 0, 100, 41));
        assert_eq!(sections.hero.height + sections.about.height + sections.help.height, 41);
        assert_eq!(sections.help.height, 1);
        assert!(sections.hero.height > sections.about.height);
    }

    #[test]
    fn test_scene_counts_and_viewports() {
        let scene = Scene::new(&config(), Rect::new(0, 0, 100, 41), Theme::Dark).unwrap();
        let hero = scene.hero.animation().field();
        let about = scene.about.animation().field();

        assert_eq!(hero.len(), 90);
        assert_eq!(about.len(), 8);
        assert_eq!(hero.viewport().width, 800);
        assert_eq!(
            hero.viewport().height,
            u32::from(scene.sections().hero.height) * 16
        );
    }

    #[test]
    fn test_resize_updates_bounds_only() {
        let mut scene = Scene::new(&config(), Rect::new(0, 0, 100, 41), Theme::Dark).unwrap();
        let before = positions(&scene);

        scene.resize(Rect::new(0, 0, 50, 21));

        assert_eq!(positions(&scene), before);
        assert_eq!(scene.hero.animation().field().viewport().width, 400);
        assert_eq!(scene.hero.area(), scene.sections().hero);
        assert_eq!(scene.hero.animation().field().len(), 90);
    }

    #[test]
    fn test_tick_respects_handles() {
        let mut scene = Scene::new(&config(), Rect::new(0, 0, 100, 41), Theme::Dark).unwrap();
        scene.hero.handle().stop();

        scene.tick();

        assert_eq!(scene.hero.animation().frames(), 0);
        assert_eq!(scene.about.animation().frames(), 1);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Scene::new(&config(), Rect::new(0, 0, 100, 41), Theme::Dark).unwrap();
        let b = Scene::new(&config(), Rect::new(0, 0, 100, 41), Theme::Light).unwrap();
        assert_eq!(positions(&a), positions(&b));
    }
}
