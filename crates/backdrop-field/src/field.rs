//! A field of independently moving entities bounded by a viewport.

use std::collections::HashSet;

use backdrop_core::Viewport;
use log::{debug, warn};

use crate::entity::Entity;
use crate::error::FieldError;
use crate::rng::Xorshift64;
use crate::surface::Surface;

/// Owns a fixed set of entities and the viewport they bounce inside.
///
/// Entities are spawned once. Resizing only changes the bounds used by
/// later update steps; it never moves, adds or removes an entity.
#[derive(Debug)]
pub struct Field<E: Entity> {
    entities: Vec<E>,
    viewport: Viewport,
    options: E::Options,
    /// Indices already reported as invalid, so each is logged once.
    reported: HashSet<usize>,
}

impl<E: Entity> Field<E> {
    /// Spawn `count` entities at random positions inside `viewport`.
    pub fn new(
        count: usize,
        viewport: Viewport,
        options: E::Options,
        rng: &mut Xorshift64,
    ) -> Result<Self, FieldError> {
        E::validate(&options)?;
        let entities = (0..count)
            .map(|i| E::spawn(i, viewport, &options, rng))
            .collect();
        debug!(
            "spawned {count} {} in {}x{}",
            std::any::type_name::<E>(),
            viewport.width,
            viewport.height
        );
        Ok(Self::from_entities(entities, viewport, options))
    }

    /// Build a field from entities that already exist.
    pub fn from_entities(entities: Vec<E>, viewport: Viewport, options: E::Options) -> Self {
        Self {
            entities,
            viewport,
            options,
            reported: HashSet::new(),
        }
    }

    /// Change the bounds used by future update steps.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                "field resized {}x{} -> {}x{}",
                self.viewport.width, self.viewport.height, viewport.width, viewport.height
            );
            self.viewport = viewport;
        }
    }

    /// Move every entity one frame. Invalid entities are left alone.
    pub fn update(&mut self) {
        let viewport = self.viewport;
        for (i, entity) in self.entities.iter_mut().enumerate() {
            if !entity.is_valid() {
                if self.reported.insert(i) {
                    warn!("skipping invalid entity {i}: {:?}", entity.motion());
                }
                continue;
            }
            entity.update(viewport);
        }
    }

    /// Draw every entity without moving anything.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        E::render_all(&self.entities, &self.options, surface);
    }

    /// One full frame: clear, update, render.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.update();
        self.render(surface);
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Mutable access to individual entities. The count cannot change.
    pub fn entities_mut(&mut self) -> &mut [E] {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
