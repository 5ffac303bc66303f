//! Entity → cell index registry, rebuilt alongside the scene.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::data::CellIndex;

/// A pickable front-layer cell and its world-space box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisteredCell {
    pub index: CellIndex,
    pub value: f32,
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl RegisteredCell {
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Front-layer cells of the current scene, keyed by entity.
///
/// A rebuild installs a fresh registry with the next generation; entries are
/// never carried over, so a lookup can never resolve a despawned entity from
/// an older scene.
#[derive(Resource, Debug, Default)]
pub struct CellRegistry {
    entries: HashMap<Entity, RegisteredCell>,
    generation: u64,
}

impl CellRegistry {
    pub fn with_generation(generation: u64) -> Self {
        Self {
            entries: HashMap::new(),
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn insert(&mut self, entity: Entity, cell: RegisteredCell) {
        self.entries.insert(entity, cell);
    }

    pub fn get(&self, entity: Entity) -> Option<&RegisteredCell> {
        self.entries.get(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &RegisteredCell)> {
        self.entries.iter().map(|(entity, cell)| (*entity, cell))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the last rebuild produced, for the control panel.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SceneSummary {
    /// `[H, B, S, D]`.
    pub shape_label: String,
    pub cells: usize,
    pub ghosts: usize,
    /// Radius of the laid-out scene around the origin.
    pub extent: f32,
    pub rebuilds: u64,
}
