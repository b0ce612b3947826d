//! Every level of the game and which one is being played.

use crate::error::LevelError;
use crate::loader::json_loader::decode_level_file_to_ir;
use crate::mapping::TileMapping;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of level `id` inside the level directory (`level_1.tmj` for id 0).
pub fn level_file_name(id: usize) -> String {
    format!("level_{}.tmj", id + 1)
}

/// Full path of level `id` inside `dir`.
pub fn level_path(dir: &Path, id: usize) -> PathBuf {
    dir.join(level_file_name(id))
}

/// Owns every decoded level and tracks which one is being played.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: BTreeMap<usize, TileMapping>,
    active_id: usize,
    active: TileMapping,
    finished: bool,
}

impl LevelRegistry {
    /// Builds a registry from decoded levels and activates level 0.
    pub fn new(levels: BTreeMap<usize, TileMapping>) -> Result<Self, LevelError> {
        let active = levels
            .get(&0)
            .cloned()
            .ok_or_else(|| LevelError::InvalidLevel("no level with id 0".into()))?;
        Ok(Self {
            levels,
            active_id: 0,
            active,
            finished: false,
        })
    }

    /// Starts an empty set of levels to load before play begins.
    pub fn builder() -> LevelRegistryBuilder {
        LevelRegistryBuilder::default()
    }

    /// Loads `count` levels from `dir` by naming convention.
    pub fn load_dir(dir: impl AsRef<Path>, count: usize) -> Result<Self, LevelError> {
        let dir = dir.as_ref();
        let mut builder = Self::builder();
        for id in 0..count {
            builder.load(id, level_path(dir, id))?;
        }
        info!(count, dir = %dir.display(), "levels_loaded");
        builder.build()
    }

    /// Switches the active level. Callers only pass ids they got from this
    /// registry; an unknown id leaves the registry untouched.
    pub fn activate(&mut self, level_id: usize) {
        let Some(level) = self.levels.get(&level_id) else {
            debug!(level_id, "activate_unknown_level");
            return;
        };
        self.active = level.clone();
        self.active_id = level_id;
        info!(level_id, "level_activated");
    }

    /// Moves on after the goal is reached. On the last level this only
    /// marks the run as finished.
    pub fn advance(&mut self) {
        if self.is_last() {
            self.finished = true;
            info!(level_id = self.active_id, "all_levels_finished");
        } else {
            self.activate(self.active_id + 1);
        }
    }

    /// Geometry of the level being played.
    pub fn active(&self) -> &TileMapping {
        &self.active
    }

    /// Id of the level being played.
    pub fn active_id(&self) -> usize {
        self.active_id
    }

    /// Set once the goal of the last level has been reached.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Number of levels held.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a built registry.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Geometry of level `level_id`, if held.
    pub fn get(&self, level_id: usize) -> Option<&TileMapping> {
        self.levels.get(&level_id)
    }

    fn is_last(&self) -> bool {
        self.levels
            .keys()
            .next_back()
            .map_or(true, |&last| self.active_id >= last)
    }
}

/// Collects decoded levels before a [`LevelRegistry`] is built. The set of
/// levels is fixed once `build` is called.
#[derive(Debug, Clone, Default)]
pub struct LevelRegistryBuilder {
    levels: BTreeMap<usize, TileMapping>,
}

impl LevelRegistryBuilder {
    /// Decodes `source` and stores it under `level_id`, replacing any
    /// level loaded earlier with that id.
    pub fn load(
        &mut self,
        level_id: usize,
        source: impl AsRef<Path>,
    ) -> Result<&mut Self, LevelError> {
        let source = source.as_ref();
        let ir = decode_level_file_to_ir(source)?;
        let mapping = TileMapping::from_ir(&ir);
        info!(
            level_id,
            path = %source.display(),
            cells = mapping.len(),
            solids = mapping.collision_rects.len(),
            "level_loaded"
        );
        self.levels.insert(level_id, mapping);
        Ok(self)
    }

    /// Stores an already decoded level under `level_id`.
    pub fn insert(&mut self, level_id: usize, mapping: TileMapping) -> &mut Self {
        self.levels.insert(level_id, mapping);
        self
    }

    /// Freezes the loaded levels and activates level 0.
    pub fn build(self) -> Result<LevelRegistry, LevelError> {
        LevelRegistry::new(self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::json_loader::decode_level_str_to_ir;
    use std::fs;

    fn level_json(first_gid: u32) -> String {
        format!(
            r#"{{
              "tilewidth": 16, "tileheight": 16,
              "layers": [ {{ "type": "tilelayer", "width": 2, "height": 1, "data": [{first_gid}, 16] }} ],
              "tilesets": [ {{ "imagewidth": 160 }} ]
            }}"#
        )
    }

    fn write_levels(dir: &Path, count: usize) {
        for id in 0..count {
            fs::write(level_path(dir, id), level_json(id as u32 + 1)).expect("write level");
        }
    }

    #[test]
    fn names_levels_one_based() {
        assert_eq!(level_file_name(0), "level_1.tmj");
        assert_eq!(level_file_name(15), "level_16.tmj");
    }

    #[test]
    fn load_dir_activates_first_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 3);

        let registry = LevelRegistry::load_dir(dir.path(), 3).expect("load");

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.active_id(), 0);
        assert_eq!(registry.active(), registry.get(0).expect("level 0"));
        assert!(!registry.finished());
    }

    #[test]
    fn load_dir_fails_on_missing_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 2);

        let err = LevelRegistry::load_dir(dir.path(), 3).expect_err("level 3 is missing");
        assert!(matches!(err, LevelError::Io { .. }));
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert!(LevelRegistry::new(BTreeMap::new()).is_err());
    }

    #[test]
    fn advance_steps_through_levels_then_finishes() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 2);
        let mut registry = LevelRegistry::load_dir(dir.path(), 2).expect("load");

        registry.advance();
        assert_eq!(registry.active_id(), 1);
        assert_eq!(registry.active(), registry.get(1).expect("level 1"));
        assert!(!registry.finished());

        registry.advance();
        assert_eq!(registry.active_id(), 1);
        assert!(registry.finished());
    }

    #[test]
    fn activate_unknown_level_changes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 1);
        let mut registry = LevelRegistry::load_dir(dir.path(), 1).expect("load");
        let before = registry.active().clone();

        registry.activate(7);

        assert_eq!(registry.active_id(), 0);
        assert_eq!(registry.active(), &before);
    }

    #[test]
    fn later_load_replaces_pending_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 1);
        let replacement = dir.path().join("replacement.tmj");
        fs::write(&replacement, level_json(9)).expect("write level");

        let mut builder = LevelRegistry::builder();
        builder
            .load(0, level_path(dir.path(), 0))
            .expect("load")
            .load(0, &replacement)
            .expect("reload");
        let registry = builder.build().expect("build");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active().gids[0].raw(), 9);
    }

    #[test]
    fn only_activate_swaps_the_active_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_levels(dir.path(), 2);
        let mut registry = LevelRegistry::load_dir(dir.path(), 2).expect("load");
        let first = registry.active().clone();

        registry.activate(1);
        assert_eq!(registry.active_id(), 1);
        assert_eq!(registry.active().gids[0].raw(), 2);

        registry.activate(0);
        assert_eq!(registry.active(), &first);
    }

    #[test]
    fn builder_without_level_zero_fails() {
        let ir = decode_level_str_to_ir(&level_json(1)).expect("decode");
        let mut builder = LevelRegistry::builder();
        builder.insert(1, TileMapping::from_ir(&ir));

        assert!(matches!(builder.build(), Err(LevelError::InvalidLevel(_))));
    }
}
