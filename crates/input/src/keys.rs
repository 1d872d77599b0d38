use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Logical keys the camera reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    RollLeft,
    RollRight,
    /// Held to switch from normal to sprint speed.
    Sprint,
}

/// Set of currently held logical keys.
///
/// Backed by a `BTreeSet` so iteration order is stable across platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    held: BTreeSet<CameraKey>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Returns `false` if it already was.
    pub fn press(&mut self, key: CameraKey) -> bool {
        self.held.insert(key)
    }

    /// Mark a key as released. Returns `false` if it was not held.
    pub fn release(&mut self, key: CameraKey) -> bool {
        self.held.remove(&key)
    }

    /// Release everything (focus lost, pointer lock released).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn contains(&self, key: CameraKey) -> bool {
        self.held.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CameraKey> + '_ {
        self.held.iter().copied()
    }
}

impl FromIterator<CameraKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = CameraKey>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Mapping from key names (as reported by the windowing layer) to logical
/// keys. Names are matched case-insensitively.
///
/// Serializes as a plain map so bindings stay readable in YAML:
/// ```yaml
/// w: forward
/// shift: sprint
/// " ": up
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: BTreeMap<String, CameraKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let map = [
            ("w", CameraKey::Forward),
            ("s", CameraKey::Backward),
            ("a", CameraKey::Left),
            ("d", CameraKey::Right),
            (" ", CameraKey::Up),
            ("control", CameraKey::Down),
            ("q", CameraKey::RollLeft),
            ("e", CameraKey::RollRight),
            ("shift", CameraKey::Sprint),
        ]
        .into_iter()
        .map(|(name, key)| (name.to_owned(), key))
        .collect();
        Self { map }
    }
}

impl KeyBindings {
    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Bind `name` to `key`, returning the key it was previously bound to.
    pub fn bind(&mut self, name: &str, key: CameraKey) -> Option<CameraKey> {
        self.map.insert(name.to_lowercase(), key)
    }

    pub fn unbind(&mut self, name: &str) -> Option<CameraKey> {
        self.map.remove(&name.to_lowercase())
    }

    pub fn resolve(&self, name: &str) -> Option<CameraKey> {
        self.map.get(&name.to_lowercase()).copied()
    }
}
