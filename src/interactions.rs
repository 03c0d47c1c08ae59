use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Hitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Where each field was last drawn, keyed by field id.
pub struct FieldHitboxes {
    hitboxes: RwLock<HashMap<String, Hitbox>>,
}

impl FieldHitboxes {
    fn new() -> Self {
        Self {
            hitboxes: RwLock::new(HashMap::new()),
        }
    }

    fn global() -> &'static Self {
        static REGISTRY: OnceLock<FieldHitboxes> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    pub fn record(id: &str, hitbox: Hitbox) {
        Self::global()
            .hitboxes
            .write()
            .insert(id.to_string(), hitbox);
    }

    pub fn get(id: &str) -> Option<Hitbox> {
        Self::global().hitboxes.read().get(id).copied()
    }

    /// `None` when the field has not been drawn yet.
    pub fn contains(id: &str, column: u16, row: u16) -> Option<bool> {
        Self::get(id).map(|hitbox| hitbox.contains(column, row))
    }
}
