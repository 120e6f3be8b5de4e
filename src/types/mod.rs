//! Shared types used throughout the library.

mod direction;
mod face_set;
mod world;

pub use direction::Direction;
pub use face_set::FaceSet;
pub use world::BlockMap;

use glam::DVec3;
use std::collections::HashMap;

/// A block position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block containing a continuous point, such as a player's eye.
    pub fn containing(point: DVec3) -> Self {
        let floored = point.floor();
        Self {
            x: floored.x as i32,
            y: floored.y as i32,
            z: floored.z as i32,
        }
    }

    /// Get the neighboring position in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// Squared distance between the minimum corners of two blocks.
    pub fn distance_squared(&self, other: BlockPosition) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        dx * dx + dy * dy + dz * dz
    }
}

impl std::fmt::Display for BlockPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A block as reported by the host world, compatible with Minecraft block states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBlock {
    /// Block name, e.g., "minecraft:oak_stairs"
    pub name: String,
    /// Block properties, e.g., {"facing": "north"}
    pub properties: HashMap<String, String>,
}

impl InputBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: normalize_name(&name.into()),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get the namespace (e.g., "minecraft").
    pub fn namespace(&self) -> &str {
        self.name.split(':').next().unwrap_or("minecraft")
    }

    /// Get the block ID without namespace (e.g., "stone").
    pub fn block_id(&self) -> &str {
        block_id(&self.name)
    }

    /// Look up a property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Read a boolean property, treating anything but "true" as false.
    pub fn flag(&self, key: &str) -> bool {
        self.property(key) == Some("true")
    }

    /// Read a direction property.
    pub fn direction(&self, key: &str) -> Option<Direction> {
        self.property(key).and_then(Direction::from_str)
    }

    /// Check if this is an air block.
    pub fn is_air(&self) -> bool {
        matches!(
            self.name.as_str(),
            "minecraft:air" | "minecraft:cave_air" | "minecraft:void_air" | "air"
        )
    }
}

/// Add the `minecraft:` namespace to a bare block name and lowercase it.
pub fn normalize_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    if name.contains(':') {
        name
    } else {
        format!("minecraft:{}", name)
    }
}

/// Strip the namespace from a block name.
pub fn block_id(name: &str) -> &str {
    name.split(':').nth(1).unwrap_or(name)
}

/// Read-only access to the host world.
///
/// Lookups must be cheap; the search calls this once per examined face.
pub trait BlockSource {
    /// Get the block at a position. `None` means air or unloaded space.
    fn get_block(&self, pos: BlockPosition) -> Option<&InputBlock>;
}

impl<S: BlockSource + ?Sized> BlockSource for &S {
    fn get_block(&self, pos: BlockPosition) -> Option<&InputBlock> {
        (**self).get_block(pos)
    }
}
