//! In-memory block storage, used by the CLI and by tests.

use super::{BlockPosition, BlockSource, InputBlock};
use crate::error::{GuardError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A sparse map of blocks. Positions without an entry are air.
#[derive(Debug, Clone, Default)]
pub struct BlockMap {
    blocks: HashMap<BlockPosition, InputBlock>,
}

// JSON input format
#[derive(Deserialize)]
struct BlockDataInput {
    blocks: Vec<BlockEntry>,
}

#[derive(Deserialize)]
struct BlockEntry {
    x: i32,
    y: i32,
    z: i32,
    #[serde(default = "default_block_name")]
    name: String,
    #[serde(default)]
    properties: HashMap<String, String>,
}

fn default_block_name() -> String {
    "minecraft:stone".to_string()
}

impl BlockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block, replacing whatever was there.
    pub fn set(&mut self, pos: BlockPosition, block: InputBlock) {
        if block.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, pos: BlockPosition, block: InputBlock) -> Self {
        self.set(pos, block);
        self
    }

    /// Fill an inclusive box with copies of a block.
    pub fn fill(&mut self, min: BlockPosition, max: BlockPosition, block: &InputBlock) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set(BlockPosition::new(x, y, z), block.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Parse the `{"blocks": [{"x", "y", "z", "name", "properties"}]}` format.
    pub fn from_json(json: &str) -> Result<Self> {
        let input: BlockDataInput = serde_json::from_str(json)?;
        let mut map = Self::new();

        for entry in input.blocks {
            let pos = BlockPosition::new(entry.x, entry.y, entry.z);
            if map.blocks.contains_key(&pos) {
                return Err(GuardError::InvalidBlockList(format!(
                    "duplicate block at {}",
                    pos
                )));
            }

            let mut block = InputBlock::new(entry.name);
            block.properties = entry.properties;
            map.set(pos, block);
        }

        Ok(map)
    }

    /// Load a block list from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl BlockSource for BlockMap {
    fn get_block(&self, pos: BlockPosition) -> Option<&InputBlock> {
        self.blocks.get(&pos)
    }
}
