//! Block permeability.
//!
//! A face of a block is *breathable* when its collision box does not cover
//! it completely, so a player's cursor can pass through it and reach what
//! lies behind. A block with no breathable faces is *occluding*.
//!
//! Resolution order for a block:
//! 1. occluding blocks (full opaque cubes and the forced-solid set) have no
//!    breathable faces;
//! 2. blocks with only a solid base breathe everywhere but down;
//! 3. everything else is decided by its [`BlockShape`], defaulting to all
//!    six faces.

pub mod catalog;
pub mod shape;

pub use shape::BlockShape;

use crate::types::{FaceSet, InputBlock};

/// Check whether a block type is sealed on all six faces, ignoring its state.
pub fn is_occluding(name: &str) -> bool {
    catalog::is_occluding_by_default(name) || catalog::is_forced_solid(name)
}

/// Check whether a block in its current state is sealed on all six faces.
///
/// Adds the state-dependent case of a double slab, which fills its whole
/// cell, to [`is_occluding`].
pub fn is_occluding_block(block: &InputBlock) -> bool {
    is_occluding(&block.name) || matches!(BlockShape::from_block(block), BlockShape::DoubleSlab)
}

/// Get all breathable faces of a block in its current state.
pub fn breathable_faces(block: &InputBlock) -> FaceSet {
    if is_occluding(&block.name) {
        return FaceSet::NONE;
    }
    resolve(&block.name, || Some(BlockShape::from_block(block)))
}

/// Get the breathable faces for a block type with an already-parsed shape.
///
/// A missing shape resolves like [`BlockShape::Other`].
pub fn breathable_faces_for(name: &str, shape: Option<BlockShape>) -> FaceSet {
    if is_occluding(name) {
        return FaceSet::NONE;
    }
    resolve(name, || shape)
}

fn resolve(name: &str, shape: impl FnOnce() -> Option<BlockShape>) -> FaceSet {
    if catalog::has_solid_base(name) {
        return FaceSet::ALL_EXCEPT_DOWN;
    }
    shape()
        .map(|shape| shape.breathable_faces())
        .unwrap_or(FaceSet::ALL)
}
