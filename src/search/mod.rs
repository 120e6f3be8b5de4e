//! Sealed-region search.
//!
//! Starting from a block, a flood fill walks through breathable faces into
//! every non-occluding neighbour it can reach. If the fill stays small the
//! region is *sealed*: nothing outside it can interact with blocks inside.

mod visited;

pub use visited::VisitedSet;

use crate::permeability::{breathable_faces, is_occluding_block};
use crate::types::{BlockPosition, BlockSource, FaceSet};
use glam::DVec3;

/// A block whose remaining faces have not been walked yet.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: BlockPosition,
    remaining: FaceSet,
}

/// Reusable buffers for [`flood_fill_with`].
///
/// Keep one per worker thread to avoid reallocating under high event rates.
/// Each call clears it before searching.
#[derive(Debug, Default)]
pub struct SearchScratch {
    visited: VisitedSet,
    stack: Vec<Frame>,
}

impl SearchScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result of the last search run with this scratch.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    fn clear(&mut self) {
        self.visited.clear();
        self.stack.clear();
    }
}

fn faces_at<S: BlockSource + ?Sized>(world: &S, pos: BlockPosition) -> FaceSet {
    world
        .get_block(pos)
        .map(breathable_faces)
        .unwrap_or(FaceSet::ALL)
}

fn occluding_at<S: BlockSource + ?Sized>(world: &S, pos: BlockPosition) -> bool {
    world
        .get_block(pos)
        .is_some_and(is_occluding_block)
}

/// Flood fill from `start` through breathable faces.
///
/// The start block is not marked before its own faces are walked, so it
/// enters the set only when reached back from a neighbour. Faces are walked
/// depth-first in [`Direction::ALL`](crate::types::Direction::ALL) order.
/// The search stops as soon as more than `max_visits` blocks are known.
/// Blocks at squared distance `max_dist_squared` or more from `center` are
/// recorded but not expanded.
pub fn flood_fill<S: BlockSource + ?Sized>(
    world: &S,
    start: BlockPosition,
    center: BlockPosition,
    max_visits: usize,
    max_dist_squared: f64,
) -> VisitedSet {
    let mut scratch = SearchScratch::new();
    flood_fill_with(&mut scratch, world, start, center, max_visits, max_dist_squared);
    scratch.visited
}

/// [`flood_fill`] using caller-owned buffers.
pub fn flood_fill_with<'s, S: BlockSource + ?Sized>(
    scratch: &'s mut SearchScratch,
    world: &S,
    start: BlockPosition,
    center: BlockPosition,
    max_visits: usize,
    max_dist_squared: f64,
) -> &'s VisitedSet {
    scratch.clear();
    scratch.stack.push(Frame {
        pos: start,
        remaining: faces_at(world, start),
    });

    while let Some(frame) = scratch.stack.last_mut() {
        let Some(face) = frame.remaining.pop_first() else {
            scratch.stack.pop();
            continue;
        };

        if scratch.visited.len() > max_visits {
            tracing::trace!(%start, visited = scratch.visited.len(), "search hit visit cap");
            break;
        }

        let neighbor = frame.pos.neighbor(face);
        if occluding_at(world, neighbor) || !scratch.visited.insert(neighbor) {
            continue;
        }

        if neighbor.distance_squared(center) < max_dist_squared {
            scratch.stack.push(Frame {
                pos: neighbor,
                remaining: faces_at(world, neighbor),
            });
        }
    }

    scratch.stack.clear();
    &scratch.visited
}

/// Outcome of a sealed-region check.
#[derive(Debug, Clone, PartialEq)]
pub struct SealReport {
    /// Number of blocks the flood fill reached.
    pub visited: usize,
    /// The fill finished below the search depth.
    pub sealed: bool,
    /// The observer's eye block was reached from the target.
    pub eye_inside: bool,
}

impl SealReport {
    /// Whether the interaction must be refused.
    pub fn blocked(&self) -> bool {
        self.sealed && !self.eye_inside
    }
}

/// Decides whether an observer can legitimately reach a target block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SealChecker {
    /// Visit cap, also the size below which a region counts as sealed.
    pub search_depth: usize,
    /// Squared expansion radius around the target.
    pub max_distance_squared: f64,
}

impl SealChecker {
    pub fn new(search_depth: usize, max_distance: f64) -> Self {
        Self {
            search_depth,
            max_distance_squared: max_distance * max_distance,
        }
    }

    /// Search around `target` and report whether `eye` is inside the region.
    pub fn inspect<S: BlockSource + ?Sized>(
        &self,
        scratch: &mut SearchScratch,
        world: &S,
        eye: DVec3,
        target: BlockPosition,
    ) -> SealReport {
        let visited = flood_fill_with(
            scratch,
            world,
            target,
            target,
            self.search_depth,
            self.max_distance_squared,
        );

        // A truncated search proves nothing, so the region counts as open
        let sealed = visited.len() < self.search_depth;
        let eye_inside = visited.contains(BlockPosition::containing(eye));
        let report = SealReport {
            visited: visited.len(),
            sealed,
            eye_inside,
        };

        tracing::debug!(
            %target,
            visited = report.visited,
            sealed,
            eye_inside,
            "sealed-region search finished"
        );
        report
    }

    /// Check whether an interaction from `eye` with `target` must be refused.
    pub fn is_interaction_blocked<S: BlockSource + ?Sized>(
        &self,
        world: &S,
        eye: DVec3,
        target: BlockPosition,
    ) -> bool {
        self.inspect(&mut SearchScratch::new(), world, eye, target)
            .blocked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockMap, InputBlock};

    fn pos(x: i32, y: i32, z: i32) -> BlockPosition {
        BlockPosition::new(x, y, z)
    }

    /// Solid stone box with the given cells carved out as air.
    fn carved(min: BlockPosition, max: BlockPosition, air: &[BlockPosition]) -> BlockMap {
        let mut world = BlockMap::new();
        world.fill(min, max, &InputBlock::new("stone"));
        for cell in air {
            world.set(*cell, InputBlock::new("air"));
        }
        world
    }

    #[test]
    fn test_single_sealed_cell() {
        let world = carved(pos(-1, -1, -1), pos(1, 1, 1), &[pos(0, 0, 0)]);
        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_sealed_corridor() {
        let world = carved(pos(-1, -1, -1), pos(2, 1, 1), &[pos(0, 0, 0), pos(1, 0, 0)]);
        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0);

        // The start block is reached back through the corridor
        assert_eq!(visited.as_slice(), &[pos(1, 0, 0), pos(0, 0, 0)]);
        assert!(!visited.contains(pos(2, 0, 0)));
    }

    #[test]
    fn test_visit_cap_follows_face_order() {
        let world = BlockMap::new();
        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 2, 144.0);
        assert_eq!(visited.as_slice(), &[pos(0, 1, 0), pos(0, 2, 0), pos(0, 3, 0)]);

        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 0, 144.0);
        assert_eq!(visited.as_slice(), &[pos(0, 1, 0)]);
    }

    #[test]
    fn test_distance_cutoff_records_but_does_not_expand() {
        let world = BlockMap::new();
        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 100, 1.0);

        assert_eq!(
            visited.as_slice(),
            &[pos(0, 1, 0), pos(0, -1, 0), pos(1, 0, 0), pos(-1, 0, 0), pos(0, 0, 1), pos(0, 0, -1)]
        );
        assert!(!visited.contains(pos(0, 2, 0)));
        assert!(!visited.contains(pos(0, 0, 0)));
    }

    #[test]
    fn test_non_breathable_neighbor_is_reached_not_expanded() {
        // An unpowered piston in the wall is reachable but lets nothing through
        let mut world = carved(pos(-1, -1, -1), pos(1, 1, 1), &[pos(0, 0, 0)]);
        world.set(pos(1, 0, 0), InputBlock::new("piston").with_property("facing", "east"));

        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0);
        assert_eq!(visited.as_slice(), &[pos(1, 0, 0)]);
    }

    #[test]
    fn test_double_slab_walls_are_skipped() {
        let mut world = BlockMap::new();
        world.set(pos(0, 0, 0), InputBlock::new("red_bed"));
        for face in crate::types::Direction::ALL {
            world.set(
                pos(0, 0, 0).neighbor(face),
                InputBlock::new("oak_slab").with_property("type", "double"),
            );
        }

        let visited = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_thin_block_in_wall_lets_the_eye_through() {
        // A light block is not a wall: the player behind it is inside the region
        let mut world = carved(pos(-1, -1, -1), pos(3, 1, 1), &[pos(2, 0, 0)]);
        world.set(pos(0, 0, 0), InputBlock::new("red_bed"));
        world.set(pos(1, 0, 0), InputBlock::new("light"));

        let checker = SealChecker::new(10, 12.0);
        let report = checker.inspect(&mut SearchScratch::new(), &world, DVec3::new(2.5, 0.62, 0.5), pos(0, 0, 0));
        assert!(report.sealed);
        assert!(report.eye_inside);
        assert!(!report.blocked());
    }

    #[test]
    fn test_scratch_reuse_matches_fresh_search() {
        let world = carved(pos(-1, -1, -1), pos(2, 1, 1), &[pos(0, 0, 0), pos(1, 0, 0)]);
        let mut scratch = SearchScratch::new();

        flood_fill_with(&mut scratch, &BlockMap::new(), pos(0, 0, 0), pos(0, 0, 0), 5, 144.0);
        let reused = flood_fill_with(&mut scratch, &world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0).clone();
        let fresh = flood_fill(&world, pos(0, 0, 0), pos(0, 0, 0), 10, 144.0);
        assert_eq!(reused, fresh);
    }

    /// A bed at the origin in a sealed room with two more cells east and one above.
    fn bed_room() -> BlockMap {
        let mut world = carved(
            pos(-1, -1, -1),
            pos(3, 2, 1),
            &[pos(1, 0, 0), pos(2, 0, 0), pos(1, 1, 0)],
        );
        world.set(pos(0, 0, 0), InputBlock::new("red_bed"));
        world
    }

    #[test]
    fn test_eye_outside_sealed_region_is_blocked() {
        let checker = SealChecker::new(10, 12.0);
        let world = bed_room();

        let report = checker.inspect(&mut SearchScratch::new(), &world, DVec3::new(5.5, 0.62, 0.5), pos(0, 0, 0));
        assert_eq!(report.visited, 4);
        assert!(report.sealed);
        assert!(!report.eye_inside);
        assert!(report.blocked());
    }

    #[test]
    fn test_eye_inside_sealed_region_is_allowed() {
        let checker = SealChecker::new(10, 12.0);
        let world = bed_room();
        assert!(!checker.is_interaction_blocked(&world, DVec3::new(2.5, 0.62, 0.5), pos(0, 0, 0)));
        assert!(!checker.is_interaction_blocked(&world, DVec3::new(1.3, 1.62, 0.7), pos(0, 0, 0)));
    }

    #[test]
    fn test_open_region_fails_open() {
        let checker = SealChecker::new(10, 12.0);
        let world = BlockMap::new().with(pos(0, 0, 0), InputBlock::new("red_bed"));

        for eye in [DVec3::new(100.0, 0.0, 0.0), DVec3::new(0.5, 1.6, 0.5)] {
            let report = checker.inspect(&mut SearchScratch::new(), &world, eye, pos(0, 0, 0));
            assert!(report.visited >= 10);
            assert!(!report.sealed);
            assert!(!report.blocked());
        }
    }

    #[test]
    fn test_region_at_search_depth_is_open() {
        // Exactly search_depth reachable cells cannot be told apart from truncation
        let world = bed_room();
        let checker = SealChecker::new(4, 12.0);
        assert!(!checker.is_interaction_blocked(&world, DVec3::new(50.0, 0.0, 0.0), pos(0, 0, 0)));

        let checker = SealChecker::new(5, 12.0);
        assert!(checker.is_interaction_blocked(&world, DVec3::new(50.0, 0.0, 0.0), pos(0, 0, 0)));
    }

    #[test]
    fn test_checker_squares_distance() {
        let checker = SealChecker::new(10, 12.0);
        assert_eq!(checker.max_distance_squared, 144.0);
    }
}
