//! Shape-dependent block states and their breathable faces.
//!
//! Each variant carries only the fields its rule needs. Block states are
//! parsed from Minecraft block properties; missing or malformed properties
//! fall back to the block's default state.

use crate::types::{block_id, Direction, FaceSet, InputBlock};

/// The shape of a non-occluding block, as far as permeability cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// Stairs ascending toward `ascending`; `inverted` stairs hang upside down.
    Stairs { ascending: Direction, inverted: bool },
    /// Single slab; `inverted` slabs occupy the top half.
    Slab { inverted: bool },
    /// Two slabs merged into a full block.
    DoubleSlab,
    /// Ladder hanging on the wall at `attached`.
    Ladder { attached: Direction },
    /// Vine covering the horizontal faces in `attached`.
    Vine { attached: FaceSet },
    /// Piston body; powered pistons have their head extended.
    PistonBase { powered: bool, facing: Direction },
    /// Extended piston arm.
    PistonExtension { facing: Direction },
    /// Trapdoor; open trapdoors stand against `attached`.
    Trapdoor { open: bool, inverted: bool, attached: Direction },
    /// Fence gate whose opening faces `facing`.
    FenceGate { facing: Direction },
    /// Any door.
    Door,
    /// Anvil with a raw horizontal orientation index.
    Anvil { orientation: u8 },
    /// Anything without a dedicated rule.
    Other,
}

impl BlockShape {
    /// Derive the shape of a block from its name and properties.
    pub fn from_block(block: &InputBlock) -> Self {
        let id = block_id(&block.name);
        let facing = || block.direction("facing").unwrap_or(Direction::North);

        // Trapdoors before doors, fence gates are their own kind
        if id.ends_with("_stairs") {
            BlockShape::Stairs {
                ascending: facing(),
                inverted: block.property("half") == Some("top"),
            }
        } else if id.ends_with("_slab") {
            match block.property("type") {
                Some("double") => BlockShape::DoubleSlab,
                Some("top") => BlockShape::Slab { inverted: true },
                _ => BlockShape::Slab { inverted: false },
            }
        } else if id == "ladder" {
            // A ladder faces away from the wall holding it
            BlockShape::Ladder {
                attached: facing().opposite(),
            }
        } else if id == "vine" {
            BlockShape::Vine {
                attached: Direction::HORIZONTAL
                    .into_iter()
                    .filter(|face| block.flag(&face.to_string()))
                    .collect(),
            }
        } else if id == "piston" || id == "sticky_piston" {
            BlockShape::PistonBase {
                powered: block.flag("extended"),
                facing: facing(),
            }
        } else if id == "piston_head" {
            BlockShape::PistonExtension { facing: facing() }
        } else if id.ends_with("_trapdoor") {
            BlockShape::Trapdoor {
                open: block.flag("open"),
                inverted: block.property("half") == Some("top"),
                attached: facing().opposite(),
            }
        } else if id.ends_with("_fence_gate") {
            BlockShape::FenceGate { facing: facing() }
        } else if id.ends_with("_door") {
            BlockShape::Door
        } else if matches!(id, "anvil" | "chipped_anvil" | "damaged_anvil") {
            BlockShape::Anvil {
                orientation: anvil_orientation(block),
            }
        } else {
            BlockShape::Other
        }
    }

    /// Faces an interaction ray can pass through.
    pub fn breathable_faces(&self) -> FaceSet {
        match *self {
            BlockShape::Stairs { ascending, inverted } => FaceSet::ALL
                .without(ascending)
                .without(if inverted { Direction::Up } else { Direction::Down }),
            BlockShape::Slab { inverted } | BlockShape::Trapdoor { open: false, inverted, .. } => {
                FaceSet::ALL.without(covered_half(inverted))
            }
            BlockShape::DoubleSlab => FaceSet::NONE,
            BlockShape::Ladder { attached } => FaceSet::ALL.without(attached),
            BlockShape::Vine { attached } => {
                let horizontal = attached.difference(FaceSet::UP_DOWN);
                if horizontal.len() == 1 {
                    FaceSet::ALL.difference(horizontal)
                } else {
                    // Bare or multi-sided vines are treated as solid
                    FaceSet::NONE
                }
            }
            BlockShape::PistonBase { powered: false, .. } => FaceSet::NONE,
            BlockShape::PistonBase { powered: true, facing } => FaceSet::ALL.without(facing.opposite()),
            BlockShape::PistonExtension { facing } => FaceSet::ALL.without(facing),
            BlockShape::Trapdoor { open: true, attached, .. } => FaceSet::ALL.without(attached),
            BlockShape::FenceGate { facing } => FaceSet::UP_DOWN.with(facing).with(facing.opposite()),
            // Door geometry is not modelled
            BlockShape::Door => FaceSet::ALL,
            BlockShape::Anvil { orientation } => match orientation {
                0 | 2 => FaceSet::UP_DOWN.with(Direction::North).with(Direction::South),
                1 | 3 => FaceSet::UP_DOWN.with(Direction::East).with(Direction::West),
                _ => FaceSet::ALL,
            },
            BlockShape::Other => FaceSet::ALL,
        }
    }
}

fn covered_half(inverted: bool) -> Direction {
    if inverted {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Orientation index from an explicit `orientation` property, else from
/// `facing` using the horizontal index order south, west, north, east.
fn anvil_orientation(block: &InputBlock) -> u8 {
    if let Some(raw) = block.property("orientation") {
        return raw.trim().parse().unwrap_or(u8::MAX);
    }

    match block.direction("facing").unwrap_or(Direction::North) {
        Direction::South => 0,
        Direction::West => 1,
        Direction::North => 2,
        Direction::East => 3,
        Direction::Up | Direction::Down => u8::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(name: &str, props: &[(&str, &str)]) -> BlockShape {
        let block = props
            .iter()
            .fold(InputBlock::new(name), |b, (k, v)| b.with_property(*k, *v));
        BlockShape::from_block(&block)
    }

    #[test]
    fn test_parse_stairs() {
        assert_eq!(
            shape("oak_stairs", &[("facing", "east"), ("half", "top")]),
            BlockShape::Stairs { ascending: Direction::East, inverted: true }
        );
        assert_eq!(
            shape("oak_stairs", &[]),
            BlockShape::Stairs { ascending: Direction::North, inverted: false }
        );
    }

    #[test]
    fn test_parse_slabs() {
        assert_eq!(shape("stone_slab", &[("type", "top")]), BlockShape::Slab { inverted: true });
        assert_eq!(shape("oak_slab", &[("type", "bottom")]), BlockShape::Slab { inverted: false });
        assert_eq!(shape("oak_slab", &[("type", "double")]), BlockShape::DoubleSlab);
    }

    #[test]
    fn test_parse_doors_and_gates() {
        assert!(matches!(shape("oak_trapdoor", &[]), BlockShape::Trapdoor { .. }));
        assert_eq!(shape("iron_door", &[("open", "true")]), BlockShape::Door);
        assert_eq!(
            shape("birch_fence_gate", &[("facing", "west")]),
            BlockShape::FenceGate { facing: Direction::West }
        );
        assert_eq!(shape("oak_fence", &[]), BlockShape::Other);
    }

    #[test]
    fn test_parse_attached_blocks() {
        assert_eq!(
            shape("ladder", &[("facing", "north")]),
            BlockShape::Ladder { attached: Direction::South }
        );
        assert_eq!(
            shape("vine", &[("east", "true"), ("up", "true"), ("west", "false")]),
            BlockShape::Vine { attached: FaceSet::only(Direction::East) }
        );
    }

    #[test]
    fn test_parse_pistons() {
        assert_eq!(
            shape("sticky_piston", &[("extended", "true"), ("facing", "up")]),
            BlockShape::PistonBase { powered: true, facing: Direction::Up }
        );
        assert_eq!(
            shape("piston_head", &[("facing", "down")]),
            BlockShape::PistonExtension { facing: Direction::Down }
        );
    }

    #[test]
    fn test_parse_anvil() {
        assert_eq!(shape("anvil", &[("facing", "west")]), BlockShape::Anvil { orientation: 1 });
        assert_eq!(shape("damaged_anvil", &[("orientation", "7")]), BlockShape::Anvil { orientation: 7 });
        assert_eq!(shape("anvil", &[("orientation", "junk")]), BlockShape::Anvil { orientation: u8::MAX });
    }

    #[test]
    fn test_stairs_faces() {
        for ascending in Direction::HORIZONTAL {
            for inverted in [false, true] {
                let faces = BlockShape::Stairs { ascending, inverted }.breathable_faces();
                let covered = if inverted { Direction::Up } else { Direction::Down };
                assert!(!faces.contains(ascending));
                assert!(!faces.contains(covered));
                assert_eq!(faces.len(), 4);
            }
        }
    }

    #[test]
    fn test_slab_faces() {
        assert_eq!(
            BlockShape::Slab { inverted: true }.breathable_faces(),
            FaceSet::ALL.without(Direction::Down)
        );
        assert_eq!(
            BlockShape::Slab { inverted: false }.breathable_faces(),
            FaceSet::ALL.without(Direction::Up)
        );
        assert_eq!(BlockShape::DoubleSlab.breathable_faces(), FaceSet::NONE);
    }

    #[test]
    fn test_vine_faces() {
        for face in Direction::HORIZONTAL {
            let faces = BlockShape::Vine { attached: FaceSet::only(face) }.breathable_faces();
            assert_eq!(faces, FaceSet::ALL.without(face));
        }

        let two = FaceSet::only(Direction::North).with(Direction::East);
        assert_eq!(BlockShape::Vine { attached: two }.breathable_faces(), FaceSet::NONE);
        assert_eq!(BlockShape::Vine { attached: FaceSet::NONE }.breathable_faces(), FaceSet::NONE);
    }

    #[test]
    fn test_piston_faces() {
        assert_eq!(
            BlockShape::PistonBase { powered: false, facing: Direction::Up }.breathable_faces(),
            FaceSet::NONE
        );
        assert_eq!(
            BlockShape::PistonBase { powered: true, facing: Direction::Up }.breathable_faces(),
            FaceSet::ALL.without(Direction::Down)
        );
        assert_eq!(
            BlockShape::PistonExtension { facing: Direction::East }.breathable_faces(),
            FaceSet::ALL.without(Direction::East)
        );
    }

    #[test]
    fn test_trapdoor_faces() {
        let open = BlockShape::Trapdoor { open: true, inverted: false, attached: Direction::South };
        assert_eq!(open.breathable_faces(), FaceSet::ALL.without(Direction::South));

        let closed_bottom = BlockShape::Trapdoor { open: false, inverted: false, attached: Direction::South };
        assert_eq!(closed_bottom.breathable_faces(), FaceSet::ALL.without(Direction::Up));

        let closed_top = BlockShape::Trapdoor { open: false, inverted: true, attached: Direction::South };
        assert_eq!(closed_top.breathable_faces(), FaceSet::ALL.without(Direction::Down));
    }

    #[test]
    fn test_gate_door_anvil_faces() {
        assert_eq!(
            BlockShape::FenceGate { facing: Direction::North }.breathable_faces(),
            FaceSet::UP_DOWN.with(Direction::North).with(Direction::South)
        );
        assert_eq!(BlockShape::Door.breathable_faces(), FaceSet::ALL);
        assert_eq!(
            BlockShape::Anvil { orientation: 2 }.breathable_faces(),
            FaceSet::UP_DOWN.with(Direction::North).with(Direction::South)
        );
        assert_eq!(
            BlockShape::Anvil { orientation: 3 }.breathable_faces(),
            FaceSet::UP_DOWN.with(Direction::East).with(Direction::West)
        );
        assert_eq!(BlockShape::Anvil { orientation: 4 }.breathable_faces(), FaceSet::ALL);
        assert_eq!(BlockShape::Other.breathable_faces(), FaceSet::ALL);
    }
}
