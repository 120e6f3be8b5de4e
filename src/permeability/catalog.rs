//! Name-based block classification.
//!
//! The host only tells us a block's name, so these tables decide which blocks
//! are full opaque cubes, which must be treated as solid anyway, and which
//! only have a solid bottom.

use crate::types::block_id;

/// Substrings of block names whose collision box is not a full cube.
const NON_FULL_PATTERNS: &[&str] = &[
    "slab", "stairs", "fence", "wall", "door", "trapdoor",
    "sign", "banner", "button", "lever", "torch", "lantern",
    "pressure_plate", "carpet", "rail", "flower", "sapling",
    "glass_pane", "iron_bars", "chain", "rod", "candle",
    "head", "skull", "pot", "campfire", "anvil", "bell",
    "brewing_stand", "cauldron", "hopper", "lectern",
    "grindstone", "stonecutter", "enchanting_table",
    "repeater", "comparator", "daylight_detector",
    "piston", "tripwire", "string", "cobweb", "vine",
    "ladder", "scaffolding", "coral_fan", "pickle",
    "egg", "frogspawn", "dripleaf", "azalea", "roots",
    "sprouts", "fungus", "mushroom", "grass", "fern",
    "bush", "berry", "wart", "stem", "crop", "wheat",
    "carrots", "potatoes", "beetroots", "cocoa", "cactus",
    "sugar_cane", "bamboo", "kelp", "seagrass", "lichen",
    "vein", "fire", "snow", "layer", "chest", "shulker_box",
    "lily_pad", "portal", "redstone_wire", "conduit",
    "structure_void", "_bud", "cluster", "pointed_dripstone",
    "chorus_plant", "spore_blossom", "propagule", "bubble_column",
    "composter", "sculk_sensor", "sculk_shrieker",
    // Specific flowers that don't have "flower" in name
    "poppy", "dandelion", "orchid", "allium", "tulip",
    "oxeye_daisy", "cornflower", "lily_of_the_valley",
    "wither_rose", "sunflower", "lilac", "rose_bush",
    "peony", "pitcher_plant", "torchflower", "pink_petals",
];

/// Non-full blocks whose ids are too short to match as substrings.
const NON_FULL_NAMES: &[&str] = &["light", "cake"];

/// Full cubes whose ids contain one of the non-full patterns.
const FULL_CUBE_EXCEPTIONS: &[&str] = &[
    "jack_o_lantern", "crimson_stem", "warped_stem",
    "stripped_crimson_stem", "stripped_warped_stem", "mushroom_stem",
    "bamboo_planks", "bamboo_mosaic", "muddy_mangrove_roots",
];

/// Check if a block is probably a full cube, from its name alone.
pub fn is_likely_full_cube(name: &str) -> bool {
    let id = block_id(name);

    if id.is_empty() || id.contains("air") || id == "water" || id == "lava" {
        return false;
    }

    if FULL_CUBE_EXCEPTIONS.contains(&id) {
        return true;
    }
    if NON_FULL_NAMES.contains(&id) {
        return false;
    }

    // Beds, but not bedrock
    if id.ends_with("_bed") || id == "bed" {
        return false;
    }

    for pattern in NON_FULL_PATTERNS {
        if id.contains(pattern) {
            // Some blocks contain these patterns but ARE full cubes,
            // e.g. "mushroom_block", "grass_block", "snow_block"
            if id.ends_with("_block") && !id.contains("piston") {
                continue;
            }
            return false;
        }
    }

    true
}

/// Full cubes that light and view rays pass through.
pub fn is_transparent_cube(name: &str) -> bool {
    let id = block_id(name);
    id == "glass"
        || id.ends_with("_glass")
        || id.ends_with("_leaves")
        || id.ends_with("ice")
        || matches!(
            id,
            "glowstone" | "sea_lantern" | "slime_block" | "honey_block" | "beacon" | "spawner"
        )
}

/// Blocks occluding on their own: full opaque cubes.
pub fn is_occluding_by_default(name: &str) -> bool {
    is_likely_full_cube(name) && !is_transparent_cube(name)
}

/// Blocks that let light through but cannot be reached through.
pub fn is_forced_solid(name: &str) -> bool {
    let id = block_id(name);

    // Glass blocks, but not panes
    if id == "glass" || id.ends_with("_glass") {
        return true;
    }

    if id.ends_with("_leaves") {
        return true;
    }

    matches!(
        id,
        "cobweb"
            | "sunflower"
            | "lilac"
            | "rose_bush"
            | "peony"
            | "tall_grass"
            | "large_fern"
            | "hopper"
            | "sea_lantern"
            | "glowstone"
            | "ice"
            | "packed_ice"
            | "blue_ice"
            | "frosted_ice"
    )
}

/// Blocks whose only solid face is the bottom one.
pub fn has_solid_base(name: &str) -> bool {
    let id = block_id(name);

    if id.ends_with("_bed") || id.ends_with("_carpet") {
        return true;
    }

    matches!(
        id,
        "snow"
            | "enchanting_table"
            | "end_portal_frame"
            | "lily_pad"
            | "daylight_detector"
            | "redstone_wire"
            | "repeater"
            | "comparator"
            | "rail"
            | "powered_rail"
            | "activator_rail"
            | "detector_rail"
    )
}

/// Names that are items, never placeable blocks.
const ITEM_SUFFIXES: &[&str] = &[
    "_sword", "_pickaxe", "_axe", "_shovel", "_hoe",
    "_helmet", "_chestplate", "_leggings", "_boots",
    "_ingot", "_nugget", "_spawn_egg", "_boat", "_dye",
];

const ITEM_NAMES: &[&str] = &[
    "stick", "bow", "arrow", "apple", "bread", "diamond", "emerald", "coal",
    "bucket", "compass", "clock", "paper", "book", "minecart", "saddle",
    "shears", "flint_and_steel", "fishing_rod", "ender_pearl",
];

/// Check that a normalized name is syntactically valid and names a block.
pub fn is_block(name: &str) -> bool {
    let Some((namespace, id)) = name.split_once(':') else {
        return false;
    };

    if !is_resource_part(namespace, false) || !is_resource_part(id, true) {
        return false;
    }

    if ITEM_NAMES.contains(&id) {
        return false;
    }
    !ITEM_SUFFIXES.iter().any(|suffix| id.ends_with(suffix))
}

fn is_resource_part(s: &str, allow_slash: bool) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || matches!(c, '_' | '-' | '.')
                || (allow_slash && c == '/')
        })
}
