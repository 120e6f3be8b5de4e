//! # Breakguard
//!
//! Detects players breaking blocks they cannot possibly reach, such as a bed
//! hidden behind solid walls that was found with an x-ray client.
//!
//! ## Overview
//!
//! Two pieces do the work:
//!
//! - [`permeability`] decides, for every block and state, which of its six
//!   faces a player's cursor can pass through.
//! - [`search`] flood-fills from the broken block through those faces. If the
//!   fill stays below the configured search depth the region is sealed, and
//!   the break is only legitimate when the player's head is inside it.
//!
//! [`guard::BreakGuard`] wraps both, plus a repeated-break rate limit, into a
//! single call for a server's block-break event.
//!
//! ## Quick Start
//!
//! ```ignore
//! use breakguard::{BreakGuard, BreakEvent, BreakSpeedLimiter, GuardConfig};
//!
//! let settings = GuardConfig::load("breakguard.json")?.into_settings();
//! // One limiter for the process, one guard per worker
//! let mut limiter = BreakSpeedLimiter::new();
//! let mut guard = BreakGuard::new(settings);
//!
//! // `world` implements BlockSource
//! let verdict = guard.on_break(&mut limiter, &world, &event);
//! if let Some(sanction) = verdict.sanction() {
//!     // cancel the event, kick the player, broadcast...
//! }
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod permeability;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use config::{GuardConfig, GuardSettings};
pub use error::{GuardError, Result};
pub use guard::{ActorId, BreakEvent, BreakGuard, BreakSpeedLimiter, Sanction, Verdict};
pub use permeability::{breathable_faces, breathable_faces_for, is_occluding, is_occluding_block, BlockShape};
pub use search::{flood_fill, flood_fill_with, SealChecker, SealReport, SearchScratch, VisitedSet};
pub use types::{BlockMap, BlockPosition, BlockSource, Direction, FaceSet, InputBlock};
