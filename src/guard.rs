//! Break-event decisions.
//!
//! [`BreakGuard`] is what a server hooks into its block-break event. For
//! checked block types it first applies a repeated-break rate limit, then the
//! sealed-region check, and tells the host whether to cancel the event, kick
//! the player and broadcast an announcement.
//!
//! The host owns one [`BreakSpeedLimiter`] for the whole process and lends it
//! to every call, while each worker keeps its own guard.

use crate::config::{fill_template, GuardSettings};
use crate::search::{SealReport, SearchScratch};
use crate::types::{normalize_name, BlockPosition, BlockSource, InputBlock};
use glam::DVec3;
use std::time::Duration;

/// Stable identity of a player, e.g. a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u128);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// A player breaking a block.
#[derive(Debug, Clone)]
pub struct BreakEvent {
    pub actor: ActorId,
    /// Name shown in the player list.
    pub actor_name: String,
    /// Custom display name, preferred over `actor_name` when set.
    pub custom_name: Option<String>,
    pub position: BlockPosition,
    pub block: InputBlock,
    /// The player's eye location.
    pub eye: DVec3,
    /// Host clock in milliseconds.
    pub at_ms: u64,
}

impl BreakEvent {
    pub fn display_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(&self.actor_name)
    }
}

/// What the host should do to an offending player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanction {
    pub kick_message: String,
    /// Announcement for every connected player, if configured.
    pub broadcast: Option<String>,
}

/// Decision for one break event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    /// Same player broke the same block type again too quickly.
    FastBreak(Sanction),
    /// The block was broken through a sealed wall.
    ImpossibleBreak(Sanction),
}

impl Verdict {
    /// Whether the break event must be cancelled.
    pub fn is_cancelled(&self) -> bool {
        !matches!(self, Verdict::Allow)
    }

    pub fn sanction(&self) -> Option<&Sanction> {
        match self {
            Verdict::Allow => None,
            Verdict::FastBreak(sanction) | Verdict::ImpossibleBreak(sanction) => Some(sanction),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LastBreak {
    actor: ActorId,
    block: String,
    at_ms: u64,
}

/// Remembers only the most recent break, whoever made it.
///
/// Alternating players therefore never trigger it; only back-to-back repeats
/// by the same player do.
#[derive(Debug, Clone, Default)]
pub struct BreakSpeedLimiter {
    last: Option<LastBreak>,
}

impl BreakSpeedLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a break and report whether it repeats the previous one within `window`.
    pub fn check(&mut self, actor: ActorId, block: &str, at_ms: u64, window: Duration) -> bool {
        let flagged = self.last.as_ref().is_some_and(|last| {
            last.block == block
                && last.actor == actor
                && u128::from(at_ms.saturating_sub(last.at_ms)) < window.as_millis()
        });

        self.last = Some(LastBreak {
            actor,
            block: block.to_string(),
            at_ms,
        });
        flagged
    }

    /// Forget the last break.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Per-worker break checker. Holds the settings and its own search buffers.
///
/// The rate-limit slot is not part of the guard: it is a single slot for the
/// whole process, passed to [`on_break`](Self::on_break) by the host.
#[derive(Debug, Default)]
pub struct BreakGuard {
    settings: GuardSettings,
    scratch: SearchScratch,
}

impl BreakGuard {
    pub fn new(settings: GuardSettings) -> Self {
        Self {
            settings,
            scratch: SearchScratch::new(),
        }
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Swap in new settings and clear the shared rate-limit slot.
    pub fn reload(&mut self, settings: GuardSettings, limiter: &mut BreakSpeedLimiter) {
        self.settings = settings;
        limiter.reset();
    }

    /// Run the sealed-region check for an event without side effects on the limiter.
    pub fn inspect<S: BlockSource + ?Sized>(&mut self, world: &S, event: &BreakEvent) -> SealReport {
        self.settings
            .checker
            .inspect(&mut self.scratch, world, event.eye, event.position)
    }

    /// Decide what to do with a break event.
    pub fn on_break<S: BlockSource + ?Sized>(
        &mut self,
        limiter: &mut BreakSpeedLimiter,
        world: &S,
        event: &BreakEvent,
    ) -> Verdict {
        let block = normalize_name(&event.block.name);
        if !self.settings.check_types.contains(&block) {
            return Verdict::Allow;
        }

        let name = event.display_name();
        let messages = &self.settings.messages;

        if self.settings.check_break_speed
            && limiter.check(event.actor, &block, event.at_ms, self.settings.max_break_speed)
        {
            tracing::warn!(actor = %event.actor, player = name, %block, "fast break");
            return Verdict::FastBreak(Sanction {
                kick_message: messages.kick_fast_break.clone(),
                broadcast: messages
                    .broadcast_fast_break
                    .as_deref()
                    .map(|template| fill_template(template, name)),
            });
        }

        let report = self
            .settings
            .checker
            .inspect(&mut self.scratch, world, event.eye, event.position);
        if report.blocked() {
            tracing::warn!(
                actor = %event.actor,
                player = name,
                %block,
                position = %event.position,
                visited = report.visited,
                "impossible break"
            );
            return Verdict::ImpossibleBreak(Sanction {
                kick_message: messages.kick_impossible_break.clone(),
                broadcast: messages
                    .broadcast_impossible_break
                    .as_deref()
                    .map(|template| fill_template(template, name)),
            });
        }

        Verdict::Allow
    }
}
