//! Effect handler for the spin timers
//!
//! A spin holds two timers, both keyed so a settle can cancel them:
//! - `reel-tick`: a [`Subscriptions`] interval redrawing the reels
//! - `reel-settle`: a [`TaskManager`] task that fires once at the end
//!
//! The same handler runs under `EffectRuntime` (through its
//! `EffectContext`) and under the headless [`crate::SpinMachine`].

use std::time::Duration;

use tui_dispatch::{EffectContext, SubKey, Subscriptions, TaskKey, TaskManager};

use crate::action::Action;
use crate::effect::Effect;
use crate::random::{self, Draw, RandomSource, SharedRandom};

/// Time between reel redraws while spinning
pub const SPIN_TICK: Duration = Duration::from_millis(110);

/// Time from spin start to settle
pub const SPIN_DURATION: Duration = Duration::from_millis(2200);

pub const REEL_TICK: &str = "reel-tick";
pub const REEL_SETTLE: &str = "reel-settle";

/// Tick interval and total spin duration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinTiming {
    pub tick: Duration,
    pub duration: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            tick: SPIN_TICK,
            duration: SPIN_DURATION,
        }
    }
}

/// Where reel timers get registered
pub trait ReelTimers {
    fn tasks(&mut self) -> &mut TaskManager<Action>;
    fn subscriptions(&mut self) -> &mut Subscriptions<Action>;
}

impl ReelTimers for EffectContext<'_, Action> {
    fn tasks(&mut self) -> &mut TaskManager<Action> {
        EffectContext::tasks(self)
    }

    fn subscriptions(&mut self) -> &mut Subscriptions<Action> {
        EffectContext::subscriptions(self)
    }
}

/// Runs reel effects with a shared random source
pub struct Reels {
    random: SharedRandom,
    timing: SpinTiming,
}

impl Reels {
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            random: random::shared(random),
            timing: SpinTiming::default(),
        }
    }

    /// Override the spin timing.
    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn handle_effect(&self, effect: Effect, timers: &mut impl ReelTimers) {
        match effect {
            Effect::StartReels {
                spin,
                letter,
                dinosaurs,
                desserts,
            } => {
                tracing::info!(spin, %letter, "Spin started");

                let source = self.random.clone();
                timers
                    .subscriptions()
                    .interval(REEL_TICK, self.timing.tick, move || Action::SpinDidTick {
                        spin,
                        draw: Draw::roll_shared(&source, dinosaurs, desserts),
                    });

                let source = self.random.clone();
                let duration = self.timing.duration;
                timers.tasks().spawn(REEL_SETTLE, async move {
                    tokio::time::sleep(duration).await;
                    Action::SpinDidSettle {
                        spin,
                        draw: Draw::roll_shared(&source, dinosaurs, desserts),
                    }
                });
            }
            Effect::StopReels { spin, result } => {
                timers.subscriptions().cancel(&SubKey::new(REEL_TICK));
                timers.tasks().cancel(&TaskKey::new(REEL_SETTLE));
                tracing::info!(spin, name = %result, "Spin settled");
            }
        }
    }
}
