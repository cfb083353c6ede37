//! Headless spin machine
//!
//! [`SpinMachine`] drives the same store, reducer and [`Reels`] effect
//! handler as the terminal runtime, without a terminal. Intents are applied
//! synchronously through [`SpinMachine::dispatch`]; timer results arrive on
//! the action channel the machine was built with and must be fed back
//! through `dispatch` by whoever owns the receiver.
//!
//! Timers are acquired when a spin starts and released on settle, on
//! [`SpinMachine::shutdown`], or when the machine is dropped, whichever
//! comes first.

use tokio::sync::mpsc;
use tui_dispatch::{
    EffectStoreWithMiddleware, LoggingMiddleware, SubKey, Subscriptions, TaskKey, TaskManager,
};

use crate::action::{Action, Direction};
use crate::catalog::Letter;
use crate::effect::Effect;
use crate::random::RandomSource;
use crate::reducer::reducer;
use crate::reels::{ReelTimers, Reels, SpinTiming, REEL_SETTLE, REEL_TICK};
use crate::state::ReelState;

/// Store type shared by the machine and the terminal runtime
pub type ReelStore = EffectStoreWithMiddleware<ReelState, Action, Effect, LoggingMiddleware>;

/// A fresh store over `state` with action logging.
pub fn reel_store(state: ReelState) -> ReelStore {
    EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware::new())
}

struct Timers {
    tasks: TaskManager<Action>,
    subscriptions: Subscriptions<Action>,
}

impl ReelTimers for Timers {
    fn tasks(&mut self) -> &mut TaskManager<Action> {
        &mut self.tasks
    }

    fn subscriptions(&mut self) -> &mut Subscriptions<Action> {
        &mut self.subscriptions
    }
}

/// Reel state machine with its timers
pub struct SpinMachine {
    store: ReelStore,
    timers: Timers,
    reels: Reels,
}

impl SpinMachine {
    /// Machine over `state` with the default timing.
    ///
    /// Timer results are sent to `action_tx`.
    pub fn new(
        state: ReelState,
        random: impl RandomSource + 'static,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            store: reel_store(state),
            timers: Timers {
                tasks: TaskManager::new(action_tx.clone()),
                subscriptions: Subscriptions::new(action_tx),
            },
            reels: Reels::new(random),
        }
    }

    /// Override the spin timing.
    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.reels = self.reels.with_timing(timing);
        self
    }

    pub fn state(&self) -> &ReelState {
        self.store.state()
    }

    pub fn is_spinning(&self) -> bool {
        self.state().is_spinning()
    }

    /// Apply an action and run the effects it declares.
    ///
    /// Returns `true` if state changed and the view should re-render.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.reels.handle_effect(effect, &mut self.timers);
        }
        result.changed
    }

    /// Turn the letter wheel. Ignored while spinning.
    pub fn change_letter(&mut self, direction: Direction) -> bool {
        self.dispatch(Action::LetterChange(direction))
    }

    /// Jump to `letter`. Ignored while spinning or if the catalog lacks it.
    pub fn select_letter(&mut self, letter: Letter) -> bool {
        self.dispatch(Action::LetterSelect(letter))
    }

    /// Start a spin. Ignored while already spinning.
    pub fn spin(&mut self) -> bool {
        self.dispatch(Action::SpinStart)
    }

    /// Feed timer results from `action_rx` until the current spin settles.
    ///
    /// Returns immediately when idle. Returns `false` if the channel closed
    /// before the spin settled.
    pub async fn run_until_settled(
        &mut self,
        action_rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> bool {
        while self.is_spinning() {
            match action_rx.recv().await {
                Some(action) => {
                    self.dispatch(action);
                }
                None => return false,
            }
        }
        true
    }

    /// Number of live spin timers (0 when idle, 2 while spinning).
    pub fn active_timers(&self) -> usize {
        usize::from(self.timers.subscriptions.is_active(&SubKey::new(REEL_TICK)))
            + usize::from(self.timers.tasks.is_running(&TaskKey::new(REEL_SETTLE)))
    }

    /// Cancel any pending timers. Safe to call repeatedly.
    ///
    /// A spin interrupted this way never settles; the machine is not meant
    /// to be used afterwards.
    pub fn shutdown(&mut self) {
        if self.active_timers() > 0 {
            tracing::debug!(timers = self.active_timers(), "Shutting down spin timers");
        }
        self.timers.subscriptions.cancel_all();
        self.timers.tasks.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NameCatalog;
    use crate::random::ScriptedRandom;
    use crate::reels::SPIN_DURATION;
    use crate::state::SpinStatus;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_subscriber::fmt::MakeWriter;

    fn machine() -> (SpinMachine, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let catalog = NameCatalog::builder()
            .letter('A', ["Allosaurus", "Ankylosaurus"], ["Apple Pie", "Affogato"])
            .letter('B', ["Baryonyx"], ["Brownie"])
            .build()
            .unwrap();
        let state = ReelState::new(Arc::new(catalog));
        (SpinMachine::new(state, ScriptedRandom::new(vec![1]), tx), rx)
    }

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_spin_starts_both_timers() {
        let (mut machine, _rx) = machine();

        assert!(machine.spin());
        assert_eq!(machine.state().status, SpinStatus::Spinning);
        assert_eq!(machine.state().final_result, None);
        assert_eq!(machine.active_timers(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_releases_timers() {
        let (mut machine, mut rx) = machine();

        machine.spin();
        assert!(machine.run_until_settled(&mut rx).await);

        assert_eq!(machine.state().status, SpinStatus::Idle);
        assert_eq!(
            machine.state().final_result.as_deref(),
            Some("Ankylosaurus Affogato")
        );
        assert_eq!(machine.active_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_result_is_logged_at_info() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (mut machine, mut rx) = machine();
        machine.spin();
        assert!(machine.run_until_settled(&mut rx).await);

        let output = logs.contents();
        let settled = output
            .lines()
            .find(|line| line.contains("Spin settled"))
            .expect("settle logged");
        assert!(settled.contains("INFO"));
        assert!(settled.contains("Ankylosaurus Affogato"));
        assert!(output.contains("Spin started"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_settled_when_idle() {
        let (mut machine, mut rx) = machine();
        assert!(machine.run_until_settled(&mut rx).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_spin() {
        let (mut machine, mut rx) = machine();

        machine.spin();
        machine.shutdown();
        assert_eq!(machine.active_timers(), 0);

        tokio::time::sleep(SPIN_DURATION * 2).await;
        assert!(rx.try_recv().is_err());
        assert!(machine.is_spinning());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timing = SpinTiming {
            tick: Duration::from_millis(5),
            duration: Duration::from_millis(20),
        };
        let mut machine =
            SpinMachine::new(ReelState::default(), ScriptedRandom::first(), tx).with_timing(timing);

        let started = tokio::time::Instant::now();
        machine.spin();
        assert!(machine.run_until_settled(&mut rx).await);

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(started.elapsed() < SPIN_DURATION);
        assert_eq!(
            machine.state().final_result.as_deref(),
            Some("Allosaurus Apple Pie")
        );
    }
}
