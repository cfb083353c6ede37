//! End-to-end behaviour of the spin machine with virtual time
//!
//! PATTERN: paused tokio clock
//! - `start_paused = true` freezes time; sleeping auto-advances it
//! - Timer results are fed back with `run_until_settled`

use std::sync::Arc;
use std::time::Duration;

use dinodessert::prelude::*;
use dinodessert::{Action, ReelsUi, SPIN_DURATION, SPIN_TICK};
use tokio::sync::mpsc;
use tui_dispatch::testing::key;
use tui_dispatch::EventKind;

fn builtin_machine(
    random: impl RandomSource + 'static,
) -> (SpinMachine, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let catalog = Arc::new(NameCatalog::builtin().expect("builtin catalog"));
    (SpinMachine::new(ReelState::new(catalog), random, tx), rx)
}

fn single_entry_machine() -> (SpinMachine, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let catalog = NameCatalog::builder()
        .letter('A', ["Allosaurus"], ["Apple Pie"])
        .build()
        .expect("valid catalog");
    let state = ReelState::new(Arc::new(catalog));
    (SpinMachine::new(state, StdRandom::from_entropy(), tx), rx)
}

#[test]
fn every_letter_has_names_of_both_kinds() {
    let catalog = NameCatalog::builtin().unwrap();
    assert!(catalog.len() > 1);
    for letter in catalog.letters() {
        assert!(!catalog.names_for(letter, NameKind::Dinosaur).is_empty());
        assert!(!catalog.names_for(letter, NameKind::Dessert).is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn single_entry_lists_settle_deterministically() {
    let (mut machine, mut rx) = single_entry_machine();

    machine.spin();
    assert!(machine.run_until_settled(&mut rx).await);

    let state = machine.state();
    assert_eq!(state.status, SpinStatus::Idle);
    assert_eq!(state.final_result.as_deref(), Some("Allosaurus Apple Pie"));
}

#[tokio::test(start_paused = true)]
async fn spin_clears_result_immediately_and_ignores_repeat() {
    let (mut machine, _rx) = builtin_machine(ScriptedRandom::first());

    assert!(machine.spin());
    assert_eq!(machine.state().status, SpinStatus::Spinning);
    assert_eq!(machine.state().final_result, None);

    let spin_id = machine.state().spin_id;
    let display = machine.state().display.clone();
    assert!(!machine.spin());
    assert_eq!(machine.state().spin_id, spin_id);
    assert_eq!(machine.state().display, display);
    assert_eq!(machine.active_timers(), 2);
}

#[tokio::test(start_paused = true)]
async fn letter_changes_are_ignored_while_spinning() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(3));
    let letter = machine.state().letter();

    machine.spin();
    assert!(!machine.change_letter(Direction::Next));
    assert!(!machine.change_letter(Direction::Previous));
    assert_eq!(machine.state().letter(), letter);

    machine.run_until_settled(&mut rx).await;
    assert!(machine.change_letter(Direction::Next));
    assert_ne!(machine.state().letter(), letter);
}

#[tokio::test(start_paused = true)]
async fn change_letter_inverse_law_holds_everywhere() {
    let (mut machine, _rx) = builtin_machine(ScriptedRandom::first());
    let len = machine.state().catalog.len();

    for _ in 0..len {
        let start = machine.state().letter_index;
        machine.change_letter(Direction::Next);
        machine.change_letter(Direction::Previous);
        assert_eq!(machine.state().letter_index, start);

        machine.change_letter(Direction::Previous);
        machine.change_letter(Direction::Next);
        assert_eq!(machine.state().letter_index, start);

        machine.change_letter(Direction::Next);
    }
}

#[tokio::test(start_paused = true)]
async fn change_letter_resets_to_first_entries() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(11));

    machine.spin();
    machine.run_until_settled(&mut rx).await;
    machine.change_letter(Direction::Next);

    let state = machine.state();
    let dinosaur = &state.names(NameKind::Dinosaur)[0];
    let dessert = &state.names(NameKind::Dessert)[0];
    assert_eq!(&state.display.dinosaur, dinosaur);
    assert_eq!(&state.display.dessert, dessert);
    assert_eq!(
        state.final_result.as_deref(),
        Some(format!("{} {}", dinosaur, dessert).as_str())
    );
}

#[tokio::test(start_paused = true)]
async fn settled_result_matches_display_for_every_letter() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(2024));
    let len = machine.state().catalog.len();

    for _ in 0..len {
        machine.spin();
        assert!(machine.run_until_settled(&mut rx).await);

        let state = machine.state();
        let expected = format!("{} {}", state.display.dinosaur, state.display.dessert);
        assert_eq!(state.final_result.as_deref(), Some(expected.as_str()));
        assert!(state
            .names(NameKind::Dinosaur)
            .contains(&state.display.dinosaur));
        assert!(state.names(NameKind::Dessert).contains(&state.display.dessert));

        machine.change_letter(Direction::Next);
    }
}

#[tokio::test(start_paused = true)]
async fn spin_settles_after_duration_not_before() {
    let (mut machine, mut rx) = builtin_machine(ScriptedRandom::new(vec![1, 2, 0, 3]));
    let started = tokio::time::Instant::now();

    machine.spin();

    // Drain everything that arrives before the settle time
    let mut ticks = 0;
    while let Ok(Some(action)) =
        tokio::time::timeout(SPIN_DURATION - SPIN_TICK / 2 - started.elapsed(), rx.recv()).await
    {
        assert!(matches!(action, Action::SpinDidTick { .. }));
        machine.dispatch(action);
        ticks += 1;
        assert!(machine.state().final_result.is_none());
    }
    assert!(machine.is_spinning());
    assert!(ticks >= 15, "expected a tick roughly every 110ms, got {}", ticks);

    assert!(machine.run_until_settled(&mut rx).await);
    assert!(started.elapsed() >= SPIN_DURATION);
    assert_eq!(machine.active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn no_updates_after_settle() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(5));

    machine.spin();
    machine.run_until_settled(&mut rx).await;
    let settled = machine.state().clone();

    // Anything still in flight is stale and must not move the reels
    tokio::time::sleep(Duration::from_millis(500)).await;
    while let Ok(action) = rx.try_recv() {
        assert!(!machine.dispatch(action));
    }
    assert_eq!(machine.state().display, settled.display);
    assert_eq!(machine.state().final_result, settled.final_result);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_machine_mid_spin_cancels_timers() {
    let (mut machine, mut rx) = builtin_machine(ScriptedRandom::first());

    machine.spin();
    drop(machine);

    tokio::time::sleep(SPIN_DURATION * 2).await;
    // All senders are gone and nothing was delivered
    assert!(matches!(rx.recv().await, None));
}

#[tokio::test(start_paused = true)]
async fn consecutive_spins_reuse_the_guard() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(9));

    for expected_id in 1..=3 {
        assert!(machine.spin());
        assert_eq!(machine.state().spin_id, expected_id);
        assert!(machine.run_until_settled(&mut rx).await);
        assert!(machine.state().final_result.is_some());
    }
}

/// Feed a key through the UI mapping into the machine, like the runtime does.
fn press(ui: &mut ReelsUi, machine: &mut SpinMachine, keys: &str) {
    let outcome = ui.map_event(&EventKind::Key(key(keys)), machine.state());
    for action in outcome.actions {
        machine.dispatch(action);
    }
}

#[tokio::test(start_paused = true)]
async fn shift_letter_hotkey_selects_and_spins_that_letter() {
    let (mut machine, mut rx) = builtin_machine(StdRandom::seeded(17));
    let mut ui = ReelsUi::new();

    press(&mut ui, &mut machine, "shift+t");
    assert_eq!(machine.state().letter().as_char(), 'T');
    assert!(!machine.is_spinning());

    press(&mut ui, &mut machine, "space");
    assert!(machine.is_spinning());

    // Hotkeys are ignored mid-spin
    press(&mut ui, &mut machine, "shift+b");
    assert_eq!(machine.state().letter().as_char(), 'T');

    assert!(machine.run_until_settled(&mut rx).await);
    let result = machine.state().final_result.clone().expect("settled");
    assert!(result.starts_with('T'), "unexpected result {}", result);
    let (dinosaur, dessert) = (&machine.state().display.dinosaur, &machine.state().display.dessert);
    assert!(dinosaur.starts_with('T') && dessert.starts_with('T'));
}
