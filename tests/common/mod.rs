//! Shared test infrastructure for tick-debounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use tick_debounce::{DebouncedInput, InputLine, TickClock, TickInstant, Transition};

// ============================================================================
// Mock Input Lines
// ============================================================================

/// Line whose level the test sets directly
pub struct MockLine<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockLine<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl InputLine for MockLine<'_> {
    fn is_high(&mut self) -> bool {
        self.level.get()
    }
}

/// Line that replays a recorded waveform against the clock.
///
/// Each entry is `(tick, level)`; the line reads the level of the latest
/// entry whose tick is not after the clock's current tick.
pub struct ScriptedLine<'c> {
    clock: &'c TickClock,
    idle_level: bool,
    script: heapless::Vec<(u32, bool), 32>,
}

impl<'c> ScriptedLine<'c> {
    pub fn new(clock: &'c TickClock, idle_level: bool, script: &[(u32, bool)]) -> Self {
        let mut steps = heapless::Vec::new();
        for &step in script {
            steps.push(step).expect("script too long");
        }
        Self {
            clock,
            idle_level,
            script: steps,
        }
    }
}

impl InputLine for ScriptedLine<'_> {
    fn is_high(&mut self) -> bool {
        let now = self.clock.now().ticks();
        self.script
            .iter()
            .rev()
            .find(|(tick, _)| *tick <= now)
            .map(|(_, level)| *level)
            .unwrap_or(self.idle_level)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polls once per tick for `ticks` ticks, recording every transition with the
/// clock reading at which it was confirmed.
pub fn run_ticks<P: InputLine>(
    clock: &TickClock,
    input: &mut DebouncedInput<'_, TickInstant, P, TickClock>,
    ticks: u32,
) -> heapless::Vec<(u32, Transition), 16> {
    let mut transitions = heapless::Vec::new();
    for _ in 0..ticks {
        if let Some(transition) = input.poll_transition() {
            transitions
                .push((clock.now().ticks(), transition))
                .expect("too many transitions");
        }
        clock.on_tick();
    }
    transitions
}

/// Advances the clock by `ticks` without polling.
pub fn advance(clock: &TickClock, ticks: u32) {
    for _ in 0..ticks {
        clock.on_tick();
    }
}
