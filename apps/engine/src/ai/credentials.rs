//! Round-robin credential pool with per-slot health state.
//!
//! Replaces wall-clock-derived key selection with an explicit cursor: strict
//! rotation inside one process, deterministic and unit-testable. A slot that
//! gets rate-limited cools down for a configured window before it is handed
//! out again; other slots keep serving in the meantime.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::warn;

#[derive(Debug)]
struct Slot {
    key: String,
    error_count: u32,
    rate_limited_until: Option<Instant>,
}

impl Slot {
    fn available(&self, now: Instant) -> bool {
        self.rate_limited_until.map_or(true, |until| now >= until)
    }
}

#[derive(Debug)]
struct PoolState {
    slots: Vec<Slot>,
    cursor: usize,
}

#[derive(Debug)]
pub struct CredentialPool {
    state: Mutex<PoolState>,
    cooldown: Duration,
}

impl CredentialPool {
    pub fn new(keys: Vec<String>, cooldown: Duration) -> Self {
        let slots = keys
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .map(|key| Slot {
                key,
                error_count: 0,
                rate_limited_until: None,
            })
            .collect();
        Self {
            state: Mutex::new(PoolState { slots, cursor: 0 }),
            cooldown,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hands out the next available credential, skipping slots that are
    /// cooling down. Returns `None` when every slot is cooling (or the pool
    /// is empty); the caller falls back to the deterministic path.
    pub fn checkout(&self) -> Option<(usize, String)> {
        let now = Instant::now();
        let mut state = self.lock();
        let slot_count = state.slots.len();
        for offset in 0..slot_count {
            let index = (state.cursor + offset) % slot_count;
            if state.slots[index].available(now) {
                state.cursor = (index + 1) % slot_count;
                state.slots[index].rate_limited_until = None;
                return Some((index, state.slots[index].key.clone()));
            }
        }
        None
    }

    pub fn report_success(&self, index: usize) {
        let mut state = self.lock();
        if let Some(slot) = state.slots.get_mut(index) {
            slot.error_count = 0;
        }
    }

    pub fn report_error(&self, index: usize) {
        let mut state = self.lock();
        if let Some(slot) = state.slots.get_mut(index) {
            slot.error_count += 1;
        }
    }

    /// Marks a slot rate-limited for the cooldown window.
    pub fn report_rate_limited(&self, index: usize) {
        let cooldown = self.cooldown;
        let mut state = self.lock();
        if let Some(slot) = state.slots.get_mut(index) {
            slot.error_count += 1;
            slot.rate_limited_until = Some(Instant::now() + cooldown);
            warn!(
                credential = index,
                cooldown_secs = cooldown.as_secs(),
                "credential rate limited, cooling down"
            );
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PoolState> {
        self.state.lock().expect("credential pool mutex poisoned")
    }
}
