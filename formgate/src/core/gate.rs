//! # Form Gate
//!
//! Aggregates the empty-state reports of two or more fields into a single
//! derived boolean ("all fields non-empty") that a host uses to enable or
//! disable a submit action.
//!
//! Flags are updated only through each field's observer callback, never by
//! polling, and the aggregate is recomputed synchronously on every report.
//! Gate state lives behind `Arc<RwLock<..>>` so the observer closures
//! installed into the fields can reach it; callbacks run after the lock is
//! released.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::field::InputField;

type GateChangedFn = Box<dyn FnMut(bool) + Send + Sync>;

/// A field as seen by [`FormGate::submit`]: validate, then hand over the
/// trimmed content. Implemented by the egui widget and by test harnesses.
pub trait GatedField {
    /// Validate the field; `true` means error (empty). Presents the
    /// field's tip as a side effect when erroring.
    fn is_input_error(&mut self) -> bool;

    /// Content with surrounding whitespace removed.
    fn trimmed(&self) -> String;
}

struct GateState {
    flags: Vec<bool>,
    all_non_empty: bool,
    on_gate_changed: Option<GateChangedFn>,
}

impl GateState {
    /// AND over all flags; a gate with no fields, or any unreported
    /// field, stays closed.
    fn compute(&self) -> bool {
        !self.flags.is_empty() && self.flags.iter().all(|flag| *flag)
    }
}

/// Composes registered fields into one gated action.
///
/// Created once at screen setup. Fields register exactly once; their
/// per-field flag starts `false` until the field reports an edge, so the
/// gate starts closed.
pub struct FormGate {
    state: Arc<RwLock<GateState>>,
}

impl Default for FormGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGate {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(GateState {
                flags: Vec::new(),
                all_non_empty: false,
                on_gate_changed: None,
            })),
        }
    }

    /// Add `field` to the gated set, installing this gate's internal
    /// callback as the field's observer (replacing any prior observer).
    ///
    /// Registration order determines validation order in [`Self::submit`];
    /// the aggregate boolean itself is order-independent.
    pub fn register(&self, field: &mut InputField) {
        let slot = {
            let mut state = self.state.write();
            state.flags.push(false);
            state.flags.len() - 1
        };
        // An open gate closes when an unreported field joins
        Self::recompute(&self.state);

        let state = Arc::clone(&self.state);
        field.set_on_empty_changed(move |not_empty| {
            Self::report(&state, slot, not_empty);
        });
    }

    /// Install the edge-triggered aggregate observer. At most one; the
    /// last registration wins.
    pub fn set_on_gate_changed(&self, callback: impl FnMut(bool) + Send + Sync + 'static) {
        self.state.write().on_gate_changed = Some(Box::new(callback));
    }

    /// Current aggregate value.
    pub fn is_open(&self) -> bool {
        self.state.read().all_non_empty
    }

    /// The gated action: validate every field in registration order,
    /// aborting on the first error (that field's tip is presented; later
    /// fields are not validated). On success returns the trimmed text of
    /// each field in order.
    pub fn submit(&self, fields: &mut [&mut dyn GatedField]) -> Option<Vec<String>> {
        for (index, field) in fields.iter_mut().enumerate() {
            if field.is_input_error() {
                tracing::debug!(index, "submit aborted on erroring field");
                return None;
            }
        }

        tracing::debug!(fields = fields.len(), "submit validated cleanly");
        Some(fields.iter().map(|field| field.trimmed()).collect())
    }

    fn report(state: &Arc<RwLock<GateState>>, slot: usize, not_empty: bool) {
        let mut guard = state.write();
        guard.flags[slot] = not_empty;
        Self::fire_if_changed(state, guard);
    }

    fn recompute(state: &Arc<RwLock<GateState>>) {
        let guard = state.write();
        Self::fire_if_changed(state, guard);
    }

    /// Recompute the aggregate under the lock; if it changed, release the
    /// lock before invoking the callback so the callback may touch the
    /// gate again.
    fn fire_if_changed(
        state: &Arc<RwLock<GateState>>,
        mut guard: parking_lot::RwLockWriteGuard<'_, GateState>,
    ) {
        let all_non_empty = guard.compute();
        if all_non_empty == guard.all_non_empty {
            return;
        }
        guard.all_non_empty = all_non_empty;
        let callback = guard.on_gate_changed.take();
        drop(guard);

        tracing::debug!(all_non_empty, "gate changed");
        if let Some(mut callback) = callback {
            callback(all_non_empty);
            let mut guard = state.write();
            // Keep a replacement installed from inside the callback
            if guard.on_gate_changed.is_none() {
                guard.on_gate_changed = Some(callback);
            }
        }
    }
}
