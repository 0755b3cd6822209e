//! Optimistic drag-and-drop list ordering with server-sync rollback.
//!
//! DESIGN
//! ======
//! `ListState` holds two copies of the list: `items`, the working copy
//! mutated on every drop, and `snapshot`, the last order known to be
//! persisted. The lifecycle is a small phase machine (`View` →
//! `Reordering` → `Saving`) so flag combinations like "saving while not in
//! drag mode" cannot be represented. Transitions are pure functions over
//! the state; async orchestration (the actual network calls) lives in the
//! `OrderableAdminScreen` component.
//!
//! INVARIANTS
//! ==========
//! - `items` and `snapshot` always contain the same set of ids; reordering
//!   never adds or removes members. Membership changes (`apply_created`,
//!   `apply_toggle`) update both in lockstep.
//! - Outside `Reordering`/`Saving` the two copies are equal.
//! - After any move, `items[k].order_index() == k + 1` for all k.

#[cfg(test)]
#[path = "orderable_test.rs"]
mod orderable_test;

use crate::net::types::{Category, OrderEntry, SubCategory};

/// A record with a stable id and a mutable position in a list.
///
/// Display accessors (`name`, `detail`) are inert with respect to
/// reordering; they exist so the generic admin table can render rows.
pub trait Orderable {
    /// Stable opaque identifier, unchanged by reorders.
    fn id(&self) -> &str;
    /// Primary display label.
    fn name(&self) -> &str;
    /// Secondary display column (course count, parent category, ...).
    fn detail(&self) -> String;
    /// 1-based position in the list.
    fn order_index(&self) -> u32;
    fn set_order_index(&mut self, index: u32);
    /// Active flag, independent of ordering.
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Lifecycle phase of an orderable list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Read-only display; per-row actions enabled, drops rejected.
    #[default]
    View,
    /// Drag mode: drops accepted, `dirty` tracks divergence from snapshot.
    Reordering {
        /// Whether the working order differs from the persisted order.
        dirty: bool,
    },
    /// A bulk order update is in flight; further commits and cancels are
    /// rejected until it resolves.
    Saving,
}

/// Client-held state for one orderable list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    snapshot: Vec<T>,
    phase: ListPhase,
}

// Manual impl: the derive would put a spurious `T: Default` bound on it.
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            snapshot: Vec::new(),
            phase: ListPhase::View,
        }
    }
}

impl<T: Orderable + Clone> ListState<T> {
    /// Build state from a fresh server response. The working copy and the
    /// snapshot start identical, sorted by the server-assigned order.
    #[must_use]
    pub fn from_fetch(mut items: Vec<T>) -> Self {
        items.sort_by_key(Orderable::order_index);
        Self {
            snapshot: items.clone(),
            items,
            phase: ListPhase::View,
        }
    }

    /// The working copy, in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Whether drag interactions are currently accepted or pending.
    #[must_use]
    pub fn drag_mode(&self) -> bool {
        matches!(self.phase, ListPhase::Reordering { .. } | ListPhase::Saving)
    }

    /// Whether the working order differs from the last persisted order.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        matches!(
            self.phase,
            ListPhase::Reordering { dirty: true } | ListPhase::Saving
        )
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.phase == ListPhase::Saving
    }

    /// Enter drag mode. No data change; ignored unless in `View`.
    pub fn enter_reorder(&mut self) {
        if self.phase == ListPhase::View {
            self.phase = ListPhase::Reordering { dirty: false };
        }
    }

    /// Move the item at `from` to position `to`, shifting everything in
    /// between. Recomputes every `order_index` as position + 1 and
    /// re-derives the dirty flag by comparing id sequences against the
    /// snapshot. Returns false (and leaves state untouched) outside drag
    /// mode or when either index is out of bounds.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let ListPhase::Reordering { .. } = self.phase else {
            return false;
        };
        if !move_element(&mut self.items, from, to) {
            return false;
        }
        self.reindex();
        let dirty = !self.same_order_as_snapshot();
        self.phase = ListPhase::Reordering { dirty };
        true
    }

    /// Guard and transition for the bulk order save. Returns true exactly
    /// when the caller should send the request; a second call while saving
    /// (or any call with a clean order) returns false and changes nothing.
    pub fn begin_commit(&mut self) -> bool {
        if self.phase == (ListPhase::Reordering { dirty: true }) {
            self.phase = ListPhase::Saving;
            true
        } else {
            false
        }
    }

    /// The bulk update was accepted: the working order becomes the new
    /// snapshot. Drag mode stays on until [`exit_reorder`](Self::exit_reorder)
    /// runs after the confirmation delay.
    pub fn commit_succeeded(&mut self) {
        if self.phase == ListPhase::Saving {
            self.snapshot = self.items.clone();
            self.phase = ListPhase::Reordering { dirty: false };
        }
    }

    /// The bulk update failed: roll the working copy back to the snapshot
    /// in full. Drag mode stays on so the operator can retry.
    pub fn commit_failed(&mut self) {
        if self.phase == ListPhase::Saving {
            self.items = self.snapshot.clone();
            self.phase = ListPhase::Reordering { dirty: false };
        }
    }

    /// Leave drag mode after a successful save. Only fires from a clean
    /// `Reordering` phase, so it can never discard unsaved moves.
    pub fn exit_reorder(&mut self) {
        if self.phase == (ListPhase::Reordering { dirty: false }) {
            self.phase = ListPhase::View;
        }
    }

    /// Discard unsaved moves and leave drag mode. Rejected while a save is
    /// in flight, to avoid racing a local rollback against a server-side
    /// commit. Returns whether the cancel was applied.
    pub fn cancel(&mut self) -> bool {
        let ListPhase::Reordering { .. } = self.phase else {
            return false;
        };
        self.items = self.snapshot.clone();
        self.phase = ListPhase::View;
        true
    }

    /// Flip the active flag for one id in both the working copy and the
    /// snapshot, so the change survives a later cancel.
    pub fn apply_toggle(&mut self, id: &str) {
        for item in self
            .items
            .iter_mut()
            .chain(self.snapshot.iter_mut())
            .filter(|item| item.id() == id)
        {
            let flipped = !item.is_active();
            item.set_active(flipped);
        }
    }

    /// Append a newly created record to both copies (membership changes
    /// update the snapshot in lockstep with the working copy).
    pub fn apply_created(&mut self, item: T) {
        self.items.push(item.clone());
        self.snapshot.push(item);
    }

    /// Order index for the next created record: `max(existing) + 1`.
    /// Creates are append-only, never inserted mid-list.
    #[must_use]
    pub fn next_order_index(&self) -> u32 {
        self.items
            .iter()
            .map(Orderable::order_index)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// The full `(id, order_index)` list for the bulk update request. The
    /// payload always covers the whole list, never a partial one.
    #[must_use]
    pub fn order_payload(&self) -> Vec<OrderEntry> {
        self.items
            .iter()
            .map(|item| OrderEntry {
                id: item.id().to_owned(),
                order_index: item.order_index(),
            })
            .collect()
    }

    fn reindex(&mut self) {
        for (position, item) in self.items.iter_mut().enumerate() {
            item.set_order_index(u32::try_from(position + 1).unwrap_or(u32::MAX));
        }
    }

    fn same_order_as_snapshot(&self) -> bool {
        self.items.len() == self.snapshot.len()
            && self
                .items
                .iter()
                .zip(self.snapshot.iter())
                .all(|(a, b)| a.id() == b.id())
    }
}

/// Single-element list move: remove at `from`, reinsert at `to`. All other
/// elements keep their relative order. Returns false on out-of-bounds
/// indices. Shared by `ListState` and the wizard's lesson list.
pub fn move_element<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

impl Orderable for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        match self.course_count {
            1 => "1 course".to_owned(),
            n => format!("{n} courses"),
        }
    }

    fn order_index(&self) -> u32 {
        self.order_index
    }

    fn set_order_index(&mut self, index: u32) {
        self.order_index = index;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Orderable for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        self.category_name.clone()
    }

    fn order_index(&self) -> u32 {
        self.order_index
    }

    fn set_order_index(&mut self, index: u32) {
        self.order_index = index;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
