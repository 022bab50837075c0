//! Outbound table events.
//!
//! Every event carries the new state value, never a delta. The table pushes
//! events onto its [`EventQueue`]; the host drains the queue after each
//! user action.
//!
//! A table that is never drained does not grow without bound: state events
//! replace any pending event of the same kind, and row clicks are capped at
//! [`MAX_PENDING_EVENTS`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::identity::RowIdentity;
use crate::sort::SortState;

/// An event emitted by a table.
#[derive(Debug, Clone)]
pub enum TableEvent<T> {
    /// The current page changed.
    PageChange(usize),
    /// The page size changed.
    PageSizeChange(usize),
    /// The selection set changed; carries the full new set.
    SelectionChange(HashSet<RowIdentity>),
    /// A row was activated.
    RowClick(Arc<T>),
    /// The sort state changed; `None` when sorting was cleared.
    SortChange(Option<SortState>),
}

/// Most events kept pending before the oldest row click is dropped.
pub const MAX_PENDING_EVENTS: usize = 256;

impl<T> TableEvent<T> {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            TableEvent::PageChange(_) => "page_change",
            TableEvent::PageSizeChange(_) => "page_size_change",
            TableEvent::SelectionChange(_) => "selection_change",
            TableEvent::RowClick(_) => "row_click",
            TableEvent::SortChange(_) => "sort_change",
        }
    }

    /// Whether this event reports a state value that a newer event of the
    /// same kind supersedes.
    pub fn is_state(&self) -> bool {
        !matches!(self, TableEvent::RowClick(_))
    }
}

/// FIFO of pending table events.
///
/// Holds at most one event of each state kind; pushing a newer one removes
/// the older and queues the new one last. Row clicks are all kept, up to
/// [`MAX_PENDING_EVENTS`].
#[derive(Debug)]
pub struct EventQueue<T> {
    pending: Vec<TableEvent<T>>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> EventQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    pub fn push(&mut self, event: TableEvent<T>) {
        log::debug!("TableEvent: {}", event.name());
        if event.is_state() {
            let kind = event.name();
            self.pending.retain(|e| e.name() != kind);
        }
        if self.pending.len() >= MAX_PENDING_EVENTS {
            let oldest_click = self.pending.iter().position(|e| !e.is_state());
            if let Some(index) = oldest_click {
                log::warn!(
                    "EventQueue: {} events pending, dropping the oldest row click",
                    self.pending.len()
                );
                self.pending.remove(index);
            }
        }
        self.pending.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<TableEvent<T>> {
        std::mem::take(&mut self.pending)
    }

    /// Look at the pending events without taking them.
    pub fn pending(&self) -> &[TableEvent<T>] {
        &self.pending
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
