//! Button events and the interrupt-side latch
//!
//! Interrupt handlers only record that a button was pressed. The main loop
//! drains the latch between cycles, so every handler runs to completion
//! without interleaving with a render or a state update.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A physical button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Both buttons together: recalibrate
    Combo,
    /// Single button: cycle the measurement display
    Single,
}

/// Number of presses the latch holds before dropping the oldest
pub const BUTTON_QUEUE_DEPTH: usize = 8;

/// Pending button presses, in the order they happened
///
/// Every press is kept, so two single presses between cycles toggle twice.
/// Once [`BUTTON_QUEUE_DEPTH`] presses are waiting, a new press pushes out the
/// oldest one.
pub struct ButtonLatch {
    pending: Mutex<RefCell<Deque<ButtonEvent, BUTTON_QUEUE_DEPTH>>>,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ButtonLatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonLatch")
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl ButtonLatch {
    /// Create an empty latch
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Record a press; call this from the button interrupt
    pub fn press(&self, event: ButtonEvent) {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow_ref_mut(cs);
            if pending.is_full() {
                pending.pop_front();
                log_warn!("Button queue is full, dropping oldest press");
            }
            // Cannot fail, a slot was freed above
            let _ = pending.push_back(event);
        });
    }

    /// Take the oldest pending press, if any
    pub fn take(&self) -> Option<ButtonEvent> {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).pop_front())
    }

    /// Number of presses waiting
    #[must_use]
    pub fn pending_count(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow_ref(cs).len())
    }

    /// Whether any press is waiting
    #[must_use]
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| !self.pending.borrow_ref(cs).is_empty())
    }

    /// Drop all pending presses
    pub fn clear(&self) {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).clear());
    }
}
