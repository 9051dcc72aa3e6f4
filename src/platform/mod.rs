//! Platform abstraction layer
//!
//! Turns host input (key names, on-screen buttons) into the narrow set of
//! signals the session understands, and scopes listener lifetime with a
//! guard: while an [`Attachment`] is alive host events are queued, and
//! dropping the last one releases any held movement.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Abstract input consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSignal {
    MoveUpPressed,
    MoveUpReleased,
    MoveDownPressed,
    MoveDownReleased,
    /// Pointer/touch lifted from an on-screen button: clears both directions
    ButtonsReleased,
    RequestReset,
}

/// On-screen control buttons (touch devices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
}

/// Map a keyboard key (DOM `KeyboardEvent.key` naming) to a signal
pub fn signal_for_key(key: &str, pressed: bool) -> Option<InputSignal> {
    match (key, pressed) {
        ("ArrowUp", true) => Some(InputSignal::MoveUpPressed),
        ("ArrowUp", false) => Some(InputSignal::MoveUpReleased),
        ("ArrowDown", true) => Some(InputSignal::MoveDownPressed),
        ("ArrowDown", false) => Some(InputSignal::MoveDownReleased),
        _ => None,
    }
}

/// Map an on-screen button press or release to a signal
pub fn signal_for_button(button: Button, pressed: bool) -> InputSignal {
    match (button, pressed) {
        (Button::Up, true) => InputSignal::MoveUpPressed,
        (Button::Down, true) => InputSignal::MoveDownPressed,
        (_, false) => InputSignal::ButtonsReleased,
    }
}

#[derive(Debug, Default)]
struct QueueInner {
    listeners: u32,
    pending: VecDeque<InputSignal>,
}

/// Single-threaded queue between host event callbacks and the session
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting host events until the returned guard is dropped
    pub fn attach(&self) -> Attachment {
        self.inner.borrow_mut().listeners += 1;
        log::debug!("Input listener attached");
        Attachment {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().listeners > 0
    }

    /// Queue a signal. Ignored while detached. Returns true if queued.
    pub fn push(&self, signal: InputSignal) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.listeners == 0 {
            return false;
        }
        inner.pending.push_back(signal);
        true
    }

    /// Queue a key event; keys without a binding are ignored
    pub fn push_key(&self, key: &str, pressed: bool) -> bool {
        signal_for_key(key, pressed).is_some_and(|signal| self.push(signal))
    }

    pub fn push_button(&self, button: Button, pressed: bool) -> bool {
        self.push(signal_for_button(button, pressed))
    }

    /// Take every queued signal in arrival order
    pub fn drain(&self) -> Vec<InputSignal> {
        self.inner.borrow_mut().pending.drain(..).collect()
    }
}

/// Live listener registration; detaches on drop
#[derive(Debug)]
pub struct Attachment {
    inner: Rc<RefCell<QueueInner>>,
}

impl Attachment {
    /// Explicit detach (same as dropping the guard)
    pub fn detach(self) {}
}

impl Drop for Attachment {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.listeners = inner.listeners.saturating_sub(1);
        if inner.listeners == 0 {
            // Release events will never arrive now; let go of held buttons
            inner.pending.clear();
            inner.pending.push_back(InputSignal::ButtonsReleased);
            log::debug!("Input listener detached");
        }
    }
}
