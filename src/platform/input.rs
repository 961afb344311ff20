//! Input capture
//!
//! Event handlers post intents into a mailbox of capacity one; the game
//! drains it once per frame. Presses that arrive while an intent is already
//! waiting are dropped, so any number of presses in one frame count once.

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

/// What the player asked for. Its meaning depends on the game phase:
/// start, jump or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Activate,
}

/// Keys that activate: space, arrow up, `w`
pub fn is_activate_key(key: &str) -> bool {
    matches!(key, " " | "ArrowUp" | "w")
}

/// Write end handed to event handlers
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: Sender<Intent>,
}

impl IntentSender {
    /// Post an intent. Returns false if one was already waiting.
    pub fn post(&self, intent: Intent) -> bool {
        match self.tx.try_send(intent) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => false,
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("Input mailbox closed, dropping {:?}", intent);
                false
            }
        }
    }
}

/// Single-slot mailbox between input handlers and the frame loop
#[derive(Debug)]
pub struct InputMailbox {
    tx: Sender<Intent>,
    rx: Receiver<Intent>,
}

impl Default for InputMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMailbox {
    pub fn new() -> Self {
        let (tx, rx) = bounded(1);
        Self { tx, rx }
    }

    pub fn sender(&self) -> IntentSender {
        IntentSender {
            tx: self.tx.clone(),
        }
    }

    /// Take the waiting intent, if any
    pub fn drain(&self) -> Option<Intent> {
        self.rx.try_recv().ok()
    }
}
