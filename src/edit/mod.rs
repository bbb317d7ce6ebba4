//! Sprinkling edit dialog.
//!
//! The owner of the override store opens the dialog with an [`EditRequest`]
//! and keeps the matching [`PendingEdit`]. The dialog answers exactly once
//! through the request's channel; the owner picks the answer up with
//! [`PendingEdit::poll`] and applies it.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::{GrowflowError, Result};
use crate::overrides::OverrideKey;

/// Answer of the dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// New sprinkling amount in mm.
    Confirmed(f64),
    /// Dismissed; the stored value stays as it was.
    Cancelled,
}

/// Request to edit one override value.
#[derive(Debug)]
pub struct EditRequest {
    key: OverrideKey,
    current: f64,
    reply: Sender<EditOutcome>,
}

impl EditRequest {
    /// Create a request and the handle that receives its answer.
    pub fn new(key: OverrideKey, current: f64) -> (Self, PendingEdit) {
        let (reply, receiver) = mpsc::channel();
        let pending = PendingEdit {
            key: key.clone(),
            receiver,
        };
        (
            Self {
                key,
                current,
                reply,
            },
            pending,
        )
    }

    /// Key to edit.
    pub fn key(&self) -> &OverrideKey {
        &self.key
    }

    /// Value stored for the key when the request was made.
    pub fn current(&self) -> f64 {
        self.current
    }

    fn answer(self, outcome: EditOutcome) {
        if self.reply.send(outcome).is_err() {
            tracing::debug!("Edit for {} answered after its owner went away", self.key);
        }
    }
}

/// Owner side of an open edit.
#[derive(Debug)]
pub struct PendingEdit {
    key: OverrideKey,
    receiver: Receiver<EditOutcome>,
}

impl PendingEdit {
    /// Key the edit applies to.
    pub fn key(&self) -> &OverrideKey {
        &self.key
    }

    /// The dialog's answer, if it has given one.
    ///
    /// A dialog dropped without answering counts as cancelled.
    pub fn poll(&self) -> Option<EditOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(EditOutcome::Cancelled),
        }
    }
}

/// Modal input for one sprinkling value.
#[derive(Debug, Default)]
pub struct SprinklingDialog {
    request: Option<EditRequest>,
    buffer: String,
    error: Option<String>,
}

impl SprinklingDialog {
    /// A closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog for `request`, prefilled with its current value.
    pub fn open(&mut self, request: EditRequest) -> Result<()> {
        if self.request.is_some() {
            return Err(GrowflowError::EditInProgress);
        }
        self.buffer = if request.current() == 0.0 {
            String::new()
        } else {
            request.current().to_string()
        };
        self.error = None;
        self.request = Some(request);
        Ok(())
    }

    /// Whether a request is being edited.
    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    /// Key being edited.
    pub fn key(&self) -> Option<&OverrideKey> {
        self.request.as_ref().map(EditRequest::key)
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Message about the last rejected input.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Add a character; only digits and one decimal point are taken.
    pub fn input(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')) {
            self.buffer.push(c);
            self.error = None;
        }
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Submit the buffer. An empty buffer means 0.
    ///
    /// Returns `false` and keeps the dialog open when the input is not a
    /// non-negative number.
    pub fn confirm(&mut self) -> bool {
        if self.request.is_none() {
            return false;
        }
        let text = self.buffer.trim();
        let parsed = if text.is_empty() {
            Ok(0.0)
        } else {
            text.parse::<f64>()
        };
        match parsed {
            Ok(v) if v.is_finite() && v >= 0.0 => {
                self.close(EditOutcome::Confirmed(v));
                true
            }
            _ => {
                self.error = Some(format!("'{}' is not a sprinkling amount", text));
                false
            }
        }
    }

    /// Close without changing anything.
    pub fn cancel(&mut self) {
        self.close(EditOutcome::Cancelled);
    }

    fn close(&mut self, outcome: EditOutcome) {
        if let Some(request) = self.request.take() {
            request.answer(outcome);
        }
        self.buffer.clear();
        self.error = None;
    }
}
