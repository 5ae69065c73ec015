//! Toast Notifications
//!
//! User-visible transient messages (the original UI shows these as toasts).
//! The [`Notifier`] is a cheap cloneable handle over an unbounded channel;
//! whoever owns the receiving end decides how to render. Sends never fail
//! the caller — a dropped receiver simply means headless operation.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Toast>,
}

impl Notifier {
    pub fn new() -> (Self, UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        let _ = self.tx.send(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let _ = self.tx.send(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        });
    }
}
