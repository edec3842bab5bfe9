//! Change notifications emitted after each successful mutation of the model.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeKind {
    /// A delta was applied; `keys` are its top-level keys.
    Delta { keys: Vec<String> },
    PluginRegistered { id: String },
    PluginUnregistered { id: String },
    /// The model went back to the disconnected placeholder.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelChange {
    pub ts: String,
    pub sequence: u64,
    #[serde(flatten)]
    pub kind: ChangeKind,
}

impl ModelChange {
    pub fn with_now(sequence: u64, kind: ChangeKind) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            sequence,
            kind,
        }
    }
}

/// Fan-out of changes to every live subscriber.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: Vec<Sender<ModelChange>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<ModelChange> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Send to all subscribers, dropping those whose receiver is gone.
    pub fn emit(&mut self, change: ModelChange) {
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
