//! Machine Model: Typed Object Model Mirror for Machine Controllers
//!
//! Keeps a client-side copy of a machine controller's object model current by
//! merging the partial JSON deltas the controller pushes. The tree is strongly
//! typed; deltas are applied all-or-nothing and every successful change is
//! announced to subscribers.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod instance;
pub mod logging;
pub mod merge;
pub mod model;
pub mod projections;

pub use error::{ApplyWarning, ModelError, SettingsError};
pub use events::{ChangeKind, ModelChange};
pub use instance::MachineModel;
pub use merge::{ListTruncation, MergeOptions, ModelPath};
pub use model::{ApplyReport, ObjectModel};
