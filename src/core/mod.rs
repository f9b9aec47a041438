//! Regeneration engine, independent of any particular host.
//!
//! ## Module Structure
//!
//! - `event`: progress reports and the channel generators report through
//! - `generator`: the schema generator collaborator
//! - `host`: the editor-facing surface (status item, notifications, views)
//! - `progress`: the animated progress indicator
//! - `registry`: per-project sessions with overlap rejection
//! - `session`: one regeneration attempt from snapshot to result
//! - `snapshot`: the retained snapshot and its virtual documents

pub mod event;
pub mod generator;
pub mod host;
pub mod progress;
pub mod registry;
pub mod session;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testing;

pub use event::{ProgressEvent, Reporter, reporter_channel};
pub use generator::{CommandGenerator, GenerateRequest, SchemaGenerator};
pub use host::{Affordance, Host, StatusItem};
pub use progress::ProgressIndicator;
pub use registry::{SessionBusy, SessionRegistry};
pub use session::{NO_LOCAL_CHANGES, Outcome, RegenerationSession, SchemaDiff};
pub use snapshot::{ContentError, ContentProvider, Document, SchemaDocument, Snapshot};
