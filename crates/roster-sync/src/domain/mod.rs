//! Domain Layer
//!
//! Player records, the creation draft and the error taxonomy.
//! No I/O lives here.

mod error;
mod player;

pub use error::{Operation, OperationError, SyncError, SyncResult};
pub use player::{Player, PlayerDraft, PlayerId};
