//! Roster Sync
//!
//! Platform-agnostic data layer for the roster client:
//! - domain: Player, draft and error types
//! - gateway: remote collection access (HTTP via reqwest)
//! - roster: the owned local roster container
//! - sync: the synchronizer tying the two together
//! - filter: name search

pub mod config;
pub mod domain;
mod envelope;
pub mod filter;
pub mod gateway;
pub mod roster;
pub mod sync;

pub use config::ApiConfig;
pub use domain::{Operation, OperationError, Player, PlayerDraft, PlayerId, SyncError, SyncResult};
pub use filter::{filter_players, name_matches};
pub use gateway::{HttpGateway, PlayerGateway};
pub use roster::{remove_first, RosterStore, SharedRoster};
pub use sync::{OperationResult, Synchronizer};
