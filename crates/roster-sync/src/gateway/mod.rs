//! Gateway Layer
//!
//! Abstract access to the remote players collection.
//! `HttpGateway` talks to the real service; tests plug in fakes.

mod http;

use async_trait::async_trait;

use crate::domain::{Player, PlayerDraft, PlayerId, SyncResult};

pub use http::HttpGateway;

/// The four calls the roster needs from the remote collection.
///
/// Futures are not `Send`: in the browser they run on the page's event loop.
#[async_trait(?Send)]
pub trait PlayerGateway {
    /// `GET /players`
    async fn list_players(&self) -> SyncResult<Vec<Player>>;

    /// `GET /players/{id}`
    async fn get_player(&self, id: PlayerId) -> SyncResult<Player>;

    /// `POST /players`, returns the player with its assigned id
    async fn create_player(&self, draft: &PlayerDraft) -> SyncResult<Player>;

    /// `DELETE /players/{id}`
    async fn delete_player(&self, id: PlayerId) -> SyncResult<()>;
}
