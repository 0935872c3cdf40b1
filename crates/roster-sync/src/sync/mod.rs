//! Roster Synchronizer
//!
//! Runs the four remote operations and applies their results to the roster.
//! The roster only changes after a call succeeds. Concurrent operations are
//! not serialized: whichever finishes last writes last.


use log::{debug, error, info};

use crate::domain::{Operation, OperationError, Player, PlayerDraft, PlayerId, SyncError};
use crate::gateway::PlayerGateway;
use crate::roster::RosterStore;

pub type OperationResult<T> = Result<T, OperationError>;

/// Mediates between the local roster and the remote collection
#[derive(Debug, Clone)]
pub struct Synchronizer<G, S> {
    gateway: G,
    roster: S,
}

impl<G: PlayerGateway, S: RosterStore> Synchronizer<G, S> {
    pub fn new(gateway: G, roster: S) -> Self {
        Self { gateway, roster }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn roster(&self) -> &S {
        &self.roster
    }

    /// Replace the roster with the remote list. Returns how many players arrived.
    pub async fn load_all(&self) -> OperationResult<usize> {
        let players = self
            .gateway
            .list_players()
            .await
            .map_err(|e| report(Operation::LoadAll, e))?;
        let count = players.len();
        self.roster.replace_all(players);
        info!("Loaded {} players", count);
        Ok(count)
    }

    /// Fetch one player for a detail view. The roster is not touched.
    pub async fn load_one(&self, id: PlayerId) -> OperationResult<Player> {
        let player = self
            .gateway
            .get_player(id)
            .await
            .map_err(|e| report(Operation::LoadOne(id), e))?;
        debug!("Fetched player #{}", id);
        Ok(player)
    }

    /// Create a player and append the service's copy to the roster
    pub async fn create(&self, draft: PlayerDraft) -> OperationResult<Player> {
        let player = self
            .gateway
            .create_player(&draft)
            .await
            .map_err(|e| report(Operation::Create, e))?;
        info!("Added player #{} ({})", player.id, player.name);
        self.roster.append(player.clone());
        Ok(player)
    }

    /// Take the draft out of a form slot and create it.
    /// The slot is empty afterwards whether or not the create succeeds.
    pub async fn submit(&self, draft: &mut PlayerDraft) -> OperationResult<Player> {
        let draft = draft.take();
        self.create(draft).await
    }

    /// Delete a player remotely, then drop it from the roster
    pub async fn remove(&self, id: PlayerId) -> OperationResult<()> {
        self.gateway
            .delete_player(id)
            .await
            .map_err(|e| report(Operation::Remove(id), e))?;
        if !self.roster.remove(id) {
            debug!("Player #{} was already gone from the local roster", id);
        }
        info!("Removed player #{}", id);
        Ok(())
    }
}

/// Wrap and log a failed call
fn report(operation: Operation, source: SyncError) -> OperationError {
    let err = OperationError::new(operation, source);
    error!("{}", err);
    err
}
