//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The roster lives here; the synchronizer writes to it through `StoreRoster`.

use leptos::prelude::*;
use reactive_stores::Store;
use roster_sync::{filter_players, remove_first, Player, PlayerId, RosterStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local roster: remote list order, then players added this session
    pub players: Vec<Player>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Roster container backed by the app store
#[derive(Clone, Copy)]
pub struct StoreRoster(pub AppStore);

impl RosterStore for StoreRoster {
    fn replace_all(&self, players: Vec<Player>) {
        *self.0.players().write() = players;
    }

    fn append(&self, player: Player) {
        self.0.players().write().push(player);
    }

    fn remove(&self, id: PlayerId) -> bool {
        remove_first(&mut self.0.players().write(), id)
    }

    fn snapshot(&self) -> Vec<Player> {
        self.0.players().get_untracked()
    }
}

// ========================
// Derived Views
// ========================

/// Players whose name matches the search term (tracked)
pub fn visible_players(store: &AppStore, search_term: &str) -> Vec<Player> {
    filter_players(&store.players().read(), search_term)
}

/// Size of the whole roster (tracked)
pub fn player_count(store: &AppStore) -> usize {
    store.players().read().len()
}
