//! Application Context
//!
//! Shared state provided via Leptos Context API.
//! Components reach the synchronizer through here instead of calling the API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use roster_sync::{HttpGateway, Player, PlayerDraft, PlayerId, Synchronizer};

use crate::store::StoreRoster;

/// Synchronizer wired to the HTTP API and the app store
pub type RosterSync = Synchronizer<HttpGateway, StoreRoster>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    sync: StoredValue<RosterSync, LocalStorage>,
    /// Player shown in the detail panel - read
    pub detail: ReadSignal<Option<Player>>,
    /// Player shown in the detail panel - write
    set_detail: WriteSignal<Option<Player>>,
}

impl AppContext {
    pub fn new(sync: RosterSync, detail: (ReadSignal<Option<Player>>, WriteSignal<Option<Player>>)) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
            detail: detail.0,
            set_detail: detail.1,
        }
    }

    fn synchronizer(&self) -> RosterSync {
        self.sync.get_value()
    }

    // Failures are logged by the synchronizer; the UI just doesn't change.

    /// Refresh the whole roster from the API
    pub fn load_all(&self) {
        let sync = self.synchronizer();
        spawn_local(async move {
            let _ = sync.load_all().await;
        });
    }

    /// Submit a new player
    pub fn create(&self, draft: PlayerDraft) {
        let sync = self.synchronizer();
        spawn_local(async move {
            let _ = sync.create(draft).await;
        });
    }

    /// Delete a player, closing its detail panel if open
    pub fn remove(&self, id: PlayerId) {
        let sync = self.synchronizer();
        let set_detail = self.set_detail;
        spawn_local(async move {
            if sync.remove(id).await.is_ok() {
                set_detail.update(|detail| {
                    if detail.as_ref().is_some_and(|p| p.id == id) {
                        *detail = None;
                    }
                });
            }
        });
    }

    /// Fetch a player fresh and show it in the detail panel
    pub fn show_detail(&self, id: PlayerId) {
        let sync = self.synchronizer();
        let set_detail = self.set_detail;
        spawn_local(async move {
            if let Ok(player) = sync.load_one(id).await {
                set_detail.set(Some(player));
            }
        });
    }

    pub fn close_detail(&self) {
        self.set_detail.set(None);
    }
}
