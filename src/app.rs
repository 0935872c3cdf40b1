//! Puppy Roster Frontend App
//!
//! Main application component: creation form, search, detail panel and roster.

use leptos::prelude::*;
use reactive_stores::Store;
use roster_sync::{ApiConfig, HttpGateway, Player, Synchronizer};

use crate::components::{NewPlayerForm, PlayerDetail, PlayerList, SearchBar};
use crate::context::AppContext;
use crate::store::{player_count, visible_players, AppState, StoreRoster};

/// "3 players", or "1 of 3 players" while a search hides some
pub fn count_label(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "player" } else { "players" };
    if shown == total {
        format!("{} {}", total, noun)
    } else {
        format!("{} of {} {}", shown, total, noun)
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (search_term, set_search_term) = signal(String::new());
    let (detail, set_detail) = signal::<Option<Player>>(None);

    let config = ApiConfig::from_env();
    log::info!("Using players API at {}", config.base_url);
    let sync = Synchronizer::new(HttpGateway::new(config), StoreRoster(store));

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(sync, (detail, set_detail));
    provide_context(ctx);

    // Load the roster once on mount
    Effect::new(move |_| ctx.load_all());

    let visible = Memo::new(move |_| visible_players(&store, &search_term.get()));

    view! {
        <div class="app-layout">
            <h1>"Puppy Bowl Roster"</h1>

            <NewPlayerForm />

            <SearchBar search_term=search_term set_search_term=set_search_term />

            <PlayerDetail />

            <PlayerList players=visible />

            <p class="player-count">{move || count_label(visible.get().len(), player_count(&store))}</p>
        </div>
    }
}
