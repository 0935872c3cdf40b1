//! Player List Component
//!
//! Renders the filtered roster as cards.

use leptos::prelude::*;
use roster_sync::Player;

use crate::components::PlayerCard;

#[component]
pub fn PlayerList(players: Memo<Vec<Player>>) -> impl IntoView {
    view! {
        <div id="all-players-container">
            <For
                each=move || players.get()
                key=|player| (player.id, player.name.clone(), player.image_url.clone())
                children=move |player| view! { <PlayerCard player=player /> }
            />
        </div>
    }
}
