//! Player Card Component
//!
//! One roster entry with its detail and remove buttons.

use leptos::prelude::*;
use roster_sync::Player;

use crate::context::AppContext;

/// Alt text for a player's photo
pub fn photo_alt(name: &str) -> String {
    format!("photo of {} the puppy", name)
}

#[component]
pub fn PlayerCard(player: Player) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = player.id;
    let alt = photo_alt(&player.name);

    view! {
        <div class="single-player-card">
            <div class="header-info">
                <p class="pup-title">{player.name}</p>
                <p class="pup-number">{format!("#{}", id)}</p>
            </div>
            {player.image_url.map(|src| view! { <img src=src alt=alt /> })}
            <button class="detail-button" on:click=move |_| ctx.show_detail(id)>"See details"</button>
            <button class="delete-button" on:click=move |_| ctx.remove(id)>"Remove from roster"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::photo_alt;

    #[test]
    fn test_photo_alt() {
        assert_eq!(photo_alt("Rex"), "photo of Rex the puppy");
    }
}
