//! Player Detail Component
//!
//! Shows the player last fetched with "See details". Hidden when empty.

use leptos::prelude::*;

use crate::components::player_card::photo_alt;
use crate::context::AppContext;

#[component]
pub fn PlayerDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.detail.get().map(|player| {
            let alt = photo_alt(&player.name);
            let breed = if player.breed.is_empty() { "unknown".to_string() } else { player.breed };
            view! {
                <div class="player-detail">
                    <div class="header-info">
                        <p class="pup-title">{player.name}</p>
                        <p class="pup-number">{format!("#{}", player.id)}</p>
                    </div>
                    <p class="pup-breed">"Breed: " {breed}</p>
                    {player.image_url.map(|src| view! { <img src=src alt=alt /> })}
                    <button class="close-button" on:click=move |_| ctx.close_detail()>"Close"</button>
                </div>
            }
        })}
    }
}
