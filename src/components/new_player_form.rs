//! New Player Form Component
//!
//! Collects name and breed for a new player.

use leptos::prelude::*;
use roster_sync::PlayerDraft;

use crate::context::AppContext;

/// Form for adding a player to the roster
#[component]
pub fn NewPlayerForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(PlayerDraft::default());

    let add_player = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // The form clears as soon as the request is issued, even if it later fails
        if let Some(submitted) = set_draft.try_update(PlayerDraft::take) {
            ctx.create(submitted);
        }
    };

    view! {
        <div id="new-player-form">
            <form on:submit=add_player>
                <label>
                    "Name:"
                    <input
                        type="text"
                        required=true
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Breed:"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.breed.clone())
                        on:input=move |ev| set_draft.update(|d| d.breed = event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Submit"</button>
            </form>
        </div>
    }
}
