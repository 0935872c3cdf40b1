use leptos::prelude::*;

/// Name search box. Filters on every keystroke.
#[component]
pub fn SearchBar(
    search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-bar"
            placeholder="Search player"
            prop:value=move || search_term.get()
            on:input=move |ev| set_search_term.set(event_target_value(&ev))
        />
    }
}
