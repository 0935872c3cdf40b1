//! UI Components
//!
//! Leptos components for the roster page.

mod new_player_form;
mod player_card;
mod player_detail;
mod player_list;
mod search_bar;

pub use new_player_form::NewPlayerForm;
pub use player_card::PlayerCard;
pub use player_detail::PlayerDetail;
pub use player_list::PlayerList;
pub use search_bar::SearchBar;
