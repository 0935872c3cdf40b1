//! Roster State
//!
//! The local copy of the collection. The synchronizer only touches it through
//! `RosterStore`, so the UI can back it with a reactive store.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Player, PlayerId};

/// Owned roster container mutated by the synchronizer
pub trait RosterStore {
    /// Replace the whole roster
    fn replace_all(&self, players: Vec<Player>);

    /// Add a player at the end
    fn append(&self, player: Player);

    /// Remove the first player with this id, returns whether one was found
    fn remove(&self, id: PlayerId) -> bool;

    /// Current contents, in order
    fn snapshot(&self) -> Vec<Player>;
}

/// Single-threaded shared roster. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    players: Rc<RefCell<Vec<Player>>>,
}

impl SharedRoster {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: Rc::new(RefCell::new(players)),
        }
    }

    pub fn len(&self) -> usize {
        self.players.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.borrow().is_empty()
    }
}

/// Remove the first player with `id` from a list
pub fn remove_first(players: &mut Vec<Player>, id: PlayerId) -> bool {
    match players.iter().position(|p| p.id == id) {
        Some(index) => {
            players.remove(index);
            true
        }
        None => false,
    }
}

impl RosterStore for SharedRoster {
    fn replace_all(&self, players: Vec<Player>) {
        *self.players.borrow_mut() = players;
    }

    fn append(&self, player: Player) {
        self.players.borrow_mut().push(player);
    }

    fn remove(&self, id: PlayerId) -> bool {
        remove_first(&mut self.players.borrow_mut(), id)
    }

    fn snapshot(&self) -> Vec<Player> {
        self.players.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first_only() {
        let mut players = vec![
            Player::new(1, "Fido", "Mutt"),
            Player::new(2, "Rex", "Boxer"),
            Player::new(2, "Rex again", "Boxer"),
        ];
        assert!(remove_first(&mut players, 2));
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name, "Rex again");
        assert!(!remove_first(&mut players, 99));
    }

    #[test]
    fn test_clones_share_state() {
        let roster = SharedRoster::default();
        let other = roster.clone();
        other.append(Player::new(1, "Fido", "Mutt"));
        assert_eq!(roster.len(), 1);
        roster.replace_all(vec![]);
        assert!(other.is_empty());
    }
}
