//! Search Filter
//!
//! Case-insensitive name search over the roster.

use crate::domain::Player;

/// Does `name` contain `term`, ignoring case?
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Players whose name contains `term`, in roster order.
/// An empty term keeps everyone.
pub fn filter_players(players: &[Player], term: &str) -> Vec<Player> {
    if term.is_empty() {
        return players.to_vec();
    }
    players
        .iter()
        .filter(|p| name_matches(&p.name, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new(1, "Fido", "Mutt"),
            Player::new(2, "Rex", "Boxer"),
            Player::new(3, "Andrea", "Poodle"),
            Player::new(4, "REGGIE", "Pug"),
        ]
    }

    fn ids(players: &[Player]) -> Vec<u32> {
        players.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_substring_match_ignores_case() {
        assert_eq!(ids(&filter_players(&roster(), "re")), vec![2, 3, 4]);
        assert_eq!(ids(&filter_players(&roster(), "RE")), vec![2, 3, 4]);
    }

    #[test]
    fn test_fido_rex_scenario() {
        let players = vec![Player::new(1, "Fido", ""), Player::new(2, "Rex", "")];
        assert_eq!(filter_players(&players, "re"), vec![Player::new(2, "Rex", "")]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        assert_eq!(filter_players(&roster(), ""), roster());
    }

    #[test]
    fn test_no_match() {
        assert!(filter_players(&roster(), "zzz").is_empty());
    }

    #[test]
    fn test_matches_predicate_agrees_with_filter() {
        for term in ["", "f", "Ex", "gG", "o", "dre", "x y"] {
            let expected: Vec<u32> = roster()
                .iter()
                .filter(|p| name_matches(&p.name, term))
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filter_players(&roster(), term)), expected, "term {:?}", term);
        }
    }
}
