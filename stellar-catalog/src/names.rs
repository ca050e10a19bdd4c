//! Proper-name resolution against a caller-supplied dictionary.
//!
//! The dictionary maps identifier strings (designations, `HD n`-style
//! cross-index numbers) to proper names. It is owned by the host
//! application; the loaders only borrow it, once per decoded record.

use crate::star::Star;
use std::collections::HashMap;

/// Identifier → proper-name map supplied by the caller.
pub type StarNames = HashMap<String, String>;

/// Returns the proper name for the first of the star's
/// [`identifiers`](Star::identifiers) present in the dictionary.
///
/// Pure: no match simply yields `None`.
pub fn resolve(star: &Star, names: &StarNames) -> Option<String> {
    star.identifiers()
        .into_iter()
        .find_map(|id| names.get(&id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Star {
        Star {
            number: 2491,
            name: " 9Alp CMa".to_string(),
            hd_number: Some("48915".to_string()),
            sao_number: Some(151881),
            fk5_number: None,
            variable_name: None,
            ra: 101.28708,
            dec: -16.716111,
            pm_ra: None,
            pm_dec: None,
            mag: -1.46,
            color: 'B',
            proper_name: None,
        }
    }

    #[test]
    fn test_resolve_by_hd_number() {
        let mut names = StarNames::new();
        names.insert("HD 48915".to_string(), "Sirius".to_string());
        assert_eq!(resolve(&star(), &names), Some("Sirius".to_string()));
    }

    #[test]
    fn test_designation_beats_later_candidates() {
        let mut names = StarNames::new();
        names.insert("9Alp CMa".to_string(), "Sirius".to_string());
        names.insert("HD 48915".to_string(), "wrong".to_string());
        assert_eq!(resolve(&star(), &names), Some("Sirius".to_string()));
    }

    #[test]
    fn test_no_match_is_none() {
        let names = StarNames::new();
        assert_eq!(resolve(&star(), &names), None);
    }
}
