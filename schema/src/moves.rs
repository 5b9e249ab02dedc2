use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every move in the catalog.
///
/// The display name doubles as the parse key, so `"Water Gun".parse()`
/// yields `Move::WaterGun`. Parsing is exact; callers normalize case first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Move {
    #[strum(to_string = "Tackle")]
    Tackle,
    #[strum(to_string = "Ember")]
    Ember,
    #[strum(to_string = "Water Gun")]
    WaterGun,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Move::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["Tackle", "Ember", "Water Gun"]);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Move::from_str("Water Gun"), Ok(Move::WaterGun));
        assert!(Move::from_str("water gun").is_err());
        assert!(Move::from_str("WaterGun").is_err());
    }
}
