//! Weighted-draw bonus table. Weight is `level + bonus(rarity, elite)`; the
//! bonus rewards promoted high-rarity operators so an invested account skews
//! the draw toward its raised units.

use crate::roster::Operator;

/// Fixed bonus by rarity and promotion tier.
pub fn rarity_bonus(rarity: u8, elite: u8) -> u32 {
    match rarity {
        6 => {
            if elite == 2 {
                130
            } else {
                50
            }
        }
        5 => {
            if elite == 2 {
                120
            } else {
                50
            }
        }
        4 => {
            if elite == 2 {
                105
            } else {
                45
            }
        }
        3 => {
            if elite == 1 {
                40
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Draw weight for one operator. Fixed at validation time; draws never
/// recompute it, only the remaining pool shrinks.
pub fn selection_weight(operator: &Operator) -> u64 {
    u64::from(operator.level) + u64::from(rarity_bonus(operator.rarity, operator.elite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn operator(rarity: u8, elite: u8, level: u32) -> Operator {
        Operator {
            id: json!(1),
            name: "test".to_string(),
            elite,
            level,
            rarity,
            own: true,
            potential: 6,
        }
    }

    #[test]
    fn bonus_table_matches_business_rules() {
        assert_eq!(rarity_bonus(6, 2), 130);
        assert_eq!(rarity_bonus(6, 1), 50);
        assert_eq!(rarity_bonus(6, 0), 50);
        assert_eq!(rarity_bonus(5, 2), 120);
        assert_eq!(rarity_bonus(5, 0), 50);
        assert_eq!(rarity_bonus(4, 2), 105);
        assert_eq!(rarity_bonus(4, 1), 45);
        assert_eq!(rarity_bonus(3, 1), 40);
        assert_eq!(rarity_bonus(3, 0), 0);
        assert_eq!(rarity_bonus(2, 0), 0);
        assert_eq!(rarity_bonus(1, 0), 0);
    }

    #[test]
    fn weight_adds_level_to_bonus() {
        assert_eq!(selection_weight(&operator(6, 2, 90)), 220);
        assert_eq!(selection_weight(&operator(3, 0, 1)), 1);
        assert_eq!(selection_weight(&operator(2, 0, 30)), 30);
    }
}
