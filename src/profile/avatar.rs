//! Avatar asset selection.
//!
//! Promoted operators use alternate artwork. The main character also has a
//! distinct first-promotion portrait, which no other operator does.

use crate::data::Roster;

/// Name of the operator whose first promotion has its own portrait.
pub const MAIN_CHARACTER_NAME: &str = "Amiya";

/// Directory holding operator portraits, relative to the asset root.
pub const AVATAR_DIR: &str = "avatars";

/// Asset identifier for an operator's portrait.
pub fn avatar_id(op_id: &str, promotion: u8, name: &str) -> String {
    if promotion == 2 {
        format!("{op_id}_2")
    } else if promotion == 1 && name == MAIN_CHARACTER_NAME {
        format!("{op_id}_1")
    } else {
        op_id.to_string()
    }
}

pub fn avatar_path(op_id: &str, promotion: u8, name: &str) -> String {
    format!("{AVATAR_DIR}/{}.png", avatar_id(op_id, promotion, name))
}

/// Portrait path for a roster member. Operators missing from the roster get
/// the unpromoted portrait.
pub fn roster_avatar_path(roster: &Roster, op_id: &str) -> String {
    match roster.get(op_id) {
        Some(op) => avatar_path(op_id, op.promotion, &op.name),
        None => {
            tracing::warn!(op_id, "Operator not in roster, using base portrait");
            format!("{AVATAR_DIR}/{op_id}.png")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Operator;

    fn operator(id: &str, name: &str, promotion: u8) -> Operator {
        Operator {
            id: id.into(),
            name: name.into(),
            promotion,
            mastery: vec![],
            skill_level: 1,
        }
    }

    #[test]
    fn elite_two_always_suffixed() {
        assert_eq!(avatar_path("char_002_amiya", 2, "Amiya"), "avatars/char_002_amiya_2.png");
        assert_eq!(avatar_path("char_017_huang", 2, "Blaze"), "avatars/char_017_huang_2.png");
    }

    #[test]
    fn elite_one_suffixed_only_for_main_character() {
        assert_eq!(avatar_path("char_002_amiya", 1, "Amiya"), "avatars/char_002_amiya_1.png");
        assert_eq!(avatar_path("char_017_huang", 1, "Blaze"), "avatars/char_017_huang.png");
    }

    #[test]
    fn main_character_match_is_exact() {
        assert_eq!(avatar_id("char_1001_amiya2", 1, "Amiya (Guard)"), "char_1001_amiya2");
        assert_eq!(avatar_id("char_002_amiya", 1, "amiya"), "char_002_amiya");
    }

    #[test]
    fn elite_zero_never_suffixed() {
        for name in ["Amiya", "Blaze", ""] {
            assert_eq!(avatar_path("char_x", 0, name), "avatars/char_x.png");
        }
    }

    #[test]
    fn roster_lookup_uses_operator_record() {
        let mut roster = Roster::new();
        roster.insert("char_002_amiya".into(), operator("char_002_amiya", "Amiya", 1));
        assert_eq!(
            roster_avatar_path(&roster, "char_002_amiya"),
            "avatars/char_002_amiya_1.png"
        );
    }

    #[test]
    fn roster_miss_falls_back_to_base_portrait() {
        let roster = Roster::new();
        assert_eq!(roster_avatar_path(&roster, "char_404"), "avatars/char_404.png");
    }
}
