//! Skill icon and rank badge selection for support units.

use crate::data::{Operator, OperatorTable};

pub const SKILL_DIR: &str = "skills";
pub const RANK_DIR: &str = "rank";

/// Backdrop drawn underneath every rank badge.
pub const RANK_BACKGROUND: &str = "rank/bg.png";

/// Rank shown over a skill icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Plain skill level (1-7), used when the skill has no mastery.
    SkillLevel(u8),
    /// Mastery specialization (1-3).
    Mastery(u8),
}

impl Rank {
    /// Unset and zero mastery both fall back to the skill level.
    pub fn from_levels(mastery: Option<u8>, skill_level: u8) -> Self {
        match mastery {
            Some(m) if m > 0 => Rank::Mastery(m),
            _ => Rank::SkillLevel(skill_level),
        }
    }

    pub fn asset_path(&self) -> String {
        match self {
            Rank::SkillLevel(level) => format!("{RANK_DIR}/{level}.png"),
            Rank::Mastery(level) => format!("{RANK_DIR}/m-{level}.png"),
        }
    }

    pub fn alt_text(&self) -> String {
        match self {
            Rank::SkillLevel(level) => format!("Level {level}"),
            Rank::Mastery(level) => format!("Mastery Level {level}"),
        }
    }
}

/// Equipped skill of a support unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBadge {
    pub slot: usize,
    /// `None` when the reference table has no skill at this slot.
    pub icon: Option<String>,
    pub rank: Rank,
}

impl SkillBadge {
    pub fn resolve(op_id: &str, op: &Operator, table: &OperatorTable, slot: usize) -> Self {
        let icon = table
            .skill(op_id, slot)
            .and_then(|skill| skill.asset_key())
            .map(|key| format!("{SKILL_DIR}/{key}.png"));
        Self {
            slot,
            icon,
            rank: Rank::from_levels(op.mastery_at(slot), op.skill_level),
        }
    }

    /// Rank badge images, bottom layer first.
    pub fn rank_layers(&self) -> [String; 2] {
        [RANK_BACKGROUND.to_string(), self.rank.asset_path()]
    }

    /// Label for the skill icon, numbered from one.
    pub fn alt_text(&self) -> String {
        format!("Skill {}", self.slot + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{OperatorInfo, SkillInfo};
    use std::collections::HashMap;

    fn blaze(mastery: Vec<Option<u8>>) -> Operator {
        Operator {
            id: "char_017_huang".into(),
            name: "Blaze".into(),
            promotion: 2,
            mastery,
            skill_level: 7,
        }
    }

    fn table() -> OperatorTable {
        let mut entries = HashMap::new();
        entries.insert(
            "char_017_huang".to_string(),
            OperatorInfo {
                skills: vec![
                    SkillInfo {
                        icon_id: Some("skcom_atk_up[2]".into()),
                        skill_id: Some("skchr_huang_1".into()),
                    },
                    SkillInfo {
                        icon_id: None,
                        skill_id: Some("skchr_huang_2".into()),
                    },
                    SkillInfo {
                        icon_id: None,
                        skill_id: None,
                    },
                ],
            },
        );
        OperatorTable::new(entries)
    }

    #[test]
    fn zero_or_missing_mastery_uses_skill_level() {
        assert_eq!(Rank::from_levels(None, 7), Rank::SkillLevel(7));
        assert_eq!(Rank::from_levels(Some(0), 4), Rank::SkillLevel(4));
        assert_eq!(Rank::SkillLevel(7).asset_path(), "rank/7.png");
        assert_eq!(Rank::SkillLevel(7).alt_text(), "Level 7");
    }

    #[test]
    fn mastery_uses_mastery_badge() {
        let rank = Rank::from_levels(Some(3), 7);
        assert_eq!(rank, Rank::Mastery(3));
        assert_eq!(rank.asset_path(), "rank/m-3.png");
        assert_eq!(rank.alt_text(), "Mastery Level 3");
    }

    #[test]
    fn icon_prefers_icon_id_then_skill_id() {
        let op = blaze(vec![Some(3), Some(0)]);
        let first = SkillBadge::resolve("char_017_huang", &op, &table(), 0);
        let second = SkillBadge::resolve("char_017_huang", &op, &table(), 1);

        assert_eq!(first.icon.as_deref(), Some("skills/skcom_atk_up[2].png"));
        assert_eq!(first.rank, Rank::Mastery(3));
        assert_eq!(first.rank_layers(), ["rank/bg.png".to_string(), "rank/m-3.png".to_string()]);
        assert_eq!(second.icon.as_deref(), Some("skills/skchr_huang_2.png"));
        assert_eq!(second.rank, Rank::SkillLevel(7));
        assert_eq!(second.alt_text(), "Skill 2");
    }

    #[test]
    fn skill_without_identifiers_has_no_icon() {
        let op = blaze(vec![Some(3), Some(3), Some(2)]);
        let badge = SkillBadge::resolve("char_017_huang", &op, &table(), 2);
        assert_eq!(badge.icon, None);
        assert_eq!(badge.rank, Rank::Mastery(2));
    }

    #[test]
    fn out_of_range_slot_has_no_icon_and_no_mastery() {
        let op = blaze(vec![Some(3), Some(3)]);
        let badge = SkillBadge::resolve("char_017_huang", &op, &table(), 5);
        assert_eq!(badge.icon, None);
        assert_eq!(badge.rank, Rank::SkillLevel(7));
    }
}
