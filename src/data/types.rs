use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operators owned by the player, keyed by operator identifier.
pub type Roster = HashMap<String, Operator>;

/// One owned operator as recorded in the player's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: String,
    pub name: String,
    /// Promotion tier (elite level), 0 through 2.
    #[serde(default)]
    pub promotion: u8,
    /// Mastery level per skill slot. Entries may be missing or null.
    #[serde(default)]
    pub mastery: Vec<Option<u8>>,
    #[serde(default = "default_skill_level")]
    pub skill_level: u8,
}

fn default_skill_level() -> u8 {
    1
}

impl Operator {
    /// Mastery level at `slot`, or `None` when unset or the slot does not exist.
    pub fn mastery_at(&self, slot: usize) -> Option<u8> {
        self.mastery.get(slot).copied().flatten()
    }
}

/// Player profile ("doctor" account) as exported by the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Operator chosen as the profile assistant.
    #[serde(default)]
    pub assistant: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub friend_code: Option<FriendCode>,
    #[serde(default)]
    pub level: Option<u32>,
    /// Onboarding date, kept verbatim as supplied upstream.
    #[serde(default)]
    pub onboard: Option<String>,
    #[serde(default)]
    pub support: Vec<SupportEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendCode {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// A support unit slot on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportEntry {
    #[serde(rename = "opID")]
    pub op_id: String,
    /// Zero-based index of the equipped skill.
    #[serde(rename = "opSkill", default)]
    pub op_skill: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialInfo {
    #[serde(default)]
    pub discord: Option<DiscordHandle>,
    #[serde(default)]
    pub reddit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscordHandle {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Static per-operator game data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorInfo {
    #[serde(default)]
    pub skills: Vec<SkillInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    #[serde(default)]
    pub icon_id: Option<String>,
    #[serde(default)]
    pub skill_id: Option<String>,
}

impl SkillInfo {
    /// Asset key for the skill icon: the icon id when present, else the skill id.
    pub fn asset_key(&self) -> Option<&str> {
        self.icon_id.as_deref().or(self.skill_id.as_deref())
    }
}

/// Build-time reference table keyed by operator identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorTable(HashMap<String, OperatorInfo>);

impl OperatorTable {
    pub fn new(entries: HashMap<String, OperatorInfo>) -> Self {
        Self(entries)
    }

    pub fn get(&self, op_id: &str) -> Option<&OperatorInfo> {
        self.0.get(op_id)
    }

    /// Skill at `slot` for `op_id`, if both exist.
    pub fn skill(&self, op_id: &str, slot: usize) -> Option<&SkillInfo> {
        self.get(op_id).and_then(|info| info.skills.get(slot))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
