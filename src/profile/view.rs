//! Display projection of a player profile.
//!
//! Everything the dialog prints is computed here with the placeholder
//! fallbacks applied, so rendering only has to lay strings out.

use crate::data::{AccountInfo, OperatorTable, Roster, SocialInfo, SupportEntry};
use crate::profile::avatar::roster_avatar_path;
use crate::profile::skill::SkillBadge;

pub const SERVER_UNKNOWN: &str = "Server Unknown";
pub const TAG_UNKNOWN: &str = "Tag Unknown";
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportView {
    pub op_id: String,
    /// Roster name; `None` when the operator is not in the roster.
    pub name: Option<String>,
    pub avatar: String,
    /// Omitted when the operator is not in the roster.
    pub skill: Option<SkillBadge>,
}

impl SupportView {
    /// Name to show, falling back to the operator identifier.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.op_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Assistant portrait; `None` when no assistant is set.
    pub avatar: Option<String>,
    pub display_name: String,
    pub server: String,
    pub friend_code: String,
    pub level: String,
    pub onboard: String,
    pub supports: Vec<SupportView>,
    pub discord: String,
    pub reddit: String,
}

impl ProfileView {
    pub fn build(
        roster: &Roster,
        account: Option<&AccountInfo>,
        social: Option<&SocialInfo>,
        operators: &OperatorTable,
    ) -> Self {
        let avatar = account
            .and_then(|a| a.assistant.as_deref())
            .map(|assistant| roster_avatar_path(roster, assistant));

        let friend_code = account.and_then(|a| a.friend_code.as_ref());
        let friend_code = format!(
            "{}#{}",
            friend_code
                .and_then(|fc| fc.username.as_deref())
                .unwrap_or_default(),
            friend_code
                .and_then(|fc| fc.tag.as_deref())
                .unwrap_or(TAG_UNKNOWN),
        );

        let discord = social.and_then(|s| s.discord.as_ref());
        let discord = format!(
            "{}#{}",
            discord.and_then(|d| d.username.as_deref()).unwrap_or_default(),
            discord.and_then(|d| d.tag.as_deref()).unwrap_or_default(),
        );

        let supports: Vec<SupportView> = account
            .map(|a| {
                a.support
                    .iter()
                    .map(|entry| support_view(roster, operators, entry))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            avatar,
            display_name: account
                .and_then(|a| a.display_name.clone())
                .unwrap_or_default(),
            server: account
                .and_then(|a| a.server.clone())
                .unwrap_or_else(|| SERVER_UNKNOWN.to_string()),
            friend_code,
            level: account
                .and_then(|a| a.level)
                .map(|level| level.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            onboard: account
                .and_then(|a| a.onboard.clone())
                .unwrap_or_default(),
            supports,
            discord,
            reddit: social.and_then(|s| s.reddit.clone()).unwrap_or_default(),
        }
    }

    /// Dialog heading. Narrow layouts drop the possessive suffix.
    pub fn title(&self, narrow: bool) -> String {
        if narrow {
            self.display_name.clone()
        } else {
            format!("{}'s Profile", self.display_name)
        }
    }

    /// "<server> - <name>#<tag> - Level <n>"
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} - Level {}",
            self.server, self.friend_code, self.level
        )
    }

    pub fn onboard_line(&self) -> String {
        format!("Onboard: {}", self.onboard)
    }
}

fn support_view(roster: &Roster, operators: &OperatorTable, entry: &SupportEntry) -> SupportView {
    let avatar = roster_avatar_path(roster, &entry.op_id);
    let Some(op) = roster.get(&entry.op_id) else {
        return SupportView {
            op_id: entry.op_id.clone(),
            name: None,
            avatar,
            skill: None,
        };
    };

    let skill = SkillBadge::resolve(&entry.op_id, op, operators, entry.op_skill);
    if skill.icon.is_none() {
        tracing::warn!(
            op_id = %entry.op_id,
            slot = entry.op_skill,
            "No skill at support slot, showing skill level only"
        );
    }

    SupportView {
        op_id: entry.op_id.clone(),
        name: Some(op.name.clone()),
        avatar,
        skill: Some(skill),
    }
}
