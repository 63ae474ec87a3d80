//! Shared fixtures for integration tests.

#![allow(dead_code)]

use profile_lookup::config::DisplayConfig;
use profile_lookup::data::{
    AccountInfo, DiscordHandle, FriendCode, Operator, OperatorInfo, OperatorTable, ProfileData,
    Roster, SkillInfo, SocialInfo, SupportEntry,
};
use profile_lookup::ui::app::App;
use std::collections::HashMap;

pub fn operator(id: &str, name: &str, promotion: u8, mastery: &[Option<u8>]) -> Operator {
    Operator {
        id: id.to_string(),
        name: name.to_string(),
        promotion,
        mastery: mastery.to_vec(),
        skill_level: 7,
    }
}

pub fn roster() -> Roster {
    let mut roster = Roster::new();
    for op in [
        operator("char_002_amiya", "Amiya", 1, &[Some(0), Some(0), Some(0)]),
        operator("char_017_huang", "Blaze", 2, &[Some(1), Some(3)]),
        operator("char_285_medic2", "Lancet-2", 0, &[]),
    ] {
        roster.insert(op.id.clone(), op);
    }
    roster
}

pub fn operators() -> OperatorTable {
    let mut entries = HashMap::new();
    entries.insert(
        "char_017_huang".to_string(),
        OperatorInfo {
            skills: vec![
                SkillInfo {
                    icon_id: None,
                    skill_id: Some("skchr_huang_1".into()),
                },
                SkillInfo {
                    icon_id: Some("skchr_huang_3".into()),
                    skill_id: Some("skchr_huang_2".into()),
                },
            ],
        },
    );
    entries.insert(
        "char_002_amiya".to_string(),
        OperatorInfo {
            skills: vec![SkillInfo {
                icon_id: None,
                skill_id: Some("skchr_amiya_1".into()),
            }],
        },
    );
    OperatorTable::new(entries)
}

pub fn account() -> AccountInfo {
    AccountInfo {
        assistant: Some("char_002_amiya".into()),
        display_name: Some("Kaltsit".into()),
        server: Some("EN".into()),
        friend_code: Some(FriendCode {
            username: Some("Kaltsit".into()),
            tag: Some("0042".into()),
        }),
        level: Some(120),
        onboard: Some("2020-01-16".into()),
        support: vec![
            SupportEntry {
                op_id: "char_017_huang".into(),
                op_skill: 1,
            },
            SupportEntry {
                op_id: "char_002_amiya".into(),
                op_skill: 0,
            },
        ],
    }
}

pub fn social() -> SocialInfo {
    SocialInfo {
        discord: Some(DiscordHandle {
            username: Some("kaltsit".into()),
            tag: Some("1111".into()),
        }),
        reddit: Some("u/kaltsit".into()),
    }
}

pub fn full_data() -> ProfileData {
    ProfileData {
        roster: roster(),
        account: Some(account()),
        social: Some(social()),
        operators: operators(),
    }
}

pub fn app_with(data: ProfileData, cols: u16, rows: u16) -> App {
    let mut app = App::new(data, DisplayConfig::default());
    app.on_resize(cols, rows);
    app
}
