//! Read-only inputs for the profile dialog and loading them from disk.

pub mod loader;
pub mod types;

pub use loader::{load_json, DataError, DataPaths, ProfileData};
pub use types::{
    AccountInfo, DiscordHandle, FriendCode, Operator, OperatorInfo, OperatorTable, Roster,
    SkillInfo, SocialInfo, SupportEntry,
};
