//! Profile derivation rules: avatar and skill badge selection plus the
//! display projection consumed by the dialog.

pub mod assets;
pub mod avatar;
pub mod skill;
pub mod view;

pub use assets::AssetRoot;
pub use avatar::{avatar_id, avatar_path, roster_avatar_path, MAIN_CHARACTER_NAME};
pub use skill::{Rank, SkillBadge, RANK_BACKGROUND};
pub use view::{ProfileView, SupportView, SERVER_UNKNOWN, TAG_UNKNOWN, UNKNOWN};
