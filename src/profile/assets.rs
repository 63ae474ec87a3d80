/// Prefix applied to relative asset paths before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRoot {
    prefix: String,
}

impl AssetRoot {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, relative: &str) -> String {
        if self.prefix.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.prefix, relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_once() {
        assert_eq!(AssetRoot::new("/img/").resolve("rank/bg.png"), "/img/rank/bg.png");
        assert_eq!(AssetRoot::new("img").resolve("avatars/a.png"), "img/avatars/a.png");
    }

    #[test]
    fn empty_prefix_keeps_relative_path() {
        assert_eq!(AssetRoot::new("").resolve("skills/s.png"), "skills/s.png");
    }
}
