// src/model/icon.rs
use std::fmt;

/// The icons a prompt or category can display.
///
/// Records store the icon as free text; [`IconName::resolve`] maps that text
/// onto this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Bot,
    Code,
    Terminal,
    GitBranch,
    Star,
    Grid3X3,
    Settings,
    HelpCircle,
    Plus,
    Home,
    Folder,
}

const ICON_TABLE: [(&str, IconName); 11] = [
    ("Bot", IconName::Bot),
    ("Code", IconName::Code),
    ("Terminal", IconName::Terminal),
    ("GitBranch", IconName::GitBranch),
    ("Star", IconName::Star),
    ("Grid3X3", IconName::Grid3X3),
    ("Settings", IconName::Settings),
    ("HelpCircle", IconName::HelpCircle),
    ("Plus", IconName::Plus),
    ("Home", IconName::Home),
    ("Folder", IconName::Folder),
];

impl IconName {
    /// Looks up a stored icon name; unknown names fall back to `Home`.
    pub fn resolve(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Self::Home)
    }

    /// Exact lookup without the fallback.
    pub fn lookup(name: &str) -> Option<Self> {
        ICON_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, icon)| *icon)
    }

    pub fn as_str(self) -> &'static str {
        ICON_TABLE
            .iter()
            .find(|(_, icon)| *icon == self)
            .map(|(key, _)| *key)
            .unwrap_or("Home")
    }

    pub fn all() -> impl Iterator<Item = IconName> {
        ICON_TABLE.iter().map(|(_, icon)| *icon)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_round_trips() {
        for icon in IconName::all() {
            assert_eq!(IconName::resolve(icon.as_str()), icon);
        }
        assert_eq!(IconName::all().count(), 11);
    }

    #[test]
    fn test_unknown_names_fall_back_to_home() {
        assert_eq!(IconName::resolve("Rocket"), IconName::Home);
        assert_eq!(IconName::resolve(""), IconName::Home);
        assert_eq!(IconName::resolve("bot"), IconName::Home);
        assert_eq!(IconName::lookup("bot"), None);
    }
}
