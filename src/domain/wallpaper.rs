use serde::{Deserialize, Serialize};

/// Which screen(s) a wallpaper is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallpaperTarget {
    Home,
    Lock,
    Both,
}

impl WallpaperTarget {
    pub fn includes_home(&self) -> bool {
        matches!(self, Self::Home | Self::Both)
    }

    pub fn includes_lock(&self) -> bool {
        matches!(self, Self::Lock | Self::Both)
    }

    /// Message reported by the bridge once the wallpaper is applied
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Home => "Wallpaper set successfully",
            Self::Lock => "Lock screen wallpaper set successfully",
            Self::Both => "Both wallpapers set successfully",
        }
    }
}

impl std::fmt::Display for WallpaperTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Lock => write!(f, "lock"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for WallpaperTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "lock" => Ok(Self::Lock),
            "both" => Ok(Self::Both),
            other => Err(format!("Unknown wallpaper target: {}", other)),
        }
    }
}
