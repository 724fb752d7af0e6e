use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Welcome,
    Settings,
    Avatar,
    Main,
    Math,
    Achievements,
}

impl Screen {
    pub const ALL: [Self; 6] = [
        Self::Welcome,
        Self::Settings,
        Self::Avatar,
        Self::Main,
        Self::Math,
        Self::Achievements,
    ];

    /// Id of the section element that is shown for this screen.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Welcome => "welcome-screen",
            Self::Settings => "settings-screen",
            Self::Avatar => "avatar-screen",
            Self::Main => "main-screen",
            Self::Math => "math-screen",
            Self::Achievements => "achievements-screen",
        }
    }
}

/// Tracks which screen is active; exactly one is at a time.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Screen,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `screen`; returns false if it was already active.
    pub fn show(&mut self, screen: Screen) -> bool {
        if self.current == screen {
            return false;
        }
        log::debug!("screen {:?} -> {screen:?}", self.current);
        self.current = screen;
        true
    }
}
