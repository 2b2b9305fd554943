/// Which of the four full-screen modes is shown
///
/// Transitions are total functions: an event that does not apply to the
/// current screen leaves it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Login form, the initial screen
    #[default]
    LoggedOut,
    /// Full-screen progress display while the post-login fetch runs
    Progress,
    /// Gallery with an inline spinner while a refresh runs
    LoadingList,
    /// Gallery at rest
    Gallery,
}

impl Screen {
    /// Login validation passed
    pub fn login_succeeded(self) -> Self {
        match self {
            Screen::LoggedOut => Screen::Progress,
            other => other,
        }
    }

    /// The user asked for a refresh
    pub fn refresh_started(self) -> Self {
        match self {
            Screen::Gallery => Screen::LoadingList,
            other => other,
        }
    }

    /// The newest fetch resolved, successfully or not
    pub fn fetch_finished(self) -> Self {
        match self {
            Screen::Progress | Screen::LoadingList => Screen::Gallery,
            other => other,
        }
    }

    /// True while some "fetch in progress" indicator is visible
    pub fn is_fetching(self) -> bool {
        matches!(self, Screen::Progress | Screen::LoadingList)
    }

    /// True on the two screens that show the gallery chrome
    pub fn shows_gallery(self) -> bool {
        matches!(self, Screen::LoadingList | Screen::Gallery)
    }
}
