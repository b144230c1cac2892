//! Game state machine
//!
//! Pure transition logic: the game feeds in discrete triggers and applies
//! whatever side effects the resulting transition calls for.

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    StartScreen,
    StartMenu,
    Running,
    InGameMenu,
    RestartMenu,
    Restarting,
    GameOver,
}

/// Entries of the menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Resume,
    Restart,
    Cancel,
    Quit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Resume => "RESUME",
            Self::Restart => "RESTART",
            Self::Cancel => "CANCEL",
            Self::Quit => "QUIT",
        }
    }
}

/// Discrete events that can move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Action pressed, with the highlighted option if a menu is showing
    Action(Option<MenuOption>),
    Pause,
    Restart,
    PlayerDied,
    FadeOutComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Enter(GameState),
    Quit,
}

impl GameState {
    /// Options listed on this state's menu, top to bottom
    pub fn menu_options(self) -> &'static [MenuOption] {
        match self {
            Self::StartMenu => &[MenuOption::Start, MenuOption::Quit],
            Self::InGameMenu => &[MenuOption::Resume, MenuOption::Quit],
            Self::RestartMenu => &[MenuOption::Restart, MenuOption::Cancel],
            _ => &[],
        }
    }

    /// Whether the world simulation advances in this state
    pub fn simulates(self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn next(self, trigger: Trigger) -> Transition {
        use GameState::*;
        use MenuOption as M;
        use Transition::{Enter, Quit, Stay};

        match (self, trigger) {
            (StartScreen, Trigger::Action(_)) => Enter(StartMenu),

            (StartMenu, Trigger::Action(Some(M::Start))) => Enter(Running),
            (StartMenu, Trigger::Action(Some(M::Quit))) => Quit,

            (Running, Trigger::Pause) => Enter(InGameMenu),
            (Running, Trigger::Restart) => Enter(RestartMenu),
            (Running, Trigger::PlayerDied) => Enter(GameOver),

            (InGameMenu, Trigger::Pause | Trigger::Action(Some(M::Resume))) => Enter(Running),
            (InGameMenu, Trigger::Action(Some(M::Quit))) => Quit,

            (RestartMenu, Trigger::Action(Some(M::Restart))) => Enter(Restarting),
            (RestartMenu, Trigger::Pause | Trigger::Action(Some(M::Cancel))) => Enter(Running),

            (Restarting, Trigger::FadeOutComplete) => Enter(Running),

            (GameOver, Trigger::Action(_)) => Enter(Restarting),

            _ => Stay,
        }
    }
}

/// Highlighted entry of a vertical menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn selected(&self, options: &[MenuOption]) -> Option<MenuOption> {
        options.get(self.selected).copied()
    }

    pub fn index(&self) -> usize {
        self.selected
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn up(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Move the highlight down, wrapping to the top
    pub fn down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState::*;
    use super::*;

    fn act(option: MenuOption) -> Trigger {
        Trigger::Action(Some(option))
    }

    #[test]
    fn test_start_flow() {
        assert_eq!(StartScreen.next(Trigger::Action(None)), Transition::Enter(StartMenu));
        assert_eq!(StartMenu.next(act(MenuOption::Start)), Transition::Enter(Running));
        assert_eq!(StartMenu.next(act(MenuOption::Quit)), Transition::Quit);
    }

    #[test]
    fn test_pause_round_trip() {
        assert_eq!(Running.next(Trigger::Pause), Transition::Enter(InGameMenu));
        assert_eq!(InGameMenu.next(Trigger::Pause), Transition::Enter(Running));
        assert_eq!(InGameMenu.next(act(MenuOption::Resume)), Transition::Enter(Running));
        assert_eq!(InGameMenu.next(act(MenuOption::Quit)), Transition::Quit);
    }

    #[test]
    fn test_restart_flow() {
        assert_eq!(Running.next(Trigger::Restart), Transition::Enter(RestartMenu));
        assert_eq!(RestartMenu.next(act(MenuOption::Restart)), Transition::Enter(Restarting));
        assert_eq!(RestartMenu.next(act(MenuOption::Cancel)), Transition::Enter(Running));
        assert_eq!(RestartMenu.next(Trigger::Pause), Transition::Enter(Running));
        assert_eq!(Restarting.next(Trigger::FadeOutComplete), Transition::Enter(Running));
    }

    #[test]
    fn test_game_over_flow() {
        assert_eq!(Running.next(Trigger::PlayerDied), Transition::Enter(GameOver));
        assert_eq!(GameOver.next(Trigger::Action(None)), Transition::Enter(Restarting));
        assert_eq!(GameOver.next(Trigger::Pause), Transition::Stay);
    }

    #[test]
    fn test_unrelated_triggers_stay() {
        assert_eq!(StartScreen.next(Trigger::Pause), Transition::Stay);
        assert_eq!(StartMenu.next(Trigger::Restart), Transition::Stay);
        assert_eq!(Running.next(Trigger::Action(None)), Transition::Stay);
        assert_eq!(Restarting.next(Trigger::Pause), Transition::Stay);
        assert_eq!(Restarting.next(Trigger::Action(None)), Transition::Stay);
        // A menu option from another screen does nothing
        assert_eq!(StartMenu.next(act(MenuOption::Resume)), Transition::Stay);
    }

    #[test]
    fn test_only_running_simulates() {
        for state in [StartScreen, StartMenu, InGameMenu, RestartMenu, Restarting, GameOver] {
            assert!(!state.simulates());
        }
        assert!(Running.simulates());
    }

    #[test]
    fn test_menu_wraps() {
        let options = StartMenu.menu_options();
        let mut menu = Menu::default();
        assert_eq!(menu.selected(options), Some(MenuOption::Start));
        menu.up(options.len());
        assert_eq!(menu.selected(options), Some(MenuOption::Quit));
        menu.down(options.len());
        assert_eq!(menu.selected(options), Some(MenuOption::Start));
        menu.down(options.len());
        menu.down(options.len());
        assert_eq!(menu.index(), 0);

        let mut empty = Menu::default();
        empty.up(0);
        empty.down(0);
        assert_eq!(empty.selected(&[]), None);
    }
}
