//! Mission selection wizard: phases, commands, and the cursor model.

use crate::catalog::{GameId, GameInfo, SystemInfo};
use crate::launch::LaunchCommand;

/// Steps of the selection wizard. `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Browsing the game list.
    Game,
    /// Browsing the chosen game's systems.
    System,
    /// Browsing the chosen system's missions.
    Mission,
    /// Reviewing the generated command before writing it.
    Confirm,
    /// Done; the event loop should exit.
    Quit,
}

/// A keystroke translated into its menu meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor up one entry (wraps).
    MoveUp,
    /// Move the cursor down one entry (wraps).
    MoveDown,
    /// Left arrow: return to the previous menu.
    MoveBack,
    /// Right arrow or Enter: commit the highlighted entry.
    Confirm,
    /// Escape: quit without writing anything.
    Cancel,
    /// Direct 1-based pick via a hex shortcut digit.
    Quick(u8),
    /// The letter Q: return to the previous menu.
    Previous,
    /// Anything else; ignored.
    Unknown,
}

impl Command {
    /// Decode a character shortcut.
    ///
    /// `0-9` and `A-C` (case-insensitive) are hex digits selecting entries
    /// 1-12 directly; `Q` backs out one menu. Everything else is unknown.
    pub fn from_shortcut(ch: char) -> Command {
        match ch {
            '0'..='9' => Command::Quick(ch as u8 - b'0'),
            'a' | 'A' => Command::Quick(10),
            'b' | 'B' => Command::Quick(11),
            'c' | 'C' => Command::Quick(12),
            'q' | 'Q' => Command::Previous,
            _ => Command::Unknown,
        }
    }
}

/// Side effect requested by [`Selector::apply`].
///
/// The selector itself never touches the filesystem; confirming the final
/// phase hands the pending command back to the caller for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    /// Nothing to do beyond redrawing.
    None,
    /// Write this command to the batch file, then call
    /// [`Selector::record_written`] on success.
    WriteCommand(LaunchCommand),
}

/// The wizard's complete mutable state.
///
/// Owned by the frontend and mutated only through [`Selector::apply`].
#[derive(Debug)]
pub struct Selector {
    phase: Phase,
    cursor: usize,
    game: Option<usize>,
    system: Option<usize>,
    mission: Option<usize>,
    pending: Option<LaunchCommand>,
    farewell: Option<String>,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Fresh wizard: game phase, cursor at the top, nothing selected.
    pub fn new() -> Self {
        Self {
            phase: Phase::Game,
            cursor: 0,
            game: None,
            system: None,
            mission: None,
            pending: None,
            farewell: None,
        }
    }

    /// Current wizard phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Highlighted index within the current phase's list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The committed game, if any.
    pub fn game(&self) -> Option<&'static GameInfo> {
        self.game.map(|idx| GameId::ALL[idx].info())
    }

    /// The committed system of the committed game, if any.
    pub fn system(&self) -> Option<&'static SystemInfo> {
        let game = self.game()?;
        game.systems.get(self.system?)
    }

    /// Zero-based index of the committed mission, if any.
    pub fn mission(&self) -> Option<usize> {
        self.mission
    }

    /// The derived launch command, present while in the confirm phase.
    pub fn pending(&self) -> Option<&LaunchCommand> {
        self.pending.as_ref()
    }

    /// Message recorded after a successful batch write.
    pub fn farewell(&self) -> Option<&str> {
        self.farewell.as_deref()
    }

    /// True once the wizard has reached its terminal phase.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Quit
    }

    /// Number of entries in the list the cursor currently ranges over.
    ///
    /// The confirm phase keeps showing the chosen system's mission list,
    /// so its length is reported there as well.
    pub fn options_len(&self) -> usize {
        match self.phase {
            Phase::Game => GameId::ALL.len(),
            Phase::System => self.game().map(|game| game.systems.len()).unwrap_or(0),
            Phase::Mission | Phase::Confirm => {
                self.system().map(|system| system.missions.len()).unwrap_or(0)
            }
            Phase::Quit => 0,
        }
    }

    /// Advance the wizard by one translated keystroke.
    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::Unknown => Effect::None,
            Command::Cancel => {
                self.phase = Phase::Quit;
                Effect::None
            }
            Command::MoveUp => {
                self.step_cursor(-1);
                Effect::None
            }
            Command::MoveDown => {
                self.step_cursor(1);
                Effect::None
            }
            Command::MoveBack | Command::Previous => {
                self.retreat();
                Effect::None
            }
            Command::Confirm => match self.phase {
                Phase::Game | Phase::System | Phase::Mission => {
                    self.commit(self.cursor);
                    Effect::None
                }
                Phase::Confirm => match self.pending {
                    Some(command) => Effect::WriteCommand(command),
                    None => Effect::None,
                },
                Phase::Quit => Effect::None,
            },
            Command::Quick(n) => {
                self.quick(usize::from(n));
                Effect::None
            }
        }
    }

    /// Record a successful batch write and finish the wizard.
    pub fn record_written(&mut self, message: String) {
        self.farewell = Some(message);
        self.phase = Phase::Quit;
    }

    fn step_cursor(&mut self, delta: isize) {
        if !matches!(self.phase, Phase::Game | Phase::System | Phase::Mission) {
            return;
        }
        let len = self.options_len();
        if len == 0 {
            return;
        }
        self.cursor = if delta < 0 {
            if self.cursor == 0 { len - 1 } else { self.cursor - 1 }
        } else if self.cursor + 1 >= len {
            0
        } else {
            self.cursor + 1
        };
    }

    fn commit(&mut self, index: usize) {
        match self.phase {
            Phase::Game => {
                self.game = Some(index);
                self.phase = Phase::System;
                self.cursor = 0;
            }
            Phase::System => {
                self.system = Some(index);
                self.phase = Phase::Mission;
                self.cursor = 0;
            }
            Phase::Mission => {
                self.mission = Some(index);
                self.cursor = index;
                self.pending = self.derive_command();
                self.phase = Phase::Confirm;
            }
            Phase::Confirm | Phase::Quit => {}
        }
    }

    fn retreat(&mut self) {
        match self.phase {
            Phase::Game => {
                // Nothing shallower; just reset the highlight.
                self.cursor = 0;
            }
            Phase::System => {
                self.phase = Phase::Game;
                self.cursor = self.game.unwrap_or(0);
            }
            Phase::Mission => {
                self.phase = Phase::System;
                self.cursor = self.system.unwrap_or(0);
            }
            Phase::Confirm => {
                self.pending = None;
                self.phase = Phase::Mission;
                self.cursor = self.mission.unwrap_or(0);
            }
            Phase::Quit => {}
        }
    }

    fn quick(&mut self, n: usize) {
        match self.phase {
            Phase::Game | Phase::System | Phase::Mission => {
                let len = self.options_len();
                if (1..=len).contains(&n) {
                    // Shortcuts are 1-based on screen.
                    self.commit(n - 1);
                } else {
                    self.retreat();
                }
            }
            Phase::Confirm => {
                // The mission is already committed; in-range digits are
                // ignored and only an out-of-range one backs out.
                let len = self.options_len();
                if !(1..=len).contains(&n) {
                    self.retreat();
                }
            }
            Phase::Quit => {}
        }
    }

    fn derive_command(&self) -> Option<LaunchCommand> {
        let game = GameId::ALL.get(self.game?)?;
        Some(LaunchCommand::new(*game, self.system?, self.mission?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::BatchWriter;

    fn at_confirm(game: usize, system: usize, mission: usize) -> Selector {
        let mut selector = Selector::new();
        let _ = selector.apply(Command::Quick(game as u8 + 1));
        let _ = selector.apply(Command::Quick(system as u8 + 1));
        let _ = selector.apply(Command::Quick(mission as u8 + 1));
        assert_eq!(selector.phase(), Phase::Confirm);
        selector
    }

    #[test]
    fn digit_one_selects_first_game() {
        let mut selector = Selector::new();
        let _ = selector.apply(Command::from_shortcut('1'));
        assert_eq!(selector.phase(), Phase::System);
        assert_eq!(selector.game().map(|game| game.id), Some(GameId::WingCommander2));
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn cursor_wraps_at_both_ends() {
        let mut selector = Selector::new();
        let _ = selector.apply(Command::Confirm); // WC2: 12 systems

        let _ = selector.apply(Command::MoveUp);
        assert_eq!(selector.cursor(), 11);
        let _ = selector.apply(Command::MoveDown);
        assert_eq!(selector.cursor(), 0);

        // Same invariant on the game list.
        let mut selector = Selector::new();
        let _ = selector.apply(Command::MoveUp);
        assert_eq!(selector.cursor(), 2);
        let _ = selector.apply(Command::MoveDown);
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn quick_select_commits_and_advances_once() {
        for n in 1..=3u8 {
            let mut selector = Selector::new();
            let _ = selector.apply(Command::Quick(n));
            assert_eq!(selector.phase(), Phase::System);
            assert_eq!(
                selector.game().map(|game| game.id),
                Some(GameId::ALL[usize::from(n) - 1])
            );
        }
    }

    #[test]
    fn out_of_range_quick_backs_out() {
        // Zero is never a valid 1-based pick.
        let mut selector = Selector::new();
        let _ = selector.apply(Command::Quick(2));
        let _ = selector.apply(Command::Quick(0));
        assert_eq!(selector.phase(), Phase::Game);
        assert_eq!(selector.cursor(), 1);

        // SO1 has four systems, so '9' is out of range there.
        let mut selector = Selector::new();
        let _ = selector.apply(Command::Quick(2));
        let _ = selector.apply(Command::Quick(9));
        assert_eq!(selector.phase(), Phase::Game);
    }

    #[test]
    fn confirm_then_back_restores_selection() {
        // Game boundary.
        let mut selector = Selector::new();
        let _ = selector.apply(Command::MoveDown);
        let _ = selector.apply(Command::Confirm);
        let _ = selector.apply(Command::MoveBack);
        assert_eq!(selector.phase(), Phase::Game);
        assert_eq!(selector.cursor(), 1);

        // System boundary.
        let _ = selector.apply(Command::Confirm);
        let _ = selector.apply(Command::MoveDown);
        let _ = selector.apply(Command::MoveDown);
        let _ = selector.apply(Command::Confirm);
        let _ = selector.apply(Command::Previous);
        assert_eq!(selector.phase(), Phase::System);
        assert_eq!(selector.cursor(), 2);

        // Mission boundary.
        let _ = selector.apply(Command::Confirm);
        let _ = selector.apply(Command::MoveDown);
        let _ = selector.apply(Command::Confirm);
        assert_eq!(selector.phase(), Phase::Confirm);
        let _ = selector.apply(Command::Previous);
        assert_eq!(selector.phase(), Phase::Mission);
        assert_eq!(selector.cursor(), 1);
    }

    #[test]
    fn back_in_game_phase_is_idempotent() {
        let mut selector = Selector::new();
        let _ = selector.apply(Command::MoveDown);
        let _ = selector.apply(Command::Previous);
        assert_eq!(selector.phase(), Phase::Game);
        assert_eq!(selector.cursor(), 0);
        let _ = selector.apply(Command::Previous);
        assert_eq!(selector.phase(), Phase::Game);
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn unknown_input_changes_nothing() {
        let mut selector = Selector::new();
        let _ = selector.apply(Command::MoveDown);
        for _ in 0..5 {
            assert_eq!(selector.apply(Command::Unknown), Effect::None);
        }
        assert_eq!(selector.phase(), Phase::Game);
        assert_eq!(selector.cursor(), 1);
        assert!(selector.game().is_none());

        assert_eq!(Command::from_shortcut('z'), Command::Unknown);
        assert_eq!(Command::from_shortcut(' '), Command::Unknown);
    }

    #[test]
    fn enigma_mission_a_derives_expected_command() {
        // WC2, system 7 on screen (Enigma), mission A.
        let selector = at_confirm(0, 6, 0);
        let pending = selector.pending().expect("command derived on confirm entry");
        assert_eq!(pending.line(), "loadfix -32 play-wc2 7 A");
    }

    #[test]
    fn confirm_phase_emits_write_then_finishes() {
        let mut selector = at_confirm(0, 6, 0);
        let effect = selector.apply(Command::Confirm);
        let Effect::WriteCommand(command) = effect else {
            panic!("confirm should request a write");
        };

        let dir = tempfile::tempdir().expect("tempdir");
        let writer = BatchWriter::new(dir.path());
        let written = writer.write(&command).expect("write succeeds");
        selector.record_written(written.message());

        assert_eq!(selector.phase(), Phase::Quit);
        let farewell = selector.farewell().expect("message recorded");
        assert!(farewell.contains("GO.BAT"));
    }

    #[test]
    fn failed_write_leaves_confirm_phase_retryable() {
        let mut selector = at_confirm(1, 0, 0);
        let Effect::WriteCommand(command) = selector.apply(Command::Confirm) else {
            panic!("confirm should request a write");
        };

        let writer = BatchWriter::new("/definitely/not/a/real/dir");
        assert!(writer.write(&command).is_err());

        // No record_written call: still confirming, same pending command.
        assert_eq!(selector.phase(), Phase::Confirm);
        assert_eq!(selector.pending(), Some(&command));
        assert!(matches!(selector.apply(Command::Confirm), Effect::WriteCommand(_)));
    }

    #[test]
    fn escape_quits_from_every_phase() {
        let confirm = at_confirm(0, 0, 0);
        let mut stages = vec![Selector::new(), confirm];

        let mut system = Selector::new();
        let _ = system.apply(Command::Confirm);
        stages.push(system);

        let mut mission = Selector::new();
        let _ = mission.apply(Command::Confirm);
        let _ = mission.apply(Command::Confirm);
        stages.push(mission);

        for mut selector in stages {
            let _ = selector.apply(Command::Cancel);
            assert!(selector.is_done());
            assert!(selector.farewell().is_none());
        }
    }

    #[test]
    fn quick_in_confirm_phase_only_backs_out_when_invalid() {
        let mut selector = at_confirm(0, 6, 0); // Enigma: 3 missions
        let _ = selector.apply(Command::Quick(2));
        assert_eq!(selector.phase(), Phase::Confirm);

        let _ = selector.apply(Command::Quick(9));
        assert_eq!(selector.phase(), Phase::Mission);
        assert_eq!(selector.cursor(), 0);
        assert!(selector.pending().is_none());
    }

    #[test]
    fn shortcut_decoding_is_case_insensitive() {
        assert_eq!(Command::from_shortcut('0'), Command::Quick(0));
        assert_eq!(Command::from_shortcut('9'), Command::Quick(9));
        assert_eq!(Command::from_shortcut('a'), Command::Quick(10));
        assert_eq!(Command::from_shortcut('C'), Command::Quick(12));
        assert_eq!(Command::from_shortcut('q'), Command::Previous);
        assert_eq!(Command::from_shortcut('Q'), Command::Previous);
    }
}
