//! "Terminal boot" intro.
//!
//! The intro plays once per storage origin: a fresh profile sees it, the
//! flag is written, and every later launch skips straight to the page.
//! Within a session the phase only ever moves forward:
//!
//! ```text
//! Unshown ──▶ Shown ──▶ Dismissed
//!    └──────────────────────▲
//! ```

use std::time::Duration;

use crate::storage::VisitFlag;

/// Delay after each typed character.
pub const CHAR_DELAY: Duration = Duration::from_millis(8);
/// Pause after a line is committed.
pub const LINE_PAUSE: Duration = Duration::from_millis(30);
/// Hold after the last line before fading out.
pub const COMPLETE_DELAY: Duration = Duration::from_millis(300);
/// Fade-out before the intro is dismissed.
pub const FADE_DELAY: Duration = Duration::from_millis(100);
/// Cursor blink half-period.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum IntroPhase {
    #[default]
    Unshown,
    Shown,
    Dismissed,
}

impl IntroPhase {
    /// Move to `next` unless that would go backwards.
    pub fn advance(self, next: IntroPhase) -> IntroPhase {
        if next > self {
            next
        } else {
            self
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, IntroPhase::Shown)
    }
}

/// Mount-time decision of whether to play the intro.
pub struct IntroGate;

impl IntroGate {
    /// Read the visit flag once; a first visit shows the intro and writes the flag.
    pub fn decide(flag: &VisitFlag) -> IntroPhase {
        if flag.load() {
            tracing::debug!("Returning visitor, skipping intro");
            IntroPhase::Unshown.advance(IntroPhase::Dismissed)
        } else {
            tracing::info!("First visit, playing intro");
            flag.store();
            IntroPhase::Unshown.advance(IntroPhase::Shown)
        }
    }
}

/// Result of one typing step, with the delay before the next one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScriptStep {
    Typed(Duration),
    LineDone(Duration),
    Finished,
}

/// Character-by-character typing of the boot lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalScript {
    lines: Vec<String>,
    line: usize,
    chars: usize,
}

impl TerminalScript {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            line: 0,
            chars: 0,
        }
    }

    pub fn for_user(name: &str) -> Self {
        Self::new(vec![
            "$ initialize".to_string(),
            format!("> Loading {}'s portfolio...", name),
            "> Ready!".to_string(),
        ])
    }

    pub fn advance(&mut self) -> ScriptStep {
        let Some(current) = self.lines.get(self.line) else {
            return ScriptStep::Finished;
        };
        if self.chars < current.chars().count() {
            self.chars += 1;
            ScriptStep::Typed(CHAR_DELAY)
        } else {
            self.line += 1;
            self.chars = 0;
            ScriptStep::LineDone(LINE_PAUSE)
        }
    }

    pub fn completed_lines(&self) -> &[String] {
        &self.lines[..self.line.min(self.lines.len())]
    }

    /// The line being typed, cut at the cursor.
    pub fn current_partial(&self) -> Option<String> {
        self.lines
            .get(self.line)
            .map(|l| l.chars().take(self.chars).collect())
    }

    pub fn is_finished(&self) -> bool {
        self.line >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_never_moves_backwards() {
        let shown = IntroPhase::Unshown.advance(IntroPhase::Shown);
        assert_eq!(shown, IntroPhase::Shown);
        let dismissed = shown.advance(IntroPhase::Dismissed);
        assert_eq!(dismissed, IntroPhase::Dismissed);
        assert_eq!(dismissed.advance(IntroPhase::Shown), IntroPhase::Dismissed);
        assert_eq!(dismissed.advance(IntroPhase::Unshown), IntroPhase::Dismissed);
    }

    #[test]
    fn only_shown_is_visible() {
        assert!(!IntroPhase::Unshown.is_visible());
        assert!(IntroPhase::Shown.is_visible());
        assert!(!IntroPhase::Dismissed.is_visible());
    }

    #[test]
    fn script_types_each_character_then_commits() {
        let mut script = TerminalScript::new(vec!["ab".to_string(), "c".to_string()]);
        assert_eq!(script.current_partial().as_deref(), Some(""));
        assert_eq!(script.advance(), ScriptStep::Typed(CHAR_DELAY));
        assert_eq!(script.current_partial().as_deref(), Some("a"));
        assert_eq!(script.advance(), ScriptStep::Typed(CHAR_DELAY));
        assert_eq!(script.advance(), ScriptStep::LineDone(LINE_PAUSE));
        assert_eq!(script.completed_lines(), &["ab".to_string()]);
        assert_eq!(script.advance(), ScriptStep::Typed(CHAR_DELAY));
        assert_eq!(script.advance(), ScriptStep::LineDone(LINE_PAUSE));
        assert!(script.is_finished());
        assert_eq!(script.current_partial(), None);
        assert_eq!(script.advance(), ScriptStep::Finished);
    }

    #[test]
    fn boot_lines_mention_user() {
        let mut script = TerminalScript::for_user("Maaz Ali Rao");
        let mut steps = 0;
        while script.advance() != ScriptStep::Finished {
            steps += 1;
            assert!(steps < 1_000);
        }
        assert_eq!(script.completed_lines().len(), 3);
        assert_eq!(script.completed_lines()[1], "> Loading Maaz Ali Rao's portfolio...");
    }

    #[test]
    fn multibyte_lines_type_by_character() {
        let mut script = TerminalScript::new(vec!["→ok".to_string()]);
        script.advance();
        assert_eq!(script.current_partial().as_deref(), Some("→"));
    }

    #[test]
    fn gate_without_storage_shows_intro() {
        let flag = VisitFlag::new(None);
        assert_eq!(IntroGate::decide(&flag), IntroPhase::Shown);
    }
}
