//! Command-echo terminal
//!
//! [`run_command`] is a pure lookup over a fixed command table. No process is
//! ever spawned.

use vibe_core::prelude::*;
use vibe_core::{LineKind, TerminalLine};

pub const BANNER: [&str; 2] = [
    "VibeCode IDE Terminal v1.0.0",
    "Type \"help\" for available commands",
];

pub const HELP_TEXT: &str = "Available commands:
  help     - Show this help message
  clear    - Clear terminal
  ls       - List files and directories
  pwd      - Show current directory
  npm run dev - Start development server
  npm install - Install dependencies
  git status - Show git status";

const LS_OUTPUT: &str = "src/  public/  package.json  README.md  tsconfig.json";

const PWD_OUTPUT: &str = "/workspace/vibe-code-ide";

const NPM_RUN_DEV_OUTPUT: &str = "> vite

  VITE v5.0.0  ready in 328ms

  ➜  Local:   http://localhost:5173/
  ➜  Network: use --host to expose";

const NPM_INSTALL_OUTPUT: &str = "npm WARN deprecated package@1.0.0
added 1337 packages in 2.5s";

const GIT_STATUS_OUTPUT: &str = "On branch main
Your branch is up to date with 'origin/main'.

Changes not staged for commit:
  modified:   src/App.tsx
  modified:   src/components/Header.tsx

no changes added to commit";

/// Result of interpreting one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Output(String),
    Error(String),
    /// Wipe the line log
    Clear,
}

/// Look up a command, case-insensitively, after trimming
pub fn run_command(input: &str) -> CommandOutcome {
    let command = input.trim();
    let text = match command.to_lowercase().as_str() {
        "help" => HELP_TEXT,
        "clear" => return CommandOutcome::Clear,
        "ls" => LS_OUTPUT,
        "pwd" => PWD_OUTPUT,
        "npm run dev" => NPM_RUN_DEV_OUTPUT,
        "npm install" => NPM_INSTALL_OUTPUT,
        "git status" => GIT_STATUS_OUTPUT,
        _ => {
            return CommandOutcome::Error(format!(
                "Command '{command}' not found. Type 'help' for available commands."
            ))
        }
    };
    CommandOutcome::Output(text.to_string())
}

#[derive(Debug, Clone)]
pub struct TerminalState {
    pub lines: Vec<TerminalLine>,
    pub history: Vec<String>,
    /// `None` is the fresh prompt; `Some(i)` is browsing `history[i]`
    pub history_index: Option<usize>,
    pub input: String,
    /// Oldest lines are dropped past this many
    pub max_lines: usize,
    next_id: u64,
}

impl TerminalState {
    pub fn new(max_lines: usize) -> Self {
        let mut terminal = Self {
            lines: Vec::new(),
            history: Vec::new(),
            history_index: None,
            input: String::new(),
            max_lines: max_lines.max(1),
            next_id: 1,
        };
        for text in BANNER {
            terminal.push_line(LineKind::Output, text);
        }
        terminal
    }

    /// Run the current input line
    pub fn submit(&mut self) {
        let command = self.input.trim().to_string();
        if command.is_empty() {
            return;
        }
        self.history.push(command.clone());
        self.history_index = None;
        self.input.clear();

        let outcome = run_command(&command);
        debug!("Terminal command {:?} -> {:?}", command, outcome_kind(&outcome));
        match outcome {
            CommandOutcome::Clear => self.lines.clear(),
            CommandOutcome::Output(text) => {
                self.push_line(LineKind::Command, format!("$ {command}"));
                self.push_line(LineKind::Output, text);
            }
            CommandOutcome::Error(text) => {
                self.push_line(LineKind::Command, format!("$ {command}"));
                self.push_line(LineKind::Error, text);
            }
        }
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
    }

    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 >= self.history.len() {
            self.history_index = None;
            self.input.clear();
        } else {
            self.history_index = Some(i + 1);
            self.input = self.history[i + 1].clone();
        }
    }

    /// Toolbar clear: lines only
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    fn push_line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TerminalLine::new(self.next_id, kind, text));
        self.next_id += 1;
        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new(1000)
    }
}

fn outcome_kind(outcome: &CommandOutcome) -> &'static str {
    match outcome {
        CommandOutcome::Output(_) => "output",
        CommandOutcome::Error(_) => "error",
        CommandOutcome::Clear => "clear",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(terminal: &mut TerminalState, text: &str) {
        terminal.input = text.to_string();
        terminal.submit();
    }

    #[test]
    fn test_starts_with_banner() {
        let terminal = TerminalState::default();
        let texts: Vec<&str> = terminal.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, BANNER.to_vec());
    }

    #[test]
    fn test_help_is_output() {
        let mut terminal = TerminalState::default();
        submit(&mut terminal, "help");
        let n = terminal.lines.len();
        assert_eq!(terminal.lines[n - 2].kind, LineKind::Command);
        assert_eq!(terminal.lines[n - 2].text, "$ help");
        assert_eq!(terminal.lines[n - 1].kind, LineKind::Output);
        assert_eq!(terminal.lines[n - 1].text, HELP_TEXT);
    }

    #[test]
    fn test_unknown_is_error() {
        let mut terminal = TerminalState::default();
        submit(&mut terminal, "frobnicate");
        let last = terminal.lines.last().unwrap();
        assert_eq!(last.kind, LineKind::Error);
        assert_eq!(
            last.text,
            "Command 'frobnicate' not found. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut terminal = TerminalState::default();
        submit(&mut terminal, "ls");
        submit(&mut terminal, "clear");
        assert!(terminal.lines.is_empty());
        assert_eq!(terminal.history, vec!["ls", "clear"]);
        assert!(terminal.input.is_empty());
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        assert_eq!(run_command("  PWD "), CommandOutcome::Output(PWD_OUTPUT.into()));
        assert_eq!(
            run_command("Npm Run Dev"),
            CommandOutcome::Output(NPM_RUN_DEV_OUTPUT.into())
        );
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut terminal = TerminalState::default();
        submit(&mut terminal, "   ");
        assert_eq!(terminal.lines.len(), 2);
        assert!(terminal.history.is_empty());
    }

    #[test]
    fn test_history_navigation() {
        let mut terminal = TerminalState::default();
        submit(&mut terminal, "ls");
        submit(&mut terminal, "pwd");

        terminal.history_up();
        assert_eq!(terminal.input, "pwd");
        terminal.history_up();
        assert_eq!(terminal.input, "ls");
        terminal.history_up();
        assert_eq!(terminal.input, "ls");

        terminal.history_down();
        assert_eq!(terminal.input, "pwd");
        terminal.history_down();
        assert_eq!(terminal.input, "");
        assert_eq!(terminal.history_index, None);
    }

    #[test]
    fn test_max_lines_drops_oldest() {
        let mut terminal = TerminalState::new(3);
        submit(&mut terminal, "ls");
        assert_eq!(terminal.lines.len(), 3);
        assert_eq!(terminal.lines[0].text, BANNER[1]);
    }
}
