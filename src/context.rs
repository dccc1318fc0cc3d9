//! Editing-context identification
//!
//! The insertion command behaves differently depending on where it was
//! invoked: inside a prompt it clears stale input first, inside a shell or
//! REPL buffer it consults that buffer's input ring. `EditorContext` is the
//! snapshot of that state, captured once per invocation.

use serde::Deserialize;
use std::fmt;

/// Kind of buffer or session the user is currently editing in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    /// A transient single-line input session (command or search prompt)
    Prompt,
    /// A shell buffer with its own input ring
    Shell,
    /// A REPL-style interaction buffer
    Repl,
    /// A terminal emulator buffer
    Terminal,
    /// An ordinary editing buffer
    Edit,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextKind::Prompt => "prompt",
            ContextKind::Shell => "shell",
            ContextKind::Repl => "repl",
            ContextKind::Terminal => "terminal",
            ContextKind::Edit => "edit",
        };
        write!(f, "{}", name)
    }
}

/// Context extracted from the host at the start of one command invocation
#[derive(Debug, Clone, Copy)]
pub struct EditorContext {
    /// What kind of buffer/session is active
    pub kind: ContextKind,
    /// Whether the immediately preceding user action was "repeat a complex
    /// command from history"
    pub after_command_repeat: bool,
}

impl EditorContext {
    /// Create a context for the given kind with no pending command repeat
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            after_command_repeat: false,
        }
    }

    /// Context for an active prompt session
    pub fn prompt() -> Self {
        Self::new(ContextKind::Prompt)
    }

    /// Context for an ordinary editing buffer
    pub fn edit() -> Self {
        Self::new(ContextKind::Edit)
    }

    /// Mark that the previous action repeated a complex command (builder)
    pub fn after_command_repeat(mut self) -> Self {
        self.after_command_repeat = true;
        self
    }

    /// Whether the invocation happened inside a prompt-style input session
    pub fn in_prompt(&self) -> bool {
        self.kind == ContextKind::Prompt
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(ContextKind::Edit)
    }
}
