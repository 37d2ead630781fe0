//! Message types for the application (TEA pattern)

use vibe_core::{BottomTab, MessageId, TabId, View};

use crate::assistant::AssistantReply;
use crate::input_key::InputKey;

/// Edit applied to a single-line text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Char(char),
    Backspace,
}

/// Keystroke applied to the active editor buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOp {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for timers (toasts)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────
    AuthInput(InputEdit),
    AuthFocusNext,
    AuthFocusPrev,
    AuthToggleShowPassword,
    /// Switch between the sign-in and sign-up tabs
    AuthSwitchTab,
    /// Validate and submit the visible auth form tab
    AuthSubmit,
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        password: String,
        name: String,
    },
    Logout,
    UpdateApiKey(String),

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    ShowView(View),
    ToggleSidebar,
    ToggleTheme,
    ToggleAutoSave,
    DismissNotifications,

    // ─────────────────────────────────────────────────────────
    // Projects view
    // ─────────────────────────────────────────────────────────
    ProjectsUp,
    ProjectsDown,
    /// Open a recent project (index into the list) in the workspace
    OpenProject(usize),

    // ─────────────────────────────────────────────────────────
    // Settings view
    // ─────────────────────────────────────────────────────────
    SettingsNextTab,
    SettingsPrevTab,
    SettingsSelectNext,
    SettingsSelectPrev,
    /// Toggle the selected row on the General tab
    SettingsToggleSelected,
    ApiKeyEditStart,
    ApiKeyInput(InputEdit),
    ApiKeyEditCancel,
    /// Save the typed API key
    ApiKeySubmit,

    // ─────────────────────────────────────────────────────────
    // Panel shell
    // ─────────────────────────────────────────────────────────
    ToggleBottomPanel,
    ShowBottomTab(BottomTab),
    CycleFocus,
    CycleFocusBack,
    /// Change explorer width by this many percent
    ResizeExplorer(i16),
    /// Change editor height by this many percent
    ResizeEditor(i16),

    // ─────────────────────────────────────────────────────────
    // Explorer
    // ─────────────────────────────────────────────────────────
    ToggleFolder(String),
    ActivateNode(String),
    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,
    ExplorerCollapse,
    SearchStart,
    SearchInput(InputEdit),
    /// Leave the search box; `clear` also empties the query
    SearchExit {
        clear: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Editor
    // ─────────────────────────────────────────────────────────
    ActivateTab(TabId),
    NextTab,
    PrevTab,
    CloseTab(TabId),
    EditTab {
        id: TabId,
        text: String,
    },
    SaveTab(TabId),
    EditorKey(EditorOp),

    // ─────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────
    TerminalInput(InputEdit),
    TerminalSubmit,
    TerminalHistoryUp,
    TerminalHistoryDown,
    TerminalClear,

    // ─────────────────────────────────────────────────────────
    // Assistant
    // ─────────────────────────────────────────────────────────
    AssistantInput(InputEdit),
    AssistantSubmit,
    /// Delayed reply arriving from the timer task
    AssistantReplyReady {
        request_id: u64,
        reply: AssistantReply,
    },
    AssistantSelectPrev,
    AssistantSelectNext,
    AcceptChanges(MessageId),
    RejectChanges(MessageId),
}
