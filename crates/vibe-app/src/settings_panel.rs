//! Settings view state

pub const SUPPORTED_MODELS: [&str; 3] = ["GPT-4 (Recommended)", "GPT-3.5 Turbo", "Claude (Coming Soon)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Ai,
    Editor,
    Account,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::Ai,
        SettingsTab::Editor,
        SettingsTab::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Ai => "AI Configuration",
            SettingsTab::Editor => "Editor",
            SettingsTab::Account => "Account",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SettingsTab::General => 0,
            SettingsTab::Ai => 1,
            SettingsTab::Editor => 2,
            SettingsTab::Account => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Toggleable rows on the General tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralItem {
    DarkMode,
    AutoSave,
}

impl GeneralItem {
    pub const ALL: [GeneralItem; 2] = [GeneralItem::DarkMode, GeneralItem::AutoSave];

    pub fn label(self) -> &'static str {
        match self {
            GeneralItem::DarkMode => "Dark Mode",
            GeneralItem::AutoSave => "Auto Save",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GeneralItem::DarkMode => "Use dark theme for the interface",
            GeneralItem::AutoSave => "Automatically save changes as you type",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsPanelState {
    pub tab: SettingsTab,
    /// Row cursor on the General tab
    pub selected: usize,
    /// API key being typed on the AI tab
    pub api_key_input: String,
    pub editing_api_key: bool,
}

impl SettingsPanelState {
    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.editing_api_key = false;
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
        self.editing_api_key = false;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < GeneralItem::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> GeneralItem {
        GeneralItem::ALL[self.selected.min(GeneralItem::ALL.len() - 1)]
    }

    /// Take the typed key, leaving the input empty
    pub fn take_api_key(&mut self) -> Option<String> {
        self.editing_api_key = false;
        let key = std::mem::take(&mut self.api_key_input);
        let trimmed = key.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Mask a secret for display, keeping a short prefix
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(3).collect();
    let hidden = secret.chars().count().saturating_sub(3);
    format!("{}{}", visible, "•".repeat(hidden))
}
