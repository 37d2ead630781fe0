//! Recent-projects list with a keyboard cursor

use vibe_core::{mock_data, Project};

/// Quick-action cards shown above the list; they do nothing when chosen
pub const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Create New Project", "Start with a template or from scratch"),
    ("Open Folder", "Browse and select existing project"),
    ("Clone Repository", "Import from GitHub or Git URL"),
];

#[derive(Debug, Clone)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub selected: usize,
}

impl ProjectsState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.projects.len() {
            self.selected += 1;
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            projects: mock_data::recent_projects(),
            selected: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut projects = ProjectsState::default();
        projects.move_up();
        assert_eq!(projects.selected, 0);
        for _ in 0..10 {
            projects.move_down();
        }
        assert_eq!(projects.selected, projects.projects.len() - 1);
        assert_eq!(
            projects.selected_project().map(|p| p.name.as_str()),
            Some("dashboard-ui")
        );
    }
}
