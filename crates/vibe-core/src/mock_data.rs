//! Static data providers: the fake project tree, recent projects, and the
//! buffer shown when the editor first opens.

use crate::tree::FileNode;
use crate::types::{Project, ProjectStatus};

/// Project name used when none is configured
pub const DEFAULT_PROJECT_NAME: &str = "my-vibe-project";

/// Contents of the tab open at startup
pub const WELCOME_APP_SOURCE: &str = r#"import React from 'react';
import './App.css';

function App() {
  return (
    <div className="App">
      <header className="App-header">
        <h1>Welcome to Vibe Workbench</h1>
        <p>Start editing to see some magic happen!</p>
      </header>
    </div>
  );
}

export default App;"#;

/// Build the hardcoded project tree rooted at `/`
pub fn project_tree(project_name: &str) -> FileNode {
    FileNode::folder(
        project_name,
        "/",
        vec![
            FileNode::folder(
                "src",
                "/src",
                vec![
                    FileNode::folder(
                        "components",
                        "/src/components",
                        vec![
                            FileNode::file("Header.tsx", "/src/components/Header.tsx"),
                            FileNode::file("Footer.tsx", "/src/components/Footer.tsx"),
                        ],
                    ),
                    FileNode::folder(
                        "pages",
                        "/src/pages",
                        vec![
                            FileNode::file("Home.tsx", "/src/pages/Home.tsx"),
                            FileNode::file("About.tsx", "/src/pages/About.tsx"),
                        ],
                    ),
                    FileNode::file("App.tsx", "/src/App.tsx"),
                    FileNode::file("main.tsx", "/src/main.tsx"),
                    FileNode::file("index.css", "/src/index.css"),
                ],
            ),
            FileNode::folder(
                "public",
                "/public",
                vec![
                    FileNode::file("index.html", "/public/index.html"),
                    FileNode::file("favicon.ico", "/public/favicon.ico"),
                    FileNode::file("logo.png", "/public/logo.png"),
                ],
            ),
            FileNode::file("package.json", "/package.json"),
            FileNode::file("README.md", "/README.md"),
            FileNode::file("tsconfig.json", "/tsconfig.json"),
        ],
    )
}

/// The fake recent-projects list
pub fn recent_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "my-react-app".into(),
            kind: "React".into(),
            last_modified: "2 hours ago".into(),
            status: ProjectStatus::Active,
            path: "/Users/dev/projects/my-react-app".into(),
        },
        Project {
            id: "2".into(),
            name: "api-server".into(),
            kind: "Node.js".into(),
            last_modified: "1 day ago".into(),
            status: ProjectStatus::Idle,
            path: "/Users/dev/projects/api-server".into(),
        },
        Project {
            id: "3".into(),
            name: "dashboard-ui".into(),
            kind: "Next.js".into(),
            last_modified: "3 days ago".into(),
            status: ProjectStatus::Idle,
            path: "/Users/dev/projects/dashboard-ui".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    #[test]
    fn test_tree_root_uses_project_name() {
        let tree = project_tree("demo");
        assert_eq!(tree.name, "demo");
        assert_eq!(tree.path, "/");
        assert_eq!(tree.kind, NodeKind::Folder);
    }

    #[test]
    fn test_tree_folders() {
        let tree = project_tree(DEFAULT_PROJECT_NAME);
        assert_eq!(
            tree.folder_paths(),
            vec!["/", "/src", "/src/components", "/src/pages", "/public"]
        );
    }

    #[test]
    fn test_tree_paths_are_unique() {
        fn walk<'a>(node: &'a FileNode, out: &mut Vec<&'a str>) {
            out.push(&node.path);
            for child in &node.children {
                walk(child, out);
            }
        }
        let tree = project_tree(DEFAULT_PROJECT_NAME);
        let mut paths = Vec::new();
        walk(&tree, &mut paths);
        let count = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }

    #[test]
    fn test_recent_projects_has_one_active() {
        let projects = recent_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(
            projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            1
        );
    }
}
