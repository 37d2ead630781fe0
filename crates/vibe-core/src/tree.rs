//! File tree nodes for the explorer

/// Whether a node is a leaf file or a folder with children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// Coarse icon class derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Code,
    Image,
    Text,
}

impl FileIcon {
    pub fn for_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("tsx" | "ts" | "js" | "jsx" | "rs") => FileIcon::Code,
            Some("png" | "jpg" | "jpeg" | "gif" | "ico") => FileIcon::Image,
            _ => FileIcon::Text,
        }
    }
}

/// A node in the static project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub kind: NodeKind,
    pub path: String,
    /// Ordered children (always empty for files)
    pub children: Vec<FileNode>,
    pub extension: Option<String>,
}

impl FileNode {
    pub fn file(name: &str, path: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_string())
            .filter(|ext| !ext.is_empty());
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            path: path.to_string(),
            children: Vec::new(),
            extension,
        }
    }

    pub fn folder(name: &str, path: &str, children: Vec<FileNode>) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Folder,
            path: path.to_string(),
            children,
            extension: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn icon(&self) -> FileIcon {
        FileIcon::for_extension(self.extension.as_deref())
    }

    /// Depth-first search for a node by path
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(path))
    }

    /// All folder paths in this subtree, in depth-first order
    pub fn folder_paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_folders(&mut out);
        out
    }

    fn collect_folders<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_folder() {
            out.push(self.path.as_str());
            for child in &self.children {
                child.collect_folders(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileNode {
        FileNode::folder(
            "root",
            "/",
            vec![
                FileNode::folder("src", "/src", vec![FileNode::file("App.tsx", "/src/App.tsx")]),
                FileNode::file("README.md", "/README.md"),
            ],
        )
    }

    #[test]
    fn test_file_extension_derived_from_name() {
        let node = FileNode::file("index.css", "/src/index.css");
        assert_eq!(node.extension.as_deref(), Some("css"));
        assert_eq!(FileNode::file("Makefile", "/Makefile").extension, None);
    }

    #[test]
    fn test_find_nested_node() {
        let tree = sample();
        assert_eq!(tree.find("/src/App.tsx").map(|n| n.name.as_str()), Some("App.tsx"));
        assert!(tree.find("/nope").is_none());
    }

    #[test]
    fn test_folder_paths_skip_files() {
        let tree = sample();
        assert_eq!(tree.folder_paths(), vec!["/", "/src"]);
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(FileIcon::for_extension(Some("tsx")), FileIcon::Code);
        assert_eq!(FileIcon::for_extension(Some("png")), FileIcon::Image);
        assert_eq!(FileIcon::for_extension(Some("md")), FileIcon::Text);
        assert_eq!(FileIcon::for_extension(None), FileIcon::Text);
    }
}
