//! New Workspace Form State

use std::path::{Path, PathBuf};

/// Form field for the new workspace dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewWorkspaceField {
    #[default]
    Name,
    Path,
}

impl NewWorkspaceField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Path,
            Self::Path => Self::Name,
        }
    }

    /// Move to the previous field (two fields, so same as next)
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// State for the new workspace form
#[derive(Debug, Clone, Default)]
pub struct NewWorkspaceFormState {
    pub name: String,
    /// Optional worktree directory
    pub path: String,
    pub focused_field: NewWorkspaceField,
}

impl NewWorkspaceFormState {
    /// Reset the form to its default state
    pub fn reset(&mut self) {
        self.name.clear();
        self.path.clear();
        self.focused_field = NewWorkspaceField::default();
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field {
            NewWorkspaceField::Name => &mut self.name,
            NewWorkspaceField::Path => &mut self.path,
        }
    }

    /// Typed name, or the last component of the path when no name was given
    pub fn effective_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        self.worktree_path()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_default()
    }

    pub fn worktree_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        if path.is_empty() {
            None
        } else {
            Some(Path::new(path).to_path_buf())
        }
    }

    /// Check if the form can create a workspace
    pub fn is_valid(&self) -> bool {
        !self.effective_name().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_name_prefers_typed_name() {
        let form = NewWorkspaceFormState {
            name: "  api  ".to_string(),
            path: "/repos/app".to_string(),
            ..Default::default()
        };
        assert_eq!(form.effective_name(), "api");
    }

    #[test]
    fn test_effective_name_falls_back_to_path() {
        let form = NewWorkspaceFormState {
            path: "/repos/app-login/".to_string(),
            ..Default::default()
        };
        assert_eq!(form.effective_name(), "app-login");
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_form_is_invalid() {
        let form = NewWorkspaceFormState::default();
        assert!(!form.is_valid());
        assert_eq!(form.worktree_path(), None);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(NewWorkspaceField::Name.next(), NewWorkspaceField::Path);
        assert_eq!(NewWorkspaceField::Path.next(), NewWorkspaceField::Name);
        assert_eq!(NewWorkspaceField::Name.prev(), NewWorkspaceField::Path);
    }
}
