//! The fixed folder layout the builder creates under the base path.

use std::path::{Path, PathBuf};

/// Relative entries of the standard layout, `/`-separated.
const STANDARD_ENTRIES: &[&str] = &[
    "TestFolder",
    "TestFolder2/FolderContent1",
    "Hello",
    "Hello/World",
];

/// Ordered, immutable list of relative folder paths.
///
/// Each entry is created independently with all of its missing parents, so
/// the order only affects the order of the reported outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLayout {
    entries: Vec<PathBuf>,
}

impl FolderLayout {
    /// The compiled-in layout.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_ENTRIES.iter().copied())
    }

    /// Build a layout from `/`-separated relative paths. Separators are
    /// converted to the native form, empty segments are dropped.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| e.split('/').filter(|s| !s.is_empty()).collect::<PathBuf>())
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Absolute targets under `base`, in layout order.
    pub fn resolve<'a>(&'a self, base: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.entries.iter().map(move |rel| base.join(rel))
    }
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self::standard()
    }
}
