//! Template catalog: the starter project for each framework
//!
//! The catalog is a static, read-only mapping from [`FrameworkId`] to a
//! [`FileSet`]. File contents live under `templates/` in the repository and
//! are embedded into the binary at build time, so there is nothing to load or
//! invalidate at runtime.
//!
//! Paths are absolute within the sandbox (leading `/`) and follow the project
//! shape each sandbox template expects:
//!
//! | Framework | Entry file                    |
//! |-----------|-------------------------------|
//! | React     | `/App.js`                     |
//! | Vue       | `/src/App.vue`                |
//! | Angular   | `/src/app/app.component.ts`   |

use crate::error::{Control, SelectionError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// Front-end framework offered by the framework control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameworkId {
    #[default]
    React,
    Vue,
    Angular,
}

impl FrameworkId {
    /// All variants, in the order the dropdown lists them
    pub const ALL: [FrameworkId; 3] = [FrameworkId::React, FrameworkId::Vue, FrameworkId::Angular];

    /// Template kind understood by the sandbox
    pub fn id(self) -> &'static str {
        match self {
            FrameworkId::React => "react",
            FrameworkId::Vue => "vue",
            FrameworkId::Angular => "angular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrameworkId::React => "React",
            FrameworkId::Vue => "Vue",
            FrameworkId::Angular => "Angular",
        }
    }

    /// Position within [`FrameworkId::ALL`]
    pub fn index(self) -> usize {
        match self {
            FrameworkId::React => 0,
            FrameworkId::Vue => 1,
            FrameworkId::Angular => 2,
        }
    }

    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.id()).collect()
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FrameworkId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| SelectionError::invalid(Control::Framework, s, &Self::ids()))
    }
}

impl Serialize for FrameworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// An immutable, ordered `path -> content` mapping for one starter project.
///
/// Iteration order is authoring order; it doubles as the visible-file order
/// handed to the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSet {
    files: &'static [(&'static str, &'static str)],
}

impl FileSet {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.files.iter().copied()
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.files.iter().map(|(path, _)| *path).collect()
    }

    pub fn get(&self, path: &str) -> Option<&'static str> {
        self.files
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, content)| *content)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The first file, which the sandbox opens by default
    pub fn entry(&self) -> Option<(&'static str, &'static str)> {
        self.files.first().copied()
    }
}

impl Serialize for FileSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (path, content) in self.files {
            map.serialize_entry(path, content)?;
        }
        map.end()
    }
}

static REACT_FILES: [(&str, &str); 2] = [
    ("/App.js", include_str!("../../templates/react/App.js")),
    ("/styles.css", include_str!("../../templates/react/styles.css")),
];

static VUE_FILES: [(&str, &str); 1] = [(
    "/src/App.vue",
    include_str!("../../templates/vue/src/App.vue"),
)];

static ANGULAR_FILES: [(&str, &str); 3] = [
    (
        "/src/app/app.component.ts",
        include_str!("../../templates/angular/src/app/app.component.ts"),
    ),
    (
        "/src/app/app.component.html",
        include_str!("../../templates/angular/src/app/app.component.html"),
    ),
    (
        "/src/app/app.component.css",
        include_str!("../../templates/angular/src/app/app.component.css"),
    ),
];

/// Starter files for `framework`
pub fn get_files(framework: FrameworkId) -> FileSet {
    let files: &'static [(&'static str, &'static str)] = match framework {
        FrameworkId::React => &REACT_FILES,
        FrameworkId::Vue => &VUE_FILES,
        FrameworkId::Angular => &ANGULAR_FILES,
    };
    FileSet { files }
}
