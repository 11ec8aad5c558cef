//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Declarative description of which HDL files make up each accelerator.

use glob::Pattern;
use serde_derive::Deserialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("accelerator name {0:?} is not filesystem-safe")]
    UnsafeName(String),
    #[error("accelerator {0:?} is defined more than once")]
    DuplicateName(String),
    #[error("accelerator {0:?} lists no files")]
    NoFiles(String),
    #[error("accelerator {0:?} lists {1:?}, which is not a bare file name")]
    NotAFileName(String, String),
    #[error("accelerator {0:?} has search hint {1:?}, which must be a relative path inside the source directory")]
    BadSearchHint(String, String),
}

/// The files required by a single accelerator.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcceleratorSpec {
    name: String,
    files: Vec<String>,
    #[serde(rename = "search-hint", default)]
    search_hint: Option<String>,
}

impl AcceleratorSpec {
    pub fn new(name: &str, files: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
            search_hint: None,
        }
    }

    /// Narrows the search to `hint`, relative to the source directory.
    pub fn search_hint(mut self, hint: &str) -> Self {
        self.search_hint = Some(hint.to_string());
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_files(&self) -> &[String] {
        &self.files
    }

    /// Accesses the search hint, treating an empty hint as no hint.
    pub fn get_search_hint(&self) -> Option<&str> {
        match self.search_hint.as_deref() {
            Some("") | None => None,
            Some(h) => Some(h),
        }
    }

    /// Computes the directory to search for this accelerator's files.
    pub fn search_root(&self, base_root: &Path) -> PathBuf {
        match self.get_search_hint() {
            Some(hint) => base_root.join(hint),
            None => base_root.to_path_buf(),
        }
    }

    /// Checks the name is usable as a single directory component.
    fn is_safe_name(s: &str) -> bool {
        s.is_empty() == false
            && s != "."
            && s != ".."
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    }

    fn validate(&self) -> Result<(), RegistryError> {
        if Self::is_safe_name(&self.name) == false {
            return Err(RegistryError::UnsafeName(self.name.clone()));
        }
        if self.files.is_empty() == true {
            return Err(RegistryError::NoFiles(self.name.clone()));
        }
        for f in &self.files {
            let bare = f.is_empty() == false
                && f != "."
                && f != ".."
                && f.contains(|c: char| c == '/' || c == '\\') == false;
            if bare == false {
                return Err(RegistryError::NotAFileName(self.name.clone(), f.clone()));
            }
        }
        if let Some(hint) = self.get_search_hint() {
            let escapes = Path::new(hint).components().any(|c| match c {
                Component::Normal(_) | Component::CurDir => false,
                _ => true,
            });
            if escapes == true {
                return Err(RegistryError::BadSearchHint(
                    self.name.clone(),
                    hint.to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Display for AcceleratorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:>4} file{}",
            self.name,
            self.files.len(),
            if self.files.len() == 1 { " " } else { "s" }
        )?;
        if let Some(hint) = self.get_search_hint() {
            write!(f, "  {}", hint)?;
        }
        Ok(())
    }
}

/// An ordered, validated collection of accelerator specifications.
#[derive(Debug, PartialEq, Clone)]
pub struct Registry(Vec<AcceleratorSpec>);

impl Registry {
    /// Builds a registry after verifying every entry and the uniqueness of names.
    pub fn new(specs: Vec<AcceleratorSpec>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for spec in &specs {
            spec.validate()?;
            if seen.insert(spec.get_name().to_string()) == false {
                return Err(RegistryError::DuplicateName(spec.get_name().to_string()));
            }
        }
        Ok(Self(specs))
    }

    pub fn inner(&self) -> &Vec<AcceleratorSpec> {
        &self.0
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&AcceleratorSpec> {
        self.0.iter().find(|a| a.get_name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|a| a.get_name()).collect()
    }

    /// Keeps only the accelerators whose name matches at least one of the `patterns`.
    ///
    /// Returns the first pattern that matched nothing as an error.
    pub fn select(&self, patterns: &[Pattern]) -> Result<Self, String> {
        if patterns.is_empty() == true {
            return Ok(self.clone());
        }
        if let Some(p) = patterns
            .iter()
            .find(|p| self.0.iter().any(|a| p.matches(a.get_name())) == false)
        {
            return Err(p.as_str().to_string());
        }
        Ok(Self(
            self.0
                .iter()
                .filter(|a| patterns.iter().any(|p| p.matches(a.get_name())))
                .cloned()
                .collect(),
        ))
    }
}
