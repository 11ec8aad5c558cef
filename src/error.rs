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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("source directory {0:?} does not exist{1}")]
    SourceRootMissing(PathBuf, Hint),
    #[error("configuration file {0:?} does not exist{1}")]
    ConfigNotFound(PathBuf, Hint),
    #[error("failed to read configuration file {0:?}: {1}")]
    ConfigUnreadable(PathBuf, LastError),
    #[error("configuration file {0:?} already exists{1}")]
    ConfigExists(PathBuf, Hint),
    #[error("pattern {0:?} does not match any accelerator{1}")]
    NoAcceleratorsMatched(String, Hint),
    #[error("no module named {0:?} found in {1:?}")]
    NoMatchingDeclaration(String, PathBuf),
    #[error("file {0:?} does not exist")]
    RenameTargetMissing(PathBuf),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    InitConfig,
    SourceOverride,
    AcceleratorList,
    ForceOverwrite,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InitConfig => "use `rtlcurate init` to write a starter accelerators.toml",
            Self::SourceOverride => {
                "set \"paths.source\" in the configuration or pass \"--source <dir>\""
            }
            Self::AcceleratorList => "use `rtlcurate list` to see the known accelerators",
            Self::ForceOverwrite => "use \"--force\" to overwrite the existing file",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}
