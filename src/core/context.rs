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

use crate::core::accelerator::Registry;
use crate::core::config::{Config, Paths, CONFIG_FILE};
use crate::util::anyerror::Fault;
use crate::util::environment;
use std::path::{Path, PathBuf};

/// Settings shared by every command for a single invocation.
#[derive(Debug, PartialEq)]
pub struct Context {
    config_path: PathBuf,
}

impl Context {
    pub fn new() -> Context {
        Context {
            config_path: PathBuf::from(CONFIG_FILE),
        }
    }

    /// Determines the registry file location.
    ///
    /// An explicit `path` takes priority over the environment variable `key`,
    /// which takes priority over the default file in the working directory.
    pub fn config(mut self, path: Option<PathBuf>, key: &str) -> Context {
        self.config_path = match path {
            Some(p) => p,
            None => environment::var_path(key).unwrap_or_else(|| PathBuf::from(CONFIG_FILE)),
        };
        self
    }

    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the registry file, anchoring its relative paths at the file's directory.
    pub fn load(&self) -> Result<(Paths, Registry), Fault> {
        let cfg = Config::from_file(&self.config_path)?;
        let root = match self.config_path.parent() {
            Some(p) if p.as_os_str().is_empty() == false => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(cfg.anchor(&root).into_parts()?)
    }
}

/// Picks the command-line override when one is given.
pub fn choose(arg: &Option<PathBuf>, configured: &Path) -> PathBuf {
    match arg {
        Some(p) => p.clone(),
        None => configured.to_path_buf(),
    }
}
