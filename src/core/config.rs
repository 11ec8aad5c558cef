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

use crate::core::accelerator::{AcceleratorSpec, Registry, RegistryError};
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default file name of the accelerator registry.
pub const CONFIG_FILE: &str = "accelerators.toml";

/// Directory roots used by the curation pipeline.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Paths {
    /// Tree of extracted repositories to search.
    source: PathBuf,
    /// Where the per-accelerator folders are written.
    curated: PathBuf,
    /// Root of the ESP RTL accelerator tree.
    esp: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            source: PathBuf::from("rtl_repos"),
            curated: PathBuf::from("selected_accelerator_files"),
            esp: PathBuf::from("esp/accelerators/rtl"),
        }
    }
}

impl Paths {
    pub fn get_source(&self) -> &PathBuf {
        &self.source
    }

    pub fn get_curated(&self) -> &PathBuf {
        &self.curated
    }

    pub fn get_esp(&self) -> &PathBuf {
        &self.esp
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    paths: Paths,
    #[serde(rename = "accelerator", default)]
    accelerators: Vec<AcceleratorSpec>,
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    /// Reads and parses the configuration stored at `path`.
    pub fn from_file(path: &Path) -> Result<Self, Fault> {
        if path.is_file() == false {
            return Err(Error::ConfigNotFound(
                path.to_path_buf(),
                crate::error::Hint::InitConfig,
            ))?;
        }
        let contents = std::fs::read_to_string(path)?;
        match Self::from_str(&contents) {
            Ok(c) => Ok(c),
            Err(e) => Err(Error::ConfigUnreadable(
                path.to_path_buf(),
                LastError(e.to_string()),
            ))?,
        }
    }

    pub fn get_paths(&self) -> &Paths {
        &self.paths
    }

    /// Rewrites every relative directory root to be relative to `root`.
    pub fn anchor(mut self, root: &Path) -> Self {
        use crate::util::filesystem::resolve_rel_path;
        self.paths.source = resolve_rel_path(root, &self.paths.source);
        self.paths.curated = resolve_rel_path(root, &self.paths.curated);
        self.paths.esp = resolve_rel_path(root, &self.paths.esp);
        self
    }

    /// Validates the listed accelerators and splits off the registry.
    pub fn into_parts(self) -> Result<(Paths, Registry), RegistryError> {
        let registry = Registry::new(self.accelerators)?;
        Ok((self.paths, registry))
    }
}

/// Starter registry written by `rtlcurate init`.
pub const DEFAULT_CONFIG: &str = r#"# Accelerator registry for rtlcurate.
#
# Relative paths are resolved from the directory containing this file.

[paths]
source = "rtl_repos"
curated = "selected_accelerator_files"
esp = "esp/accelerators/rtl"

# The AES-256 repository holds two accelerators in separate sub-folders.
[[accelerator]]
name = "aescipher"
files = [
    "aescipher.v", "cipherTest.v", "keyExpansion.v", "sBox.v", "shiftRow.v",
    "mixColumn.v", "roundlast.v", "rounds.v", "subBytes.v",
]
search-hint = "Abhishake567/Verilog-Implementation-of-AES-256-algorithm/Encryption"

[[accelerator]]
name = "aesdecipher_v2"
files = [
    "aesCipher.v", "inverseLastRound.v", "inverseMixColumn.v", "inverseRounds.v",
    "inverseSbox.v", "inverseShiftRow.v", "inverseSubByte.v", "keyExpansion.v",
    "mixColumnHelper.v", "sBox.v",
]
search-hint = "Abhishake567/Verilog-Implementation-of-AES-256-algorithm/Decryption"

[[accelerator]]
name = "conv_new"
files = ["conv_new.v"]

[[accelerator]]
name = "fcdnn_acc"
files = [
    "CoreCover.v", "Core.v", "FloatingPointAdder.v", "FloatingPointMultiplier.v",
    "FPExpAdder.v", "FPExpMultiplier.v", "FPNormal.v", "FPShiftNormal.v",
    "FPSubAdder.v", "MUX_2.v", "MUX_3.v", "MUX_4.v", "PipeReg.v",
    "SelectableExtendablePipeReg.v", "ShiftLeft.v", "ShiftRight.v", "SReg.v",
]

[[accelerator]]
name = "fft_64"
files = [
    "adder.v", "complex_multiplier.v", "fft_64.v", "FFT_block.v", "memory.v",
    "twiddle_factors.v",
]

[[accelerator]]
name = "sha256"
files = ["sha256.v", "sha256_w_mem.v"]

[[accelerator]]
name = "simple_dnn"
files = ["appro_func.v", "dnn_soc.v", "relu.v", "simple_dnn.v"]

[[accelerator]]
name = "sobel_v2"
files = ["SobelFilter.v"]
"#;
