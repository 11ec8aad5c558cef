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

//! Copies every file an accelerator requires into its own folder.

use crate::core::accelerator::{AcceleratorSpec, Registry};
use crate::core::resolver;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use colored::Colorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Clone)]
pub enum CurateRecord {
    /// A required file was found and copied.
    Copied {
        accelerator: String,
        /// Location of the match, relative to the source root.
        source: PathBuf,
        /// Location of the copy, relative to the destination root.
        destination: PathBuf,
    },
    /// A required file has no match under the search root.
    Missing {
        accelerator: String,
        filename: String,
    },
}

impl Display for CurateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copied {
                source,
                destination,
                ..
            } => write!(
                f,
                "info: copied {} -> {}",
                source.display(),
                destination.display()
            ),
            Self::Missing {
                accelerator,
                filename,
            } => write!(
                f,
                "{} missing {:?} for accelerator {:?}",
                "warning:".yellow(),
                filename,
                accelerator
            ),
        }
    }
}

#[derive(Debug, PartialEq, Default)]
pub struct CurateReport {
    records: Vec<CurateRecord>,
    accelerators: usize,
}

impl CurateReport {
    pub fn get_records(&self) -> &Vec<CurateRecord> {
        &self.records
    }

    pub fn copied(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, CurateRecord::Copied { .. }))
            .count()
    }

    pub fn missing(&self) -> usize {
        self.records.len() - self.copied()
    }

    fn push(&mut self, record: CurateRecord) {
        println!("{}", record);
        self.records.push(record);
    }
}

impl Display for CurateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "info: curated {} file{} for {} accelerator{}",
            self.copied(),
            if self.copied() == 1 { "" } else { "s" },
            self.accelerators,
            if self.accelerators == 1 { "" } else { "s" },
        )?;
        if self.missing() > 0 {
            write!(f, " ({} missing)", self.missing())?;
        }
        Ok(())
    }
}

/// Builds the curated tree `destination_root/<accelerator>/<file>`.
#[derive(Debug, PartialEq)]
pub struct Curator {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl Curator {
    pub fn new(source_root: PathBuf, destination_root: PathBuf) -> Self {
        Self {
            source_root,
            destination_root,
        }
    }

    /// Processes every accelerator in the `registry`, in order.
    ///
    /// Errors before any copy if the source root does not exist. Missing
    /// files are recorded and skipped; failed copies abort the run.
    pub fn run(&self, registry: &Registry) -> Result<CurateReport, Fault> {
        if self.source_root.is_dir() == false {
            return Err(Error::SourceRootMissing(
                self.source_root.clone(),
                Hint::SourceOverride,
            ))?;
        }
        let mut report = CurateReport::default();
        for acc in registry.inner() {
            self.curate(acc, &mut report)?;
            report.accelerators += 1;
        }
        Ok(report)
    }

    fn curate(&self, acc: &AcceleratorSpec, report: &mut CurateReport) -> Result<(), Fault> {
        let search_root = acc.search_root(&self.source_root);
        let dest_dir = self.destination_root.join(acc.get_name());
        println!("info: curating accelerator {:?} ...", acc.get_name());

        for filename in acc.get_files() {
            match resolver::find_file(&search_root, filename) {
                Some(src) => {
                    let dest = self.copy(&src, &dest_dir)?;
                    report.push(CurateRecord::Copied {
                        accelerator: acc.get_name().to_string(),
                        source: filesystem::relative_to(&src, &self.source_root),
                        destination: filesystem::relative_to(&dest, &self.destination_root),
                    });
                }
                None => report.push(CurateRecord::Missing {
                    accelerator: acc.get_name().to_string(),
                    filename: filename.clone(),
                }),
            }
        }
        Ok(())
    }

    /// Copies `src` into `dest_dir` under the name it has on disk.
    fn copy(&self, src: &Path, dest_dir: &Path) -> Result<PathBuf, Fault> {
        std::fs::create_dir_all(dest_dir)?;
        let dest = match src.file_name() {
            Some(name) => dest_dir.join(name),
            None => dest_dir.to_path_buf(),
        };
        filesystem::copy_with_metadata(src, &dest)?;
        Ok(dest)
    }
}
