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

//! Stages curated accelerator folders into a prepared ESP tree.
//!
//! Destinations are only ever written into, never created: an ESP project
//! generator must have produced the accelerator's source folder beforehand.

use crate::util::anyerror::Fault;
use crate::util::filesystem;
use colored::Colorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Computes `esp_root/<name>_rtl/hw/src/<name>_rtl_basic_dma64`.
pub fn integration_target(esp_root: &Path, name: &str) -> PathBuf {
    esp_root
        .join(format!("{}_rtl", name))
        .join("hw")
        .join("src")
        .join(format!("{}_rtl_basic_dma64", name))
}

#[derive(Debug, PartialEq, Clone)]
pub enum IntegrateRecord {
    Copied {
        accelerator: String,
        source: PathBuf,
        destination: PathBuf,
    },
    /// The curated folder for the accelerator is absent.
    SourceMissing { accelerator: String, path: PathBuf },
    /// The ESP destination folder has not been generated.
    TargetMissing { accelerator: String, path: PathBuf },
}

impl IntegrateRecord {
    pub fn is_skip(&self) -> bool {
        match self {
            Self::Copied { .. } => false,
            _ => true,
        }
    }
}

impl Display for IntegrateRecord {
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
            Self::SourceMissing { path, .. } => write!(
                f,
                "{} source directory not found: {}",
                "warning:".yellow(),
                path.display()
            ),
            Self::TargetMissing { path, .. } => write!(
                f,
                "{} destination does not exist, skipping: {}",
                "warning:".yellow(),
                path.display()
            ),
        }
    }
}

#[derive(Debug, PartialEq, Default)]
pub struct IntegrateReport {
    records: Vec<IntegrateRecord>,
}

impl IntegrateReport {
    pub fn get_records(&self) -> &Vec<IntegrateRecord> {
        &self.records
    }

    pub fn copied(&self) -> usize {
        self.records.iter().filter(|r| r.is_skip() == false).count()
    }

    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|r| r.is_skip() == true).count()
    }

    fn push(&mut self, record: IntegrateRecord) {
        println!("{}", record);
        self.records.push(record);
    }
}

impl Display for IntegrateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "info: integrated {} file{}",
            self.copied(),
            if self.copied() == 1 { "" } else { "s" }
        )?;
        if self.skipped() > 0 {
            write!(
                f,
                " ({} accelerator{} skipped)",
                self.skipped(),
                if self.skipped() == 1 { "" } else { "s" }
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub struct Integrator {
    curated_root: PathBuf,
    esp_root: PathBuf,
}

impl Integrator {
    pub fn new(curated_root: PathBuf, esp_root: PathBuf) -> Self {
        Self {
            curated_root,
            esp_root,
        }
    }

    /// Copies each named accelerator's curated files into its ESP folder.
    pub fn run(&self, names: &[&str]) -> Result<IntegrateReport, Fault> {
        let mut report = IntegrateReport::default();
        for name in names {
            println!("info: integrating accelerator {:?} ...", name);
            self.copy_to_esp(name, &mut report)?;
        }
        Ok(report)
    }

    fn copy_to_esp(&self, name: &str, report: &mut IntegrateReport) -> Result<(), Fault> {
        let src_dir = self.curated_root.join(name);
        if src_dir.is_dir() == false {
            report.push(IntegrateRecord::SourceMissing {
                accelerator: name.to_string(),
                path: src_dir,
            });
            return Ok(());
        }

        let dest_dir = integration_target(&self.esp_root, name);
        if dest_dir.is_dir() == false {
            report.push(IntegrateRecord::TargetMissing {
                accelerator: name.to_string(),
                path: dest_dir,
            });
            return Ok(());
        }

        // only the files directly inside the curated folder
        let mut files: Vec<PathBuf> = std::fs::read_dir(&src_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() == true)
            .collect();
        files.sort();

        // destination paths are shown relative to the directory holding the ESP root
        let esp_parent = self.esp_root.parent().unwrap_or(&self.esp_root);
        for file in files {
            let dest = match file.file_name() {
                Some(n) => dest_dir.join(n),
                None => continue,
            };
            filesystem::copy_with_metadata(&file, &dest)?;
            report.push(IntegrateRecord::Copied {
                accelerator: name.to_string(),
                source: filesystem::relative_to(&file, &self.curated_root),
                destination: filesystem::relative_to(&dest, esp_parent),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str, contents: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, contents).unwrap();
    }

    /// Lists every directory below `root`, sorted.
    fn dirs(root: &Path) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = ignore::WalkBuilder::new(root)
            .standard_filters(false)
            .build()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.into_path())
            .collect();
        dirs.sort();
        dirs
    }

    #[test]
    fn target_layout() {
        assert_eq!(
            integration_target(Path::new("esp/accelerators/rtl"), "sha256"),
            PathBuf::from("esp/accelerators/rtl/sha256_rtl/hw/src/sha256_rtl_basic_dma64")
        );
    }

    #[test]
    fn copies_into_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let curated = dir.path().join("selected_accelerator_files");
        let esp = dir.path().join("esp/accelerators/rtl");
        touch(&curated, "sha256/sha256.v", "new");
        touch(&curated, "sha256/sha256_w_mem.v", "mem");
        // nested folders are not staged
        touch(&curated, "sha256/tb/sha256_tb.v", "tb");

        let target = integration_target(&esp, "sha256");
        touch(&target, "sha256.v", "old");
        touch(&target, "sha256_rtl_basic_dma64.v", "wrapper");

        let report = Integrator::new(curated, esp.clone()).run(&["sha256"]).unwrap();

        assert_eq!(report.copied(), 2);
        assert_eq!(report.skipped(), 0);
        assert_eq!(fs::read_to_string(target.join("sha256.v")).unwrap(), "new");
        assert_eq!(fs::read_to_string(target.join("sha256_w_mem.v")).unwrap(), "mem");
        assert_eq!(
            fs::read_to_string(target.join("sha256_rtl_basic_dma64.v")).unwrap(),
            "wrapper"
        );
        assert_eq!(target.join("sha256_tb.v").exists(), false);
        assert_eq!(target.join("tb").exists(), false);
        assert_eq!(
            report.get_records()[0],
            IntegrateRecord::Copied {
                accelerator: "sha256".to_string(),
                source: PathBuf::from("sha256/sha256.v"),
                destination: PathBuf::from(
                    "rtl/sha256_rtl/hw/src/sha256_rtl_basic_dma64/sha256.v"
                ),
            }
        );
    }

    #[test]
    fn never_creates_targets() {
        let dir = tempfile::tempdir().unwrap();
        let curated = dir.path().join("selected_accelerator_files");
        let esp = dir.path().join("esp/accelerators/rtl");
        touch(&curated, "fft_64/fft_64.v", "fft");
        // the ESP tree exists, but not the accelerator's slot
        fs::create_dir_all(esp.join("fft_64_rtl/hw")).unwrap();

        let before = dirs(dir.path());
        let report = Integrator::new(curated, esp.clone()).run(&["fft_64"]).unwrap();

        assert_eq!(before, dirs(dir.path()));
        assert_eq!(
            report.get_records(),
            &vec![IntegrateRecord::TargetMissing {
                accelerator: "fft_64".to_string(),
                path: integration_target(&esp, "fft_64"),
            }]
        );
    }

    #[test]
    fn skips_uncurated_accelerators() {
        let dir = tempfile::tempdir().unwrap();
        let curated = dir.path().join("selected_accelerator_files");
        let esp = dir.path().join("esp/accelerators/rtl");
        touch(&curated, "conv_new/conv_new.v", "conv");
        fs::create_dir_all(integration_target(&esp, "conv_new")).unwrap();
        fs::create_dir_all(integration_target(&esp, "sobel_v2")).unwrap();

        let report = Integrator::new(curated.clone(), esp.clone())
            .run(&["sobel_v2", "conv_new"])
            .unwrap();

        assert_eq!(
            report.get_records()[0],
            IntegrateRecord::SourceMissing {
                accelerator: "sobel_v2".to_string(),
                path: curated.join("sobel_v2"),
            }
        );
        assert_eq!(report.copied(), 1);
        assert!(integration_target(&esp, "conv_new").join("conv_new.v").is_file());
        assert_eq!(fs::read_dir(integration_target(&esp, "sobel_v2")).unwrap().count(), 0);
    }

    #[test]
    fn summary_line() {
        let report = IntegrateReport {
            records: vec![IntegrateRecord::SourceMissing {
                accelerator: "a".to_string(),
                path: PathBuf::from("a"),
            }],
        };
        assert_eq!(report.to_string(), "info: integrated 0 files (1 accelerator skipped)");
    }
}
