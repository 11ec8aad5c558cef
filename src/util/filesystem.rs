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

use crate::util::anyerror::Fault;
use std::ffi::OsString;
use std::fs;
use std::fs::FileTimes;
use std::path::{Path, PathBuf};

/// Suffix appended to a file name to derive its backup location.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Copies the file at `src` to `dest`, overwriting any existing file.
///
/// The contents and permissions are copied, followed by the access and
/// modification times of `src`. Returns the number of bytes copied.
pub fn copy_with_metadata(src: &Path, dest: &Path) -> Result<u64, Fault> {
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    let bytes = fs_extra::file::copy(src, dest, &options)?;

    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    // not every platform records access times
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    let file = match fs::File::options().write(true).open(dest) {
        Ok(f) => f,
        // read-only copies can still have their times set through a plain handle
        Err(_) => fs::File::open(dest)?,
    };
    file.set_times(times)?;
    Ok(bytes)
}

/// Returns the path with [BACKUP_SUFFIX] appended to its file name.
///
/// `foo.v` becomes `foo.v.bak` and `Makefile` becomes `Makefile.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Resolves a relative path into a full path if given relative to some `root` path.
///
/// Absolute paths are returned unchanged.
pub fn resolve_rel_path(root: &Path, p: &Path) -> PathBuf {
    match p.is_relative() {
        true => root.join(p),
        false => p.to_path_buf(),
    }
}

/// Expresses `path` relative to `root` when it lives underneath it.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn backup_appends_suffix() {
        assert_eq!(
            backup_path(&PathBuf::from("rtl/foo.v")),
            PathBuf::from("rtl/foo.v.bak")
        );
        assert_eq!(
            backup_path(&PathBuf::from("Makefile")),
            PathBuf::from("Makefile.bak")
        );
        assert_eq!(
            backup_path(&PathBuf::from("top.sv.bak")),
            PathBuf::from("top.sv.bak.bak")
        );
    }

    #[test]
    fn resolve_path_simple() {
        let root = PathBuf::from("/work/project");
        assert_eq!(
            resolve_rel_path(&root, Path::new("rtl_repos")),
            PathBuf::from("/work/project/rtl_repos")
        );
        assert_eq!(
            resolve_rel_path(&root, Path::new("/abs/rtl")),
            PathBuf::from("/abs/rtl")
        );
    }

    #[test]
    fn relative_paths() {
        let root = PathBuf::from("rtl_repos");
        assert_eq!(
            relative_to(&root.join("a").join("b.v"), &root),
            PathBuf::from("a").join("b.v")
        );
        assert_eq!(
            relative_to(Path::new("other/b.v"), &root),
            PathBuf::from("other/b.v")
        );
    }

    #[test]
    fn copy_keeps_contents_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("adder.v");
        let dest = dir.path().join("copy.v");
        fs::write(&src, "module adder;\nendmodule\n").unwrap();
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        fs::File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        // overwrites an existing destination
        fs::write(&dest, "stale").unwrap();
        let bytes = copy_with_metadata(&src, &dest).unwrap();

        assert_eq!(bytes, 24);
        assert_eq!(fs::read(&src).unwrap(), fs::read(&dest).unwrap());
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), stamp);
    }
}
