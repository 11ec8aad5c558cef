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

//! Case-insensitive, recursive lookup of a file by name.
//!
//! The walk is depth-first and visits the entries of each directory in
//! byte-wise lexicographic order of their names. Hidden files and ignore
//! files get no special treatment and symbolic links are not followed. When
//! the same name exists in multiple places, the first file reached in this
//! order wins.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Returns the first file under `search_root` whose name equals `filename`
/// ignoring case, or `None` if there is no such file.
///
/// A `search_root` that does not exist produces `None`.
pub fn find_file(search_root: &Path, filename: &str) -> Option<PathBuf> {
    if search_root.is_dir() == false {
        return None;
    }
    let target = filename.to_lowercase();

    let walk = WalkBuilder::new(search_root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    walk.filter_map(|e| e.ok())
        .filter(|e| e.depth() > 0)
        .find(|e| {
            e.file_name().to_string_lossy().to_lowercase() == target && e.path().is_file() == true
        })
        .map(|e| e.into_path())
}
