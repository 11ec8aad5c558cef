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

pub const MANUAL: &str = r#"NAME
    curate - copy each accelerator's files into its own folder

SYNOPSIS
    rtlcurate curate [options]

DESCRIPTION
    For every accelerator in the registry, each required file name is looked up
    under the source directory, or under '<source>/<search-hint>' when the
    accelerator has a hint. Names are compared without regard to case. A match
    is copied into '<curated>/<accelerator>/' with its contents, permissions and
    timestamps, overwriting any earlier copy.

    The search walks directories depth-first and visits the entries of each
    directory sorted by name. The first file reached wins. When two source
    repositories hold files with the same name, only the first is ever used,
    so prefer a search hint for those accelerators.

    A file with no match is reported as a warning and the run continues. The
    command fails before copying anything if the source directory does not
    exist.

OPTIONS
    --source <dir>
        Tree of extracted repositories to search

    --dest <dir>
        Directory receiving one folder per accelerator

    --only <pattern>...
        Process only accelerators whose name matches the glob-style pattern

EXAMPLES
    rtlcurate curate
    rtlcurate curate --source /data/rtl_repos --dest ./curated
    rtlcurate curate --only sha256 --only "fft_*"
"#;
