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
    integrate - stage curated folders into an existing esp tree

SYNOPSIS
    rtlcurate integrate [options]

DESCRIPTION
    For every accelerator in the registry, the files directly inside
    '<curated>/<accelerator>/' are copied into
    '<esp>/<accelerator>_rtl/hw/src/<accelerator>_rtl_basic_dma64/'.

    The destination folder must already exist. It is produced by the esp
    accelerator generator and is never created by this command. Accelerators
    without a curated folder or without a destination are reported and
    skipped. Existing files in the destination are overwritten.

OPTIONS
    --dest <dir>
        Directory holding the curated accelerator folders

    --esp <dir>
        Root of the esp rtl accelerator tree

    --only <pattern>...
        Process only accelerators whose name matches the glob-style pattern

EXAMPLES
    rtlcurate integrate
    rtlcurate integrate --esp ../esp/accelerators/rtl --only sobel_v2
"#;
