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
    init - write a starter accelerators.toml

SYNOPSIS
    rtlcurate init [options]

DESCRIPTION
    Writes a registry file describing the reference accelerators to the
    configured location. Edit the file to add accelerators or to point the
    directory roots elsewhere. Relative paths in the file are resolved from
    the directory containing it.

    This command fails if the file already exists, unless '--force' is given.

OPTIONS
    --force
        Overwrite an existing registry file

EXAMPLES
    rtlcurate init
    rtlcurate --config ./rtl/accelerators.toml init --force
"#;
