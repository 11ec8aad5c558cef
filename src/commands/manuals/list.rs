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
    list - print the accelerators in the registry

SYNOPSIS
    rtlcurate list

DESCRIPTION
    Prints the directory roots resolved from the registry followed by each
    accelerator, its number of required files and its search hint, in the order
    they are processed.

EXAMPLES
    rtlcurate list
    rtlcurate --config ./other.toml list
"#;
