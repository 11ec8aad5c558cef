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

pub const HELP: &str = r#"Rtlcurate collects accelerator hdl sources into curated folders.

Usage:
    rtlcurate [options] [command]

Commands:
    init            write a starter accelerators.toml
    list            print the accelerators in the registry
    curate          copy each accelerator's files into its own folder
    integrate       stage curated folders into an existing esp tree
    rename          rename a module declaration inside an hdl file

Options:
    --config <file> registry file to load (default: accelerators.toml)
    --color <when>  coloring: auto, always, never
    --version       print version information and exit
    --help, -h      print help information

Use 'rtlcurate help <command>' for more information about a command.
"#;
