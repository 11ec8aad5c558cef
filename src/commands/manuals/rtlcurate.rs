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
    rtlcurate - collect accelerator hdl sources into curated folders

SYNOPSIS
    rtlcurate [options] [command]

DESCRIPTION
    Rtlcurate works on a tree of extracted repositories laid out as
    '<source>/<repository>/<path>'. An accelerator registry names the files each
    accelerator needs. The 'curate' command finds those files and copies them
    into '<curated>/<accelerator>/'. The 'integrate' command then stages the
    curated files into an esp project tree whose accelerator folders were
    already generated.

    The registry is read from the '--config' option, then the RTLCURATE_CONFIG
    environment variable, then 'accelerators.toml' in the working directory.

    The 'rename' command is independent of the registry. It renames a module
    declaration inside a single file and keeps a backup of the original.

OPTIONS
    --config <file>
        Registry file to load

    --color <when>
        Coloring: auto, always, never

    --version
        Print version information and exit

    --help, -h
        Print help information

EXAMPLES
    rtlcurate init
    rtlcurate curate --only "aes*"
    rtlcurate integrate --esp ../esp/accelerators/rtl
    rtlcurate rename rtl/adder.v adder adder2
"#;
