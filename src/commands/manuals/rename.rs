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
    rename - rename a module declaration inside an hdl file

SYNOPSIS
    rtlcurate rename [options] <file> <old> <new>

DESCRIPTION
    Every line that declares module '<old>' ('module <old>' or
    'macromodule <old>' at the start of the line) has that identifier replaced
    with '<new>'. Every line reading 'endmodule // <old>' becomes
    'endmodule // <new>'. All other lines are kept byte for byte.

    Lines are matched textually. Instances of the module elsewhere in the
    design are not updated.

    When a line changes, the original file is moved to '<file>.bak' and the
    rewritten contents are written to '<file>'. A backup from an earlier run is
    replaced. When nothing matches, the file is left alone and a warning is
    printed. A missing '<file>' is reported the same way. In both cases the
    exit status is still zero unless '--strict' is given.

    The file is handled as raw bytes, so comments in any encoding pass
    through unchanged. '<old>' is matched literally and may be an escaped
    identifier such as '\bus_if'. '<new>' must be a simple identifier or an
    escaped identifier.

OPTIONS
    <file>
        Hdl source file to rewrite

    <old>
        Identifier currently declared

    <new>
        Identifier to declare instead

    --strict
        Exit with an error when the file is missing or no declaration matches

EXAMPLES
    rtlcurate rename foo.v adder adder2
    rtlcurate rename --strict rtl/fft_64.v adder fft_adder
"#;
