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

//! Standalone module renamer: `rename-module <file> <old> <new>`.

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help};
use rtlcurate::core::renamer::RenameJob;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

struct RenameModule {
    file: PathBuf,
    old: String,
    new: String,
}

impl Command for RenameModule {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(HELP))?;
        Ok(RenameModule {
            file: cli.require(Arg::positional("file"))?,
            old: cli.require(Arg::positional("old"))?,
            new: cli.require(Arg::positional("new"))?,
        })
    }

    fn execute(self) -> proc::Result {
        let outcome = RenameJob::new(self.file, &self.old, &self.new).run()?;
        println!("{}", outcome);
        Ok(())
    }
}

const HELP: &str = "\
Rename a module declaration inside an hdl file, keeping a .bak backup.

Usage:
    rename-module <file> <old> <new>

Args:
    <file>      hdl source file to rewrite
    <old>       identifier currently declared
    <new>       identifier to declare instead
";

fn main() -> ExitCode {
    Cli::default().parse(env::args()).go::<RenameModule>()
}
