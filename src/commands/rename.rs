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

use super::helps::rename;
use crate::core::renamer::{RenameJob, RenameOutcome};
use crate::error::Error;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Rename {
    strict: bool,
    file: PathBuf,
    old: String,
    new: String,
}

impl Subcommand<()> for Rename {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(rename::HELP))?;
        Ok(Rename {
            // flags
            strict: cli.check(Arg::flag("strict"))?,
            // positionals
            file: cli.require(Arg::positional("file"))?,
            old: cli.require(Arg::positional("old"))?,
            new: cli.require(Arg::positional("new"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        let outcome = RenameJob::new(self.file.clone(), &self.old, &self.new).run()?;
        if self.strict == true {
            match &outcome {
                RenameOutcome::NoMatch { .. } => {
                    return Err(Error::NoMatchingDeclaration(self.old, self.file))?
                }
                RenameOutcome::FileNotFound { .. } => {
                    return Err(Error::RenameTargetMissing(self.file))?
                }
                RenameOutcome::Renamed { .. } => (),
            }
        }
        println!("{}", outcome);
        Ok(())
    }
}
