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

use super::curate;
use super::helps::integrate;
use crate::core::context::{self, Context};
use crate::core::integrator::Integrator;
use glob::Pattern;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Integrate {
    dest: Option<PathBuf>,
    esp: Option<PathBuf>,
    only: Vec<Pattern>,
}

impl Subcommand<Context> for Integrate {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(integrate::HELP))?;
        Ok(Integrate {
            dest: cli.get(Arg::option("dest").value("dir"))?,
            esp: cli.get(Arg::option("esp").value("dir"))?,
            only: cli
                .get_all(Arg::option("only").value("pattern"))?
                .unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let (paths, registry) = c.load()?;
        let registry = curate::select(&registry, &self.only)?;

        let integrator = Integrator::new(
            context::choose(&self.dest, paths.get_curated()),
            context::choose(&self.esp, paths.get_esp()),
        );
        let report = integrator.run(&registry.names())?;
        println!("{}", report);
        Ok(())
    }
}
