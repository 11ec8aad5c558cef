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

use super::helps::curate;
use crate::core::accelerator::Registry;
use crate::core::context::{self, Context};
use crate::core::curator::Curator;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use glob::Pattern;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Curate {
    source: Option<PathBuf>,
    dest: Option<PathBuf>,
    only: Vec<Pattern>,
}

impl Subcommand<Context> for Curate {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(curate::HELP))?;
        Ok(Curate {
            source: cli.get(Arg::option("source").value("dir"))?,
            dest: cli.get(Arg::option("dest").value("dir"))?,
            only: cli
                .get_all(Arg::option("only").value("pattern"))?
                .unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let (paths, registry) = c.load()?;
        let registry = select(&registry, &self.only)?;

        let curator = Curator::new(
            context::choose(&self.source, paths.get_source()),
            context::choose(&self.dest, paths.get_curated()),
        );
        let report = curator.run(&registry)?;
        println!("{}", report);
        Ok(())
    }
}

/// Narrows the registry to the accelerators matching any of the `patterns`.
pub fn select(registry: &Registry, patterns: &[Pattern]) -> Result<Registry, Fault> {
    match registry.select(patterns) {
        Ok(r) => Ok(r),
        Err(p) => Err(Error::NoAcceleratorsMatched(p, Hint::AcceleratorList))?,
    }
}
