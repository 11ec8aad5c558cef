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

use super::helps::list;
use crate::core::context::Context;

use cliproc::{cli, proc, stage::*};
use cliproc::{Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct List;

impl Subcommand<Context> for List {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(list::HELP))?;
        Ok(List)
    }

    fn execute(self, c: &Context) -> proc::Result {
        let (paths, registry) = c.load()?;
        println!("source:  {}", paths.get_source().display());
        println!("curated: {}", paths.get_curated().display());
        println!("esp:     {}", paths.get_esp().display());
        println!();
        registry.inner().iter().for_each(|a| println!("{}", a));
        Ok(())
    }
}
