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

use super::helps::init;
use crate::core::config::DEFAULT_CONFIG;
use crate::core::context::Context;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use std::path::Path;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Init {
    force: bool,
}

impl Subcommand<Context> for Init {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(init::HELP))?;
        Ok(Init {
            force: cli.check(Arg::flag("force"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        self.run(c.get_config_path())?;
        println!("info: wrote {}", c.get_config_path().display());
        Ok(())
    }
}

impl Init {
    fn run(&self, dest: &Path) -> Result<(), Fault> {
        if dest.exists() == true && self.force == false {
            return Err(Error::ConfigExists(
                dest.to_path_buf(),
                Hint::ForceOverwrite,
            ))?;
        }
        if let Some(parent) = dest.parent() {
            if parent.as_os_str().is_empty() == false {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(dest, DEFAULT_CONFIG)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::config::CONFIG_FILE;

    #[test]
    fn writes_and_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("rtl").join(CONFIG_FILE);

        Init { force: false }.run(&dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), DEFAULT_CONFIG);

        std::fs::write(&dest, "# edited\n").unwrap();
        assert!(Init { force: false }.run(&dest).is_err());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "# edited\n");

        Init { force: true }.run(&dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), DEFAULT_CONFIG);
    }
}
