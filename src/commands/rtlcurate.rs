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

use crate::commands::helps::rtlcurate;
use crate::core::context::Context;
use crate::util::anyerror::AnyError;
use crate::util::environment;
use std::path::PathBuf;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Rtlcurate {
    version: bool,
    color: Option<ColorMode>,
    config: Option<PathBuf>,
    command: Option<RtlcurateSubcommand>,
}

impl Command for Rtlcurate {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(rtlcurate::HELP))?;
        Ok(Rtlcurate {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            config: cli.get(Arg::option("config").value("file"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // need to set this coloring mode ASAP
        if let Some(mode) = &self.color {
            mode.apply();
        }
        // prioritize version information
        if self.version == true {
            println!("rtlcurate {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            let context = Context::new().config(self.config, environment::RTLCURATE_CONFIG);
            c.execute(&context)
        // if no command is given then print default help
        } else {
            Ok(println!("{}", rtlcurate::HELP))
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn apply(&self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => colored::control::unset_override(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(AnyError(format!(
                "unknown coloring mode '{}'; expected auto, always, or never",
                s
            ))),
        }
    }
}

use crate::commands::curate::Curate;
use crate::commands::help;
use crate::commands::init::Init;
use crate::commands::integrate::Integrate;
use crate::commands::list::List;
use crate::commands::rename::Rename;

#[derive(Debug, PartialEq)]
enum RtlcurateSubcommand {
    Help(help::Help),
    Init(Init),
    List(List),
    Curate(Curate),
    Integrate(Integrate),
    Rename(Rename),
}

impl Subcommand<Context> for RtlcurateSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["help", "init", "list", "curate", "integrate", "rename"])?
            .as_ref()
        {
            "help" => Ok(RtlcurateSubcommand::Help(help::Help::interpret(cli)?)),
            "init" => Ok(RtlcurateSubcommand::Init(Init::interpret(cli)?)),
            "list" => Ok(RtlcurateSubcommand::List(List::interpret(cli)?)),
            "curate" => Ok(RtlcurateSubcommand::Curate(Curate::interpret(cli)?)),
            "integrate" => Ok(RtlcurateSubcommand::Integrate(Integrate::interpret(cli)?)),
            "rename" => Ok(RtlcurateSubcommand::Rename(Rename::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            RtlcurateSubcommand::Help(c) => c.execute(&()),
            RtlcurateSubcommand::Init(c) => c.execute(context),
            RtlcurateSubcommand::List(c) => c.execute(context),
            RtlcurateSubcommand::Curate(c) => c.execute(context),
            RtlcurateSubcommand::Integrate(c) => c.execute(context),
            RtlcurateSubcommand::Rename(c) => c.execute(&()),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
