mod output;
mod session;
mod total;

use clap::{Parser, Subcommand};

use crate::{
    cli::{session::SessionArgs, total::TotalArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the bill for the line items given on the command line or in a sheet.
    #[clap(name = "total")]
    Total(Box<TotalArgs>),

    /// Enter the line items one by one and get the bill at the end.
    #[clap(name = "session")]
    Session(Box<SessionArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Total(args) => args.run(),
            Self::Session(args) => args.run(),
        }
    }
}
