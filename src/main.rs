#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod session;
mod sheet;
mod tables;

use std::io::stderr;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    Args::parse().command.run()?;

    info!("done!");
    Ok(())
}
