use std::io::{ErrorKind, Write, stdout};

use clap::Parser;
use dialoguer::Input;

use crate::{
    cli::output::OutputArgs,
    core::calculator::{BillCalculator, LinearBillCalculator},
    prelude::*,
    session::Session,
};

#[derive(Parser)]
pub struct SessionArgs {
    #[clap(flatten)]
    output: OutputArgs,
}

impl SessionArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let mut output = stdout().lock();
        run_session(ask_terminal, &mut output, &LinearBillCalculator, &self.output)
    }
}

/// Prompt for the line items until an empty name or end of input, then print the bill.
///
/// `ask` reads one field for the given label, returning [`None`] once the input is over.
/// Typing `clear` for the name drops everything entered so far.
pub fn run_session<A, W, C>(
    mut ask: A,
    output: &mut W,
    calculator: &C,
    output_args: &OutputArgs,
) -> Result
where
    A: FnMut(&str) -> Result<Option<String>>,
    W: Write,
    C: BillCalculator,
{
    let mut session = Session::new();

    loop {
        let Some(name) = ask("Utility name (empty to finish)")? else {
            break;
        };
        match name.trim() {
            "" => break,
            "clear" => {
                session.clear();
                writeln!(output, "Cleared.")?;
                continue;
            }
            _ => {}
        }
        let Some(unit_cost) = ask("Unit cost")? else { break };
        let Some(usage) = ask("Usage")? else { break };
        let Some(discount) = ask("Discount (as decimal, e.g. 0.1 for 10%)")? else { break };

        match session.add(&name, &unit_cost, &usage, &discount) {
            Ok(item) => {
                info!(name = item.utility.name(), cost = %item.utility.cost(), "added");
            }
            Err(error) => {
                warn!("rejected: {error:#}");
                writeln!(output, "Invalid input. Please enter valid numbers: {error:#}")?;
            }
        }
    }

    output_args.write_bill(output, &session.bill(calculator))
}

/// Read one field from the terminal. End of input and interruption end the session.
fn ask_terminal(label: &str) -> Result<Option<String>> {
    match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(error))
            if matches!(error.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted) =>
        {
            Ok(None)
        }
        Err(error) => Err(error).context("failed to read the input"),
    }
}
