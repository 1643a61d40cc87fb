use std::io::Write;

use clap::{Parser, ValueEnum};

use crate::{core::bill::Bill, prelude::*, tables::build_bill_table};

#[derive(Parser)]
pub struct OutputArgs {
    /// Currency label printed next to the costs.
    #[clap(long, env = "BILL_CURRENCY", default_value = "AED")]
    pub currency: String,

    #[clap(long, env = "BILL_FORMAT", value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Human-readable table.
    Table,

    /// Machine-readable JSON.
    Json,
}

impl OutputArgs {
    pub fn write_bill<W: Write>(&self, output: &mut W, bill: &Bill) -> Result {
        match self.format {
            Format::Table => writeln!(output, "{}", build_bill_table(bill, &self.currency))?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *output, bill)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}
