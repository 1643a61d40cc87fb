use std::{io::stdout, path::PathBuf};

use clap::Parser;

use crate::{
    cli::output::OutputArgs,
    core::{bill::Bill, calculator::LinearBillCalculator, line_item::LineItem},
    prelude::*,
    session::Session,
    sheet::Sheet,
};

#[derive(Parser)]
pub struct TotalArgs {
    /// Line item as `NAME:UNIT_COST:USAGE[:DISCOUNT]`, for example `Electricity:0.5:100:0.1`.
    #[clap(long = "item", short = 'i')]
    items: Vec<LineItem>,

    /// TOML sheet with the line items. Its items go before the ones given with `--item`.
    #[clap(long, env = "BILL_SHEET")]
    sheet: Option<PathBuf>,

    #[clap(flatten)]
    output: OutputArgs,
}

impl TotalArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let bill = self.bill()?;
        info!(n_items = bill.lines.len(), total = %bill.total, "computed the bill");
        self.output.write_bill(&mut stdout().lock(), &bill)
    }

    /// Sheet items first, then `--item` values, each in their order.
    pub fn bill(&self) -> Result<Bill> {
        let mut session = Session::new();
        if let Some(path) = &self.sheet {
            session.extend(Sheet::read_from(path)?.into_line_items());
            info!(path = %path.display(), n_items = session.len(), "read the sheet");
        }
        session.extend(self.items.iter().cloned());
        if session.is_empty() {
            warn!("no line items given, the bill is empty");
        }
        Ok(session.bill(&LinearBillCalculator))
    }
}
