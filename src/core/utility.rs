use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{
        cost::{Cost, UnitCost},
        discount::Discount,
        usage::Usage,
    },
};

/// One named, metered utility: electricity, water, and alike.
///
/// Fields are fixed at construction. Negative or non-finite numbers are accepted as is,
/// and flow through the arithmetic unchanged.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize)]
pub struct UtilityRecord {
    #[builder(into)]
    name: String,

    unit_cost: UnitCost,
    usage: Usage,
}

impl UtilityRecord {
    /// Build the record from raw text fields, as typed by a user.
    ///
    /// Both numbers must parse, otherwise nothing is constructed.
    pub fn try_parse(name: &str, unit_cost: &str, usage: &str) -> Result<Self> {
        let unit_cost = unit_cost
            .trim()
            .parse::<UnitCost>()
            .with_context(|| format!("invalid unit cost: `{unit_cost}`"))?;
        let usage =
            usage.trim().parse::<Usage>().with_context(|| format!("invalid usage: `{usage}`"))?;
        Ok(Self { name: name.trim().to_owned(), unit_cost, usage })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn unit_cost(&self) -> UnitCost {
        self.unit_cost
    }

    pub const fn usage(&self) -> Usage {
        self.usage
    }

    pub fn cost(&self) -> Cost {
        self.unit_cost * self.usage
    }

    pub fn cost_with_discount(&self, discount: Discount) -> Cost {
        self.cost().discounted(discount)
    }
}

impl AsRef<Self> for UtilityRecord {
    fn as_ref(&self) -> &Self {
        self
    }
}
