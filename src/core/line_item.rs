use std::str::FromStr;

use crate::{core::utility::UtilityRecord, prelude::*, quantity::discount::Discount};

/// Utility record together with the discount entered for it.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub utility: UtilityRecord,
    pub discount: Discount,
}

impl LineItem {
    pub const fn new(utility: UtilityRecord, discount: Discount) -> Self {
        Self { utility, discount }
    }

    /// Parse the item from raw text fields. Blank discount means no discount.
    pub fn try_parse(name: &str, unit_cost: &str, usage: &str, discount: &str) -> Result<Self> {
        let utility = UtilityRecord::try_parse(name, unit_cost, usage)?;
        let discount = match discount.trim() {
            "" => Discount::ZERO,
            discount => discount
                .parse::<Discount>()
                .with_context(|| format!("invalid discount: `{discount}`"))?,
        };
        Ok(Self { utility, discount })
    }
}

impl AsRef<UtilityRecord> for LineItem {
    fn as_ref(&self) -> &UtilityRecord {
        &self.utility
    }
}

/// Parses `NAME:UNIT_COST:USAGE[:DISCOUNT]`.
impl FromStr for LineItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        match fields.as_slice() {
            [name, unit_cost, usage] => Self::try_parse(name, unit_cost, usage, ""),
            [name, unit_cost, usage, discount] => {
                Self::try_parse(name, unit_cost, usage, discount)
            }
            _ => bail!("expected `NAME:UNIT_COST:USAGE[:DISCOUNT]`, got `{s}`"),
        }
    }
}
