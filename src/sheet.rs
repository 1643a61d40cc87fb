use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{line_item::LineItem, utility::UtilityRecord},
    prelude::*,
    quantity::{cost::UnitCost, discount::Discount, usage::Usage},
};

/// TOML file with the line items:
///
/// ```toml
/// [[utilities]]
/// name = "Electricity"
/// unit-cost = 0.5
/// usage = 100
/// discount = 0.1
/// ```
#[derive(Deserialize)]
pub struct Sheet {
    #[serde(default)]
    utilities: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Entry {
    name: String,
    unit_cost: UnitCost,
    usage: Usage,

    #[serde(default)]
    discount: Discount,
}

impl Sheet {
    #[instrument(name = "reading the sheet…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn into_line_items(self) -> impl Iterator<Item = LineItem> {
        self.utilities.into_iter().map(LineItem::from)
    }
}

impl From<Entry> for LineItem {
    fn from(entry: Entry) -> Self {
        let utility = UtilityRecord::builder()
            .name(entry.name)
            .unit_cost(entry.unit_cost)
            .usage(entry.usage)
            .build();
        Self::new(utility, entry.discount)
    }
}
