use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{calculator::BillCalculator, line_item::LineItem, utility::UtilityRecord},
    quantity::{cost::Cost, discount::Discount},
};

/// Computed bill. Derived from the line items on demand and never kept around.
#[must_use]
#[derive(Debug, Serialize)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total: Cost,

    /// Sum of the per-item discounted costs.
    pub discounted_total: Cost,
}

#[must_use]
#[derive(Debug, Serialize)]
pub struct BillLine {
    pub utility: UtilityRecord,
    pub discount: Discount,
    pub cost: Cost,
    pub discounted_cost: Cost,
}

impl Bill {
    pub fn compute<C: BillCalculator>(items: &[LineItem], calculator: &C) -> Self {
        let lines = items
            .iter()
            .map(|item| BillLine {
                utility: item.utility.clone(),
                discount: item.discount,
                cost: item.utility.cost(),
                discounted_cost: item.utility.cost_with_discount(item.discount),
            })
            .collect_vec();
        let discounted_total = lines
            .iter()
            .map(|line| line.discounted_cost)
            .fold(Cost::ZERO, |total, cost| total + cost);
        Self { total: calculator.total_bill(items), discounted_total, lines }
    }

    #[must_use]
    pub fn has_discounts(&self) -> bool {
        self.lines.iter().any(|line| !line.discount.is_zero())
    }
}
