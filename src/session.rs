use crate::{
    core::{bill::Bill, calculator::BillCalculator, line_item::LineItem},
    prelude::*,
};

/// Line items entered so far, in entry order.
#[must_use]
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<LineItem>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and append an item. Malformed input leaves the session intact.
    pub fn add(
        &mut self,
        name: &str,
        unit_cost: &str,
        usage: &str,
        discount: &str,
    ) -> Result<&LineItem> {
        let item = LineItem::try_parse(name, unit_cost, usage, discount)?;
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn bill<C: BillCalculator>(&self, calculator: &C) -> Bill {
        Bill::compute(&self.items, calculator)
    }
}

impl Extend<LineItem> for Session {
    fn extend<T: IntoIterator<Item = LineItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}
