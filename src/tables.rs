use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::bill::Bill, quantity::cost::Cost};

#[must_use]
pub fn build_bill_table(bill: &Bill, currency: &str) -> Table {
    let has_discounts = bill.has_discounts();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();

    let mut header = vec!["Utility", "Unit cost", "Usage", "Cost"];
    if has_discounts {
        header.extend(["Discount", "Payable"]);
    }
    table.set_header(header);

    for line in &bill.lines {
        let mut row = vec![
            Cell::new(line.utility.name()),
            Cell::new(line.utility.unit_cost()).set_alignment(CellAlignment::Right),
            Cell::new(line.utility.usage()).set_alignment(CellAlignment::Right),
            cost_cell(line.cost, currency),
        ];
        if has_discounts {
            row.push(
                Cell::new(format!("{:.0}%", line.discount.0 * 100.0))
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Dim),
            );
            row.push(cost_cell(line.discounted_cost, currency));
        }
        table.add_row(row);
    }

    let mut footer = vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        cost_cell(bill.total, currency).add_attribute(Attribute::Bold),
    ];
    if has_discounts {
        footer.push(Cell::new(""));
        footer.push(cost_cell(bill.discounted_total, currency).add_attribute(Attribute::Bold));
    }
    table.add_row(footer);

    table
}

fn cost_cell(cost: Cost, currency: &str) -> Cell {
    Cell::new(format!("{currency} {cost}"))
        .set_alignment(CellAlignment::Right)
        .fg(if cost.is_negative() { Color::Red } else { Color::Reset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calculator::LinearBillCalculator, line_item::LineItem};

    fn bill(items: &[&str]) -> Bill {
        let items: Vec<LineItem> =
            items.iter().map(|item| item.parse::<LineItem>().unwrap()).collect();
        Bill::compute(&items, &LinearBillCalculator)
    }

    #[test]
    fn test_build_bill_table() {
        let rendered = build_bill_table(&bill(&["Electricity:0.5:100", "Water:0.2:50"]), "AED")
            .force_no_tty()
            .to_string();
        assert!(rendered.contains("Electricity"));
        assert!(rendered.contains("AED 50.00"));
        assert!(rendered.contains("Water"));
        assert!(rendered.contains("AED 10.00"));
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("AED 60.00"));
        assert!(!rendered.contains("Discount"));
    }

    #[test]
    fn test_build_bill_table_with_discounts() {
        let rendered = build_bill_table(&bill(&["Electricity:0.5:100:0.1"]), "د.إ")
            .force_no_tty()
            .to_string();
        assert!(rendered.contains("Discount"));
        assert!(rendered.contains("10%"));
        assert!(rendered.contains("د.إ 45.00"));
    }

    #[test]
    fn test_build_bill_table_keeps_fractional_inputs() {
        let rendered = build_bill_table(&bill(&["Water:0.2:12.5", "Gas:0.0004:1000"]), "AED")
            .force_no_tty()
            .to_string();
        assert!(rendered.contains("12.5"));
        assert!(rendered.contains("AED 2.50"));
        assert!(rendered.contains("0.0004"));
        assert!(rendered.contains("AED 0.40"));
    }

    #[test]
    fn test_build_empty_bill_table() {
        let rendered = build_bill_table(&bill(&[]), "AED").force_no_tty().to_string();
        assert!(rendered.contains("AED 0.00"));
    }
}
