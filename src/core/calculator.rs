use crate::{core::utility::UtilityRecord, quantity::cost::Cost};

/// Strategy to total up a bill.
pub trait BillCalculator {
    fn total_bill<R: AsRef<UtilityRecord>>(&self, records: &[R]) -> Cost;
}

/// Plain sum of the individual costs.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearBillCalculator;

impl BillCalculator for LinearBillCalculator {
    fn total_bill<R: AsRef<UtilityRecord>>(&self, records: &[R]) -> Cost {
        records
            .iter()
            .map(|record| record.as_ref().cost())
            .fold(Cost::ZERO, |total, cost| total + cost)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::quantity::{cost::UnitCost, usage::Usage};

    fn record(name: &str, unit_cost: f64, usage: f64) -> UtilityRecord {
        UtilityRecord::builder()
            .name(name)
            .unit_cost(UnitCost::from(unit_cost))
            .usage(Usage::from(usage))
            .build()
    }

    #[test]
    fn test_empty() {
        let total = LinearBillCalculator.total_bill::<UtilityRecord>(&[]);
        assert_eq!(total, Cost::ZERO);
        assert_eq!(total.to_string(), "0.00");
    }

    #[test]
    fn test_electricity_and_water() {
        let records = [record("Electricity", 0.5, 100.0), record("Water", 0.2, 50.0)];
        assert_abs_diff_eq!(records[0].cost().0, 50.0);
        assert_abs_diff_eq!(records[1].cost().0, 10.0);
        assert_abs_diff_eq!(LinearBillCalculator.total_bill(&records).0, 60.0);
    }

    #[test]
    fn test_duplicates_are_counted_twice() {
        let records = [record("Water", 0.2, 50.0), record("Water", 0.2, 50.0)];
        assert_abs_diff_eq!(LinearBillCalculator.total_bill(&records).0, 20.0);
    }

    #[test]
    fn test_order_independent() {
        let records = [
            record("Electricity", 0.31, 417.0),
            record("Water", 1.7, 12.5),
            record("Gas", 0.93, 88.1),
            record("Refund", -0.5, 3.0),
        ];
        let expected = LinearBillCalculator.total_bill(&records).0;
        for permutation in records.iter().permutations(records.len()) {
            let permutation = permutation.into_iter().cloned().collect_vec();
            assert_abs_diff_eq!(
                LinearBillCalculator.total_bill(&permutation).0,
                expected,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_generic_caller() {
        fn total<C: BillCalculator>(calculator: &C, records: &[UtilityRecord]) -> Cost {
            calculator.total_bill(records)
        }
        assert_abs_diff_eq!(total(&LinearBillCalculator, &[record("Gas", 2.0, 3.0)]).0, 6.0);
    }
}
