use crate::quantity::{discount::Discount, usage::Usage};

quantity!(Cost, precision: 2);

quantity!(
    /// Cost per one unit of [`Usage`].
    UnitCost
);

implement_mul!(UnitCost, Usage, Cost);

impl Cost {
    pub fn discounted(self, discount: Discount) -> Self {
        Self(self.0 * discount.factor())
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && self != Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul() {
        assert_abs_diff_eq!((UnitCost::from(0.5) * Usage::from(100.0)).0, 50.0);
        assert_abs_diff_eq!((Usage::from(50.0) * UnitCost::from(0.2)).0, 10.0);
    }

    #[test]
    fn test_discounted() {
        assert_abs_diff_eq!(Cost::from(50.0).discounted(Discount::from(0.1)).0, 45.0);
        assert_abs_diff_eq!(Cost::from(50.0).discounted(Discount::from(-0.5)).0, 75.0);
        assert_abs_diff_eq!(Cost::from(50.0).discounted(Discount::from(1.5)).0, -25.0);
    }

    #[test]
    fn test_is_negative() {
        assert!(Cost::from(-0.01).is_negative());
        assert!(!Cost::from(-0.0).is_negative());
        assert!(!Cost::ZERO.is_negative());
    }
}
