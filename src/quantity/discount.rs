quantity!(
    /// Fraction taken off a single item's cost: `0.1` is 10%.
    ///
    /// Not clamped: a negative discount is a surcharge, and anything above one turns the cost negative.
    Discount, precision: 2
);

impl Discount {
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Multiplier to apply to the undiscounted cost.
    pub const fn factor(self) -> f64 {
        1.0 - self.0
    }
}
