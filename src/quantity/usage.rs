quantity!(
    /// Metered quantity consumed: kilowatt-hours, cubic metres, whatever the utility bills by.
    Usage
);
