quantity!(
    /// Metered water volume.
    CubicMetres, via: f64, suffix: "m³", precision: 2
);
