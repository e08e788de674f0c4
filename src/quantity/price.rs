use crate::quantity::{cost::Pesos, volume::CubicMetres};

quantity!(
    /// Marginal price of one cubic metre.
    PesosPerCubicMetre, via: f64, suffix: "PHP/m³", precision: 2
);

implement_mul!(PesosPerCubicMetre, CubicMetres, Pesos);
implement_div!(Pesos, PesosPerCubicMetre, CubicMetres);
