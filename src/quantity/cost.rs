quantity!(
    /// Philippine peso amount.
    Pesos, via: f64, suffix: "PHP", precision: 2
);

impl Pesos {
    /// Round the amount to whole centavos.
    pub fn round_to_centavos(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
