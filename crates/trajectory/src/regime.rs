/// Flight regime of the projectile. Each variant carries only the state valid in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightRegime {
    Intact,
    /// Broken up; the fragment cloud spreads laterally under aerodynamic loading.
    Fragmented {
        cloud_radius_m: f64,
        spread_rate_m_s: f64,
    },
    /// Descending at a fixed speed until ground contact.
    TerminalVelocity { speed_m_s: f64 },
}

impl FlightRegime {
    /// Fragment cloud immediately after breakup; its cross-section is `multiplier` times the body's.
    pub fn fragment(body_radius_m: f64, multiplier: f64) -> Self {
        FlightRegime::Fragmented {
            cloud_radius_m: body_radius_m * multiplier.sqrt(),
            spread_rate_m_s: 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlightRegime::Intact => "intact",
            FlightRegime::Fragmented { .. } => "fragmented",
            FlightRegime::TerminalVelocity { .. } => "terminal",
        }
    }
}
