//! Holiday jurisdiction type.

/// A supported holiday jurisdiction.
///
/// The built-in reference tables cover Germany and Austria; the application
/// default is Austria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Jurisdiction {
    /// Germany (`DE`).
    Germany,
    /// Austria (`AT`).
    #[default]
    Austria,
}

impl Jurisdiction {
    /// ISO 3166-1 alpha-2 code (`"DE"` / `"AT"`).
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Germany => "DE",
            Jurisdiction::Austria => "AT",
        }
    }

    /// German display name.
    pub fn name_de(&self) -> &'static str {
        match self {
            Jurisdiction::Germany => "Deutschland",
            Jurisdiction::Austria => "Österreich",
        }
    }

    /// Parse an ISO code (case-insensitive).  Returns `None` for anything
    /// other than `DE` or `AT`.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("DE") {
            Some(Jurisdiction::Germany)
        } else if code.eq_ignore_ascii_case("AT") {
            Some(Jurisdiction::Austria)
        } else {
            None
        }
    }

    /// The other supported jurisdiction (the DE/AT toggle).
    pub fn toggled(&self) -> Self {
        match self {
            Jurisdiction::Germany => Jurisdiction::Austria,
            Jurisdiction::Austria => Jurisdiction::Germany,
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
