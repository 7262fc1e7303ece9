use std::fmt::{Debug, Display, Formatter};

use crate::quantity::rate::SekPerKilowattHour;

/// Renders a SEK/kWh rate the way Swedish price listings do: öre with two
/// decimals and a decimal comma.
pub struct FormattedOre(pub SekPerKilowattHour);

impl Debug for FormattedOre {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, formatter)
    }
}

impl Display for FormattedOre {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let ore = (self.0 * 100.0).0;
        formatter.write_str(&format!("{ore:.2}").replace('.', ","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ore_with_decimal_comma() {
        assert_eq!(FormattedOre(SekPerKilowattHour(0.26673)).to_string(), "26,67");
        assert_eq!(FormattedOre(SekPerKilowattHour(1.0)).to_string(), "100,00");
        assert_eq!(FormattedOre(SekPerKilowattHour(-0.015)).to_string(), "-1,50");
    }
}
