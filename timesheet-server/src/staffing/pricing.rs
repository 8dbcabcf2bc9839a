//! Pay-rate selection by project nation

/// Nation value that selects the Singapore rate column
pub const SINGAPORE: &str = "Singapore";

/// Which of a role's two pay-rate columns prices a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRegion {
    Singapore,
    /// Every nation other than Singapore
    Vietnam,
}

impl RateRegion {
    /// Exact, case-sensitive match on "Singapore"; anything else is Vietnam
    pub fn of(nation: &str) -> Self {
        if nation == SINGAPORE {
            RateRegion::Singapore
        } else {
            RateRegion::Vietnam
        }
    }

    pub fn select<T>(self, pay_rate_sg: T, pay_rate_vn: T) -> T {
        match self {
            RateRegion::Singapore => pay_rate_sg,
            RateRegion::Vietnam => pay_rate_vn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singapore_selects_sg_rate() {
        assert_eq!(RateRegion::of("Singapore"), RateRegion::Singapore);
        assert_eq!(RateRegion::of("Singapore").select(150, 100), 150);
    }

    #[test]
    fn test_other_nations_select_vn_rate() {
        for nation in ["Vietnam", "Malaysia", "", "singapore", "Singapore "] {
            assert_eq!(RateRegion::of(nation), RateRegion::Vietnam, "{nation:?}");
        }
        assert_eq!(RateRegion::of("Vietnam").select(150, 100), 100);
    }
}
