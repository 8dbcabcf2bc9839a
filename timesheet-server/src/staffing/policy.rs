use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

use super::StaffingError;

/// What to do when a staffing change would leave project cost below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeCostPolicy {
    /// Cost is a running ledger and may dip below zero
    #[default]
    Allow,
    /// Fail the operation with `StaffingError::NegativeCost`
    Reject,
}

impl NegativeCostPolicy {
    pub fn check(self, new_cost: Decimal) -> Result<(), StaffingError> {
        match self {
            NegativeCostPolicy::Reject if new_cost < Decimal::ZERO => {
                Err(StaffingError::NegativeCost(new_cost))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for NegativeCostPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(NegativeCostPolicy::Allow),
            "reject" => Ok(NegativeCostPolicy::Reject),
            other => Err(format!(
                "invalid negative cost policy '{other}' (expected 'allow' or 'reject')"
            )),
        }
    }
}

impl fmt::Display for NegativeCostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NegativeCostPolicy::Allow => "allow",
            NegativeCostPolicy::Reject => "reject",
        })
    }
}

/// Staffing service settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingPolicy {
    pub negative_cost: NegativeCostPolicy,
    /// Upper bound on one staffing transaction, lock waits included
    pub tx_timeout: Duration,
}

impl Default for StaffingPolicy {
    fn default() -> Self {
        Self {
            negative_cost: NegativeCostPolicy::default(),
            tx_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("allow".parse(), Ok(NegativeCostPolicy::Allow));
        assert_eq!(" Reject ".parse(), Ok(NegativeCostPolicy::Reject));
        assert!("clamp".parse::<NegativeCostPolicy>().is_err());
        assert_eq!(NegativeCostPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_reject_only_below_zero() {
        let reject = NegativeCostPolicy::Reject;
        assert!(reject.check(Decimal::ZERO).is_ok());
        assert!(reject.check(Decimal::new(1, 2)).is_ok());
        assert!(matches!(
            reject.check(Decimal::new(-1, 2)),
            Err(StaffingError::NegativeCost(_))
        ));
        assert!(NegativeCostPolicy::Allow.check(Decimal::new(-100, 0)).is_ok());
    }
}
