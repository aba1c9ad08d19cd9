//! YAML loader for the defaults source
//!
//! The file mirrors the form fields, with dependents given as parallel lists:
//!
//! ```yaml
//! current_savings: { Stocks: 500000, EPF: 600000 }
//! monthly_income: 200000
//! monthly_breakdown:
//!   - { category: Retirement Savings, amount: 30000 }
//! personal_info:
//!   current_age: 32
//!   retirement_age: 60
//!   num_kids: 1
//!   kids_ages: [3]
//!   education_start_ages: [18]
//! default_expected_return: 12
//! ```

use super::Assumptions;
use crate::error::{PlannerError, Result};
use crate::profile::{BreakdownItem, Dependent, PersonalInfo, SessionInput};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default location of the defaults file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Raw file layout
#[derive(Debug, Deserialize)]
struct RawConfig {
    current_savings: IndexMap<String, f64>,
    monthly_income: f64,
    monthly_breakdown: Vec<BreakdownItem>,
    #[serde(default)]
    personal_info: Option<RawPersonalInfo>,
    default_expected_return: f64,
}

#[derive(Debug, Deserialize)]
struct RawPersonalInfo {
    current_age: u32,
    retirement_age: u32,
    #[serde(default)]
    num_kids: usize,
    #[serde(default)]
    kids_ages: Vec<u32>,
    #[serde(default)]
    education_start_ages: Vec<u32>,
}

impl RawPersonalInfo {
    /// Zip the parallel lists; short lists fall back to default dependents
    fn to_personal_info(&self) -> PersonalInfo {
        let dependents = (0..self.num_kids)
            .map(|i| {
                let fallback = Dependent::default();
                Dependent {
                    age: self.kids_ages.get(i).copied().unwrap_or(fallback.age),
                    education_start_age: self
                        .education_start_ages
                        .get(i)
                        .copied()
                        .unwrap_or(fallback.education_start_age),
                }
            })
            .collect();

        PersonalInfo {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            dependents,
        }
    }
}

impl RawConfig {
    fn into_assumptions(self) -> Result<Assumptions> {
        if !self.default_expected_return.is_finite() || self.default_expected_return < 0.0 {
            return Err(PlannerError::invalid(
                "default_expected_return",
                format!("{} is not a valid percentage", self.default_expected_return),
            ));
        }

        let personal_info = self
            .personal_info
            .as_ref()
            .map(RawPersonalInfo::to_personal_info)
            .unwrap_or_default();

        Ok(Assumptions {
            sample: SessionInput {
                personal_info,
                monthly_income: self.monthly_income,
                monthly_breakdown: self.monthly_breakdown,
                current_savings: self.current_savings,
                annual_savings_increase: 0.0,
            },
            default_expected_return_pct: self.default_expected_return,
        })
    }
}

/// Parse the defaults source from YAML text
pub fn parse_assumptions(yaml: &str) -> Result<Assumptions> {
    let raw: RawConfig = serde_yaml::from_str(yaml)?;
    raw.into_assumptions()
}

/// Load the defaults source from a file
pub fn load_assumptions(path: &Path) -> Result<Assumptions> {
    let file = File::open(path).map_err(|e| PlannerError::io(path, e))?;
    let raw: RawConfig = serde_yaml::from_reader(BufReader::new(file))?;
    let assumptions = raw.into_assumptions()?;

    log::info!(
        "loaded defaults from {} (expected return {}%)",
        path.display(),
        assumptions.default_expected_return_pct
    );
    Ok(assumptions)
}
