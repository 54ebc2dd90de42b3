use crate::utils::format::{format_currency, parse_float_prefix, parse_int_prefix};

pub const DEFAULT_UNITS: f64 = 150.0;
pub const DEFAULT_ENERGY_COST: f64 = 0.15;
pub const DEFAULT_MAINTENANCE_COST: f64 = 300.0;

const HOURS_PER_DAY: f64 = 8.0;
const DAYS_PER_YEAR: f64 = 365.0;
const ENERGY_REDUCTION: f64 = 0.4;
const MAINTENANCE_REDUCTION: f64 = 0.67;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiInputs {
    pub units: f64,
    pub energy_cost: f64,
    pub maintenance_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiOutputs {
    pub energy_savings: f64,
    pub maintenance_savings: f64,
    pub total: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS,
            energy_cost: DEFAULT_ENERGY_COST,
            maintenance_cost: DEFAULT_MAINTENANCE_COST,
        }
    }
}

// A zero reading falls back the same way an unparsable one does.
fn non_zero_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

impl RoiInputs {
    /// Builds inputs from the raw slider values.
    pub fn from_raw(units: &str, energy_cost: &str, maintenance_cost: &str) -> Self {
        Self {
            units: non_zero_or(parse_int_prefix(units).map(|v| v as f64), DEFAULT_UNITS),
            energy_cost: non_zero_or(parse_float_prefix(energy_cost), DEFAULT_ENERGY_COST),
            maintenance_cost: non_zero_or(
                parse_int_prefix(maintenance_cost).map(|v| v as f64),
                DEFAULT_MAINTENANCE_COST,
            ),
        }
    }

    pub fn compute(&self) -> RoiOutputs {
        let energy_savings =
            self.units * HOURS_PER_DAY * DAYS_PER_YEAR * ENERGY_REDUCTION * self.energy_cost;
        let maintenance_savings = self.units * self.maintenance_cost * MAINTENANCE_REDUCTION;
        RoiOutputs {
            energy_savings,
            maintenance_savings,
            total: energy_savings + maintenance_savings,
        }
    }
}

/// The three output strings, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiDisplay {
    pub energy_savings: String,
    pub maintenance_savings: String,
    pub total: String,
}

impl From<RoiOutputs> for RoiDisplay {
    fn from(out: RoiOutputs) -> Self {
        Self {
            energy_savings: format_currency(out.energy_savings),
            maintenance_savings: format_currency(out.maintenance_savings),
            total: format_currency(out.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_figures() {
        let display = RoiDisplay::from(RoiInputs::from_raw("150", "0.15", "300").compute());
        assert_eq!(display.energy_savings, "$26,280");
        assert_eq!(display.maintenance_savings, "$30,150");
        assert_eq!(display.total, "$56,430");
    }

    #[test]
    fn unparsable_and_zero_inputs_use_defaults() {
        assert_eq!(RoiInputs::from_raw("", "x", "abc"), RoiInputs::default());
        assert_eq!(RoiInputs::from_raw("0", "0", "0"), RoiInputs::default());
    }

    #[test]
    fn recompute_depends_only_on_current_inputs() {
        let first = RoiInputs::from_raw("500", "0.30", "600").compute();
        let _ = RoiInputs::from_raw("10", "0.05", "100").compute();
        let again = RoiInputs::from_raw("500", "0.30", "600").compute();
        assert_eq!(first, again);
        assert_eq!(RoiDisplay::from(first).total, "$376,200");
    }

    #[test]
    fn integer_controls_truncate() {
        let inputs = RoiInputs::from_raw("150.9", "0.15", "300.5");
        assert_eq!(inputs.units, 150.0);
        assert_eq!(inputs.maintenance_cost, 300.0);
    }
}
