//! Battery reporter over `/sys/class/power_supply`
//!
//! State of charge comes straight from the `capacity` attribute. State of
//! health is the current full-charge energy as a percentage of the design
//! full-charge energy.

use crate::constants::DEFAULT_POWER_SUPPLY_DIR;
use crate::procfs::read_int_file;
use hrm_domain::constants::{
    BATTERY_CAPACITY_ATTR, BATTERY_ENERGY_FULL_ATTR, BATTERY_ENERGY_FULL_DESIGN_ATTR,
};
use hrm_domain::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reports charge and health of a named battery
#[derive(Debug, Clone)]
pub struct BatteryReporter {
    power_supply_dir: PathBuf,
}

impl BatteryReporter {
    /// Reporter looking up batteries under the given power-supply directory
    pub fn new<P: AsRef<Path>>(power_supply_dir: P) -> Self {
        Self {
            power_supply_dir: power_supply_dir.as_ref().to_path_buf(),
        }
    }

    /// State of charge in percent
    pub fn state_of_charge(&self, name: &str) -> Result<u32> {
        let capacity = self.read_attribute(name, BATTERY_CAPACITY_ATTR)?;
        let soc = to_percent(capacity, name, BATTERY_CAPACITY_ATTR)?;
        debug!(battery = name, soc, "Read battery state of charge");
        Ok(soc)
    }

    /// State of health in percent, truncated
    pub fn state_of_health(&self, name: &str) -> Result<u32> {
        let energy_full = self.read_attribute(name, BATTERY_ENERGY_FULL_ATTR)?;
        let energy_full_design = self.read_attribute(name, BATTERY_ENERGY_FULL_DESIGN_ATTR)?;

        if energy_full_design == 0 {
            return Err(Error::zero_divisor(format!(
                "{BATTERY_ENERGY_FULL_DESIGN_ATTR} of battery {name}"
            )));
        }

        let soh = u128::from(energy_full) * 100 / u128::from(energy_full_design);
        let soh = to_percent(soh, name, "state of health")?;
        debug!(
            battery = name,
            energy_full, energy_full_design, soh, "Calculated battery state of health"
        );
        Ok(soh)
    }

    fn read_attribute(&self, name: &str, attribute: &str) -> Result<u64> {
        let dir = self.battery_dir(name)?;
        read_int_file(&dir.join(attribute)).map_err(|e| match e {
            Error::Io { message, source } => Error::Io {
                message: format!("battery {name}: {attribute}: {message}"),
                source,
            },
            Error::Parse { message } => Error::Parse {
                message: format!("battery {name}: {attribute}: {message}"),
            },
            other => other,
        })
    }

    fn battery_dir(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(Error::invalid_argument("battery name cannot be empty"));
        }
        if name == "." || name == ".." || name.contains('/') {
            return Err(Error::invalid_argument(format!(
                "invalid battery name: {name}"
            )));
        }
        Ok(self.power_supply_dir.join(name))
    }
}

impl Default for BatteryReporter {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_SUPPLY_DIR)
    }
}

fn to_percent<V>(value: V, name: &str, what: &str) -> Result<u32>
where
    V: TryInto<u32> + Copy + std::fmt::Display,
{
    value
        .try_into()
        .map_err(|_| Error::parse(format!("battery {name}: {what} out of range: {value}")))
}
