//! Driver Probe Module
//!
//! Identifies the active VA driver.

use std::env;

use crate::config::{DEFAULT_COMPATIBLE_DRIVER, DEFAULT_DRIVER_ENV};

/// Returns the name of the active media driver.
pub trait DriverProbe {
    fn driver_name(&self) -> String;
}

impl<P: DriverProbe + ?Sized> DriverProbe for &P {
    fn driver_name(&self) -> String {
        (**self).driver_name()
    }
}

/// Reads the driver name from an environment variable, `LIBVA_DRIVER_NAME`
/// by default. An unset variable reads as an empty name.
#[derive(Debug, Clone)]
pub struct EnvDriverProbe {
    var: String,
}

impl EnvDriverProbe {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvDriverProbe {
    fn default() -> Self {
        Self::new(DEFAULT_DRIVER_ENV)
    }
}

impl DriverProbe for EnvDriverProbe {
    fn driver_name(&self) -> String {
        env::var(&self.var).unwrap_or_default()
    }
}

/// True if the probed driver is `iHD`, the one the msdk plugin runs on.
pub fn using_compatible_driver<P: DriverProbe + ?Sized>(probe: &P) -> bool {
    is_compatible_driver(probe, DEFAULT_COMPATIBLE_DRIVER)
}

/// True if the probed driver name equals `expected` exactly.
pub fn is_compatible_driver<P: DriverProbe + ?Sized>(probe: &P, expected: &str) -> bool {
    probe.driver_name() == expected
}
