//! Capability report for the current test host.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::probe::{is_compatible_driver, DriverProbe, GstTools, ToolProbe};
use crate::spec::Spec;

/// What the host offers the gst-msdk suite.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityReport {
    /// Both gst-launch-1.0 and gst-inspect-1.0 are installed
    pub gst: bool,
    /// Active driver name, empty if unknown
    pub driver: String,
    /// Whether `driver` is the one the suite expects
    pub compatible_driver: bool,
    /// Availability of each requested element
    pub elements: BTreeMap<String, bool>,
    /// Composed spec for the configured context, if any
    pub spec: Option<Spec>,
    /// Report creation time (RFC 3339)
    pub timestamp: String,
}

impl CapabilityReport {
    /// Probes the host through `tools` and `driver`.
    ///
    /// Element probes are skipped when the GStreamer tools are missing.
    pub fn collect<T, D>(
        tools: &GstTools<T>,
        driver: &D,
        expected_driver: &str,
        elements: &[String],
    ) -> Self
    where
        T: ToolProbe,
        D: DriverProbe + ?Sized,
    {
        let gst = tools.have_gst();
        let elements = elements
            .iter()
            .map(|name| {
                let available = gst && tools.have_gst_element(name).available;
                (name.clone(), available)
            })
            .collect();

        Self {
            gst,
            driver: driver.driver_name(),
            compatible_driver: is_compatible_driver(driver, expected_driver),
            elements,
            spec: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attaches a composed spec.
    pub fn with_spec(mut self, spec: Spec) -> Self {
        self.spec = Some(spec);
        self
    }
}
