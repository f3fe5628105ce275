//! Host Probes
//!
//! Checks the test host for what the gst-msdk suite needs: the GStreamer
//! command-line tools, individual elements, and a compatible VA driver.
//! Probe results that cost a process spawn are memoized.

mod driver;
mod tool;

pub use driver::{is_compatible_driver, using_compatible_driver, DriverProbe, EnvDriverProbe};
pub use tool::{have_gst, have_gst_element, ElementAvailability, GstTools, ShellProbe, ToolProbe};
