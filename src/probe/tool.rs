//! Tool Probe Module
//!
//! Runs shell commands to discover installed GStreamer tools and elements.

use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::DEFAULT_SHELL;

// == Tool Probe ==
/// Reports whether a shell command succeeds.
pub trait ToolProbe {
    fn try_call(&self, command: &str) -> bool;
}

impl<P: ToolProbe + ?Sized> ToolProbe for &P {
    fn try_call(&self, command: &str) -> bool {
        (**self).try_call(command)
    }
}

/// Runs commands through `<shell> -c`, discarding their output.
#[derive(Debug, Clone)]
pub struct ShellProbe {
    shell: String,
}

impl ShellProbe {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellProbe {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ToolProbe for ShellProbe {
    /// True only if the command spawns and exits with status zero.
    fn try_call(&self, command: &str) -> bool {
        match Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => {
                debug!(command, success = status.success(), "probe finished");
                status.success()
            }
            Err(e) => {
                debug!(command, error = %e, "probe could not be spawned");
                false
            }
        }
    }
}

// == Element Availability ==
/// Result of probing for a GStreamer element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementAvailability {
    /// Whether `gst-inspect-1.0` found the element
    pub available: bool,
    /// The element that was probed
    pub element: String,
}

// == Gst Tools ==
/// Memoized GStreamer capability checks over a [`ToolProbe`].
///
/// Each distinct question reaches the probe once for the lifetime of the
/// value.
#[derive(Debug)]
pub struct GstTools<P> {
    probe: P,
    gst: CacheStore<(), bool>,
    elements: CacheStore<String, ElementAvailability>,
}

impl<P: ToolProbe> GstTools<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            gst: CacheStore::new("have_gst"),
            elements: CacheStore::new("have_gst_element"),
        }
    }

    /// True if both `gst-launch-1.0` and `gst-inspect-1.0` are on the PATH.
    pub fn have_gst(&self) -> bool {
        self.gst.get_or_insert_with((), |_| {
            self.probe.try_call("which gst-launch-1.0")
                && self.probe.try_call("which gst-inspect-1.0")
        })
    }

    /// Checks whether `element` is installed.
    pub fn have_gst_element(&self, element: &str) -> ElementAvailability {
        self.elements.get_or_insert_with(element.to_string(), |element| {
            ElementAvailability {
                available: self.probe.try_call(&format!("gst-inspect-1.0 {element}")),
                element: element.clone(),
            }
        })
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }
}

static HOST_TOOLS: Lazy<GstTools<ShellProbe>> = Lazy::new(|| GstTools::new(ShellProbe::default()));

/// [`GstTools::have_gst`] on the current host, memoized for the process.
pub fn have_gst() -> bool {
    HOST_TOOLS.have_gst()
}

/// [`GstTools::have_gst_element`] on the current host, memoized for the process.
pub fn have_gst_element(element: &str) -> ElementAvailability {
    HOST_TOOLS.have_gst_element(element)
}
