//! gst-msdk FITS support
//!
//! Prints a JSON capability report for the current test host: GStreamer
//! tool and element availability, the active VA driver, and optionally the
//! composed spec for one test context.
//!
//! Element names are taken from the command line:
//! `gst-msdk-fits msdkh264enc msdkvpp`

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gst_msdk_fits::models::CapabilityReport;
use gst_msdk_fits::probe::{EnvDriverProbe, GstTools, ShellProbe};
use gst_msdk_fits::{Config, JsonSpecStore, SpecComposer};

/// Main entry point for the capability report.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Probe gst tools, requested elements and the VA driver
/// 4. Compose the configured spec context, if a spec document is set
/// 5. Print the report as JSON on stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gst_msdk_fits=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    config.validate()?;
    info!(
        "Configuration loaded: component={}, compatible_driver={}, shell={}",
        config.component, config.compatible_driver, config.shell
    );

    let elements: Vec<String> = std::env::args().skip(1).collect();
    let tools = GstTools::new(ShellProbe::new(config.shell.clone()));
    let driver = EnvDriverProbe::new(config.driver_env.clone());

    let mut report =
        CapabilityReport::collect(&tools, &driver, &config.compatible_driver, &elements);
    if !report.gst {
        warn!("GStreamer tools not found; element probes skipped");
    }

    if let Some(path) = &config.spec_path {
        let store = JsonSpecStore::from_path(path)
            .with_context(|| format!("loading spec document {}", path.display()))?;
        let composer = SpecComposer::with_component(&store, config.component.clone());
        let spec = composer.compose(&config.context_segments());
        info!(
            "Composed spec for context {:?}: {} entries",
            config.context,
            spec.len()
        );
        report = report.with_spec(spec);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
