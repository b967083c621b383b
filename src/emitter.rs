//! Lifecycle of the metrics-reporting channel.
//!
//! The emitter exists only once initialized and is consumed by
//! [`MetricEmitter::flush_and_shutdown`], so double initialization,
//! record-before-initialize, and record-after-shutdown are
//! unrepresentable states rather than runtime checks.

use crate::core::{AttributedFile, AttributionLabels, CoverageDimension, CoverageStats};
use crate::errors::{Error, Result};
use opentelemetry::metrics::{Histogram, MeterProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_otlp::{MetricExporter, Protocol, WithExportConfig};
use opentelemetry_sdk::metrics::reader::MetricReader;
use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider};
use opentelemetry_sdk::Resource;
use std::time::Duration;

/// Export cadence of the periodic reader.
const EXPORT_INTERVAL: Duration = Duration::from_millis(1000);

/// Meter namespace all coverage instruments live under.
const METER_NAME: &str = "test_coverage";

struct Instruments {
    pct: Histogram<f64>,
    total: Histogram<u64>,
    covered: Histogram<u64>,
}

/// Owns the meter provider and one histogram per coverage measure.
pub struct MetricEmitter {
    provider: SdkMeterProvider,
    instruments: Instruments,
}

impl MetricEmitter {
    /// Open a batching push channel to the OTLP collector. Must be
    /// called exactly once per run, before any recording.
    pub fn initialize(service_name: &str, collector_url: &str) -> Result<Self> {
        let exporter = MetricExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(collector_url)
            .build()
            .map_err(|e| Error::Export(format!("building OTLP exporter: {e}")))?;

        let reader = PeriodicReader::builder(exporter)
            .with_interval(EXPORT_INTERVAL)
            .build();

        Ok(Self::from_reader(service_name, reader))
    }

    /// Wire the emitter over an arbitrary metric reader. Production
    /// goes through [`MetricEmitter::initialize`]; tests inject an
    /// in-memory exporter here.
    pub fn from_reader<R: MetricReader + 'static>(service_name: &str, reader: R) -> Self {
        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();
        let provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_reader(reader)
            .build();

        let meter = provider.meter(METER_NAME);
        let instruments = Instruments {
            pct: meter
                .f64_histogram("test_coverage_percentage")
                .with_description("Code coverage - percentage code covered")
                .build(),
            total: meter
                .u64_histogram("test_coverage_total")
                .with_description("Code coverage - total lines of code")
                .build(),
            covered: meter
                .u64_histogram("test_coverage_covered")
                .with_description("Code coverage - covered lines of code")
                .build(),
        };

        Self {
            provider,
            instruments,
        }
    }

    /// Record every present dimension of one attributed entry. A
    /// missing dimension is logged and skipped; the others still flow.
    pub fn record_file(&self, file: &AttributedFile) {
        for dimension in CoverageDimension::ALL {
            match file.coverage.get(dimension) {
                Some(stats) => self.record(dimension, stats, &file.labels),
                None => log::warn!(
                    "Entry {} carries no {} dimension",
                    file.labels.coverage_path,
                    dimension.as_str()
                ),
            }
        }
    }

    /// Record one dimension as its three measures. Observations are
    /// buffered; delivery happens on the reader's cadence or at flush.
    pub fn record(
        &self,
        dimension: CoverageDimension,
        stats: &CoverageStats,
        labels: &AttributionLabels,
    ) {
        let attributes = observation_attributes(labels, dimension);
        match stats.pct.as_f64() {
            Some(pct) => self.instruments.pct.record(pct, &attributes),
            None => log::warn!(
                "Entry {} reports a non-numeric {} percentage, skipping the measure",
                labels.coverage_path,
                dimension.as_str()
            ),
        }
        self.instruments.total.record(stats.total, &attributes);
        self.instruments.covered.record(stats.covered, &attributes);
    }

    /// Push buffered observations, then release the channel.
    ///
    /// The flush must complete before shutdown starts or the final
    /// batch is lost; both have completed when this returns, so the
    /// process may exit immediately afterwards.
    pub fn flush_and_shutdown(self) -> Result<()> {
        self.provider
            .force_flush()
            .map_err(|e| Error::Export(format!("flushing meter provider: {e}")))?;
        log::info!("Meter provider flushed");

        self.provider
            .shutdown()
            .map_err(|e| Error::Export(format!("shutting down meter provider: {e}")))?;
        log::info!("Meter provider shut down");

        Ok(())
    }
}

/// OTLP attributes carry no null, so an absent application name omits
/// the key entirely.
fn observation_attributes(
    labels: &AttributionLabels,
    dimension: CoverageDimension,
) -> Vec<KeyValue> {
    let mut attributes = vec![
        KeyValue::new("coverage_path", labels.coverage_path.clone()),
        KeyValue::new("owner_team", labels.owner_team.clone()),
        KeyValue::new("coverage_type", dimension.as_str()),
    ];
    if let Some(application_name) = &labels.application_name {
        attributes.push(KeyValue::new("application_name", application_name.clone()));
    }
    attributes
}
