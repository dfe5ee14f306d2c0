//! Run diagnostics: stage timings, per-file reports, batch summary.
use serde::Serialize;

/// Timing entry describing a single stage of the per-file pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one processed file.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Result of one output writer (edge-map persistence or an emitter).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitterOutcome {
    pub label: String,
    pub ok: bool,
    pub error: Option<String>,
}

impl EmitterOutcome {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ok: true,
            error: None,
        }
    }

    pub fn failure(label: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Everything the orchestrator learned while processing one input file.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub input: String,
    pub width: usize,
    pub height: usize,
    pub dir_created: bool,
    pub contour_count: usize,
    pub point_count: usize,
    pub node_count: usize,
    pub link_count: usize,
    pub timings: TimingBreakdown,
    pub outputs: Vec<EmitterOutcome>,
}

impl FileReport {
    /// Whether every output of this file was written successfully.
    pub fn all_outputs_ok(&self) -> bool {
        self.outputs.iter().all(|o| o.ok)
    }
}

/// Batch-level summary printed at the end of a run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub aborted: bool,
    pub total_ms: f64,
    pub reports: Vec<FileReport>,
}
