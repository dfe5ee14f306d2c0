//! Per-file orchestration driving the full conversion.
//!
//! For one input image the pipeline derives the output directory from the
//! file's base name, decodes the image, runs edge detection and contour
//! tracing, persists the edge map for inspection, and then runs the three
//! emitters in order (SVG, DXF, network). Each output writer's failure is
//! caught, logged and recorded without affecting its siblings; only a
//! decode failure propagates (it aborts the remaining batch, see
//! `batch::run_batch`).
//!
//! ```no_run
//! use matsim_netgen::config::GeneratorParams;
//! use matsim_netgen::pipeline::Pipeline;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), matsim_netgen::Error> {
//! let pipeline = Pipeline::new(GeneratorParams::default());
//! let report = pipeline.process_file(Path::new("roads.png"), Path::new("."))?;
//! println!("{} contours in {:.1} ms", report.contour_count, report.timings.total_ms);
//! # Ok(())
//! # }
//! ```
use crate::batch::split_stem;
use crate::config::GeneratorParams;
use crate::contours;
use crate::diagnostics::{EmitterOutcome, FileReport, TimingBreakdown};
use crate::edges;
use crate::emit::network::NETWORK_FILE_NAME;
use crate::emit::{write_dxf, write_network, write_svg};
use crate::error::Error;
use crate::image::{load_image, save_gray_u8};
use log::{debug, error, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Orchestrator for one parameter set, reusable across files.
pub struct Pipeline {
    params: GeneratorParams,
}

impl Pipeline {
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Process one input image, writing all outputs into
    /// `<out_root>/<base name>/`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decode` when the input cannot be decoded; every
    /// other failure is recorded in the report instead.
    pub fn process_file(&self, input: &Path, out_root: &Path) -> Result<FileReport, Error> {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (base, ext) = split_stem(&file_name);
        debug!("pipeline::process_file {} -> {}/", file_name, base);
        let total_start = Instant::now();

        let out_dir = out_root.join(&base);
        let dir_created = match fs::create_dir(&out_dir) {
            Ok(()) => true,
            Err(source) => {
                let err = Error::CreateDir {
                    path: out_dir.clone(),
                    source,
                };
                warn!("{err}; writing into the existing directory");
                false
            }
        };

        let decode_start = Instant::now();
        let img = load_image(input)?;
        let decode_ms = elapsed_ms(decode_start);

        let edges_start = Instant::now();
        let edge_map = edges::detect(&img, &self.params.edge);
        let edges_ms = elapsed_ms(edges_start);

        let trace_start = Instant::now();
        let traced = contours::trace(&edge_map, &self.params.trace);
        let trace_ms = elapsed_ms(trace_start);

        let point_count = traced.point_count();
        let link_count: usize = traced
            .contours
            .iter()
            .map(|c| c.len().saturating_sub(1))
            .sum();

        let mut outputs = Vec::with_capacity(4);
        let mut timings = TimingBreakdown::default();
        timings.push("decode", decode_ms);
        timings.push("edges", edges_ms);
        timings.push("trace", trace_ms);

        // Output order: edge map first, then SVG, DXF, network.
        let stage_start = Instant::now();
        let processed_path = out_dir.join(format!("{base}Processed.{ext}"));
        record(
            "edge_map",
            save_gray_u8(&edge_map, &processed_path),
            &mut outputs,
        );
        timings.push("edge_map", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let svg_path = out_dir.join(format!("{base}.svg"));
        record(
            "svg",
            write_svg(&svg_path, traced.width, traced.height, &traced.contours),
            &mut outputs,
        );
        timings.push("svg", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let dxf_path = out_dir.join(format!("{base}.dxf"));
        record("dxf", write_dxf(&dxf_path, &traced.contours), &mut outputs);
        timings.push("dxf", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let network_path = out_dir.join(NETWORK_FILE_NAME);
        record(
            "network",
            write_network(&network_path, &traced.contours, &self.params.network),
            &mut outputs,
        );
        timings.push("network", elapsed_ms(stage_start));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "pipeline::process_file done {} contours={} points={} total_ms={:.3}",
            file_name,
            traced.contours.len(),
            point_count,
            timings.total_ms
        );

        Ok(FileReport {
            input: file_name,
            width: traced.width,
            height: traced.height,
            dir_created,
            contour_count: traced.contours.len(),
            point_count,
            node_count: point_count,
            link_count,
            timings,
            outputs,
        })
    }
}

fn record(label: &str, result: Result<(), Error>, outputs: &mut Vec<EmitterOutcome>) {
    match result {
        Ok(()) => outputs.push(EmitterOutcome::success(label)),
        Err(err) => {
            error!("{err}");
            outputs.push(EmitterOutcome::failure(label, err.to_string()));
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
