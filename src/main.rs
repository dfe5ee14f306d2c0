use matsim_netgen::batch::run_batch;
use matsim_netgen::config::{load_params, GeneratorParams};
use matsim_netgen::error::Error;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let root = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    let params = match args.next() {
        Some(config_path) => load_params(Path::new(&config_path))?,
        None => GeneratorParams::default(),
    };

    let summary = run_batch(&root, params)?;

    println!(
        "processed {}/{} files in {:.1} ms",
        summary.files_processed, summary.files_found, summary.total_ms
    );
    for report in &summary.reports {
        let status = if report.all_outputs_ok() { "ok" } else { "with errors" };
        println!(
            "  {}: {} contours, {} nodes, {} links ({status})",
            report.input, report.contour_count, report.node_count, report.link_count
        );
    }
    if summary.aborted {
        println!("batch aborted early; results up to the failing file were kept");
    }

    Ok(())
}
