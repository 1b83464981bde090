//! Drives one machining case end to end: load a case file, create stock,
//! apply the feature, export the result and the removed volume as STEP and
//! binary STL.

mod case;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use machining_engine::{EngineError, Session};
use swarf_types::OutputOptions;

use crate::case::SampleCase;

fn check<T>(stage: &str, result: Result<T, EngineError>) -> Result<T, ExitCode> {
    result.map_err(|e| {
        error!(stage, code = e.code().as_i32(), "{e}");
        ExitCode::FAILURE
    })
}

fn run() -> Result<(), ExitCode> {
    let case_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cases").join("box_drill_case.txt"));

    let sample = SampleCase::load(&case_path).map_err(|e| {
        error!(
            path = %case_path.display(),
            code = e.code().as_i32(),
            "failed to load case file: {e}"
        );
        ExitCode::FAILURE
    })?;

    let mut session = Session::truck();
    let stock = check("create_stock", session.create_stock(&sample.stock))?;
    let outcome = check(
        "apply_feature",
        session.apply_feature(stock, &sample.feature),
    )?;

    std::fs::create_dir_all(&sample.output_dir).map_err(|e| {
        error!(dir = %sample.output_dir.display(), "failed to create output dir: {e}");
        ExitCode::FAILURE
    })?;

    let step_options = OutputOptions::step();
    let stl_options = OutputOptions::stl(
        sample.linear_deflection,
        sample.angular_deflection,
        sample.parallel,
    );

    let exports = [
        (outcome.result, &sample.step_file, &step_options),
        (outcome.result, &sample.stl_file, &stl_options),
        (outcome.delta, &sample.delta_step_file, &step_options),
        (outcome.delta, &sample.delta_stl_file, &stl_options),
    ];
    for (shape, file_name, options) in exports {
        let path = sample.output_dir.join(file_name);
        check("export_shape", session.export_shape(shape, &path, options))?;
        println!("Generated: {}", path.display());
    }

    check("delete_shape", session.delete_shape(outcome.delta))?;
    check("delete_shape", session.delete_shape(outcome.result))?;
    check("delete_shape", session.delete_shape(stock))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
