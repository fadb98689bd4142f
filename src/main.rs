mod color;
mod config;
mod cosmology;
mod data;
mod pipeline;
mod render;

use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use config::RunConfig;

fn main() -> ExitCode {
    env_logger::init();

    let outcome = RunConfig::discover(Path::new("."))
        .map_err(pipeline::PipelineError::from)
        .and_then(|cfg| pipeline::run(&cfg));

    match outcome {
        Ok(summary) => {
            info!("Processed {} spectrum records", summary.records);
            println!("Age calculated: {:.2} Gyr", summary.age.age_gyr);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("cmb-age: {err}");
            ExitCode::FAILURE
        }
    }
}
