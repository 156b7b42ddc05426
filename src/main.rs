use log::{debug, warn};
use sobel_ppm::{pipeline, RunConfig};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sobel_ppm".to_string());
    let args: Vec<String> = args.collect();
    if args.is_empty() || args.len() > 2 {
        return Err(usage(&program));
    }
    let config = RunConfig::from_args(args).map_err(|err| err.to_string())?;

    let report = pipeline::run_with(&config, |input| {
        println!(
            "Loaded image with width: {}, height: {}",
            input.width, input.height
        );
    })
    .map_err(|err| err.to_string())?;

    println!(
        "Processing time: {} microseconds ({} thread(s))",
        report.filter_us(),
        report.threads
    );
    println!("Image saved to '{}'", report.output_path.display());

    match report.to_json() {
        Ok(json) => debug!("run report:\n{json}"),
        Err(err) => warn!("could not serialize run report: {err}"),
    }
    Ok(())
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <input.ppm> [thread_count]")
}
