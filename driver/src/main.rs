use clap::Parser;
use log::info;
use report::export::{export_reports, SpectrumReport};
use std::path::PathBuf;
use workflow::config::{DemoSelection, WorkflowConfig};
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "FFT spectrum analysis of synthetic signals")]
struct Args {
    /// Load scenarios from a YAML workflow file
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Built-in demo to run when no workflow is given
    #[arg(long, value_enum, default_value_t = DemoSelection::All)]
    demo: DemoSelection,
    /// Override the sample count of the built-in demos
    #[arg(long)]
    samples: Option<usize>,
    /// Peak amplitude of uniform noise added to each signal
    #[arg(long, default_value_t = 0.0)]
    noise: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Directory receiving one JSON report per scenario
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.demo, args.samples, args.noise, args.seed)?
    };
    info!(
        "running {} scenario(s), noise {}",
        workflow_config.scenarios.len(),
        workflow_config.noise
    );

    let runner = Runner::new(workflow_config);
    let reports: Vec<SpectrumReport> = runner
        .execute_all()?
        .iter()
        .map(SpectrumReport::from_analysis)
        .collect();

    for report in &reports {
        println!("{}", report.summary_line());
    }

    if let Some(dir) = args.export {
        let written = export_reports(&dir, &reports)?;
        for path in written {
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
