use clap::Parser;
use tracing::{error, info};

use internet_test_report::analytics::ReportAnalytics;
use internet_test_report::config::{CliArgs, Command, ReportConfig};
use internet_test_report::mock::{create_directories, generate_mock_results};
use internet_test_report::orchestrator::run_all;
use internet_test_report::process::runner::RUNNERS;
use internet_test_report::report::generate_report;
use internet_test_report::settings::{resolve_analytics, save_analytics};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "internet_test_report=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting internet-test-report v{}", env!("CARGO_PKG_VERSION"));
    info!("Results dir: {:?}", args.results_dir);

    if let Err(e) = run(args).await {
        error!("Error running tests: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = ReportConfig::from_args(&args);

    match args.command {
        Command::Run { demo, .. } => {
            info!("Project dir: {:?}", config.project_dir);
            info!("Demo mode: {}", demo);
            let analytics = resolve_analytics(&config);
            let summary = run_all(&config, &analytics, RUNNERS, demo).await?;
            info!(
                "Run {} finished: report at {:?}",
                summary.run_id, summary.report.html_path
            );
        }
        Command::Report => {
            let analytics = resolve_analytics(&config);
            let report = generate_report(&config, &analytics)?;
            info!(
                "Overall pass rate {}% ({:?})",
                report.summary.coverage.overall_percentage, report.html_path
            );
        }
        Command::Mock => {
            create_directories(&config)?;
            generate_mock_results(&config.reports_dir)?;
            info!("All mock data has been successfully generated!");
        }
        Command::InitAnalytics { output } => {
            save_analytics(&output, &ReportAnalytics::default())?;
            info!("Default analytics written to {:?}", output);
        }
    }

    Ok(())
}
