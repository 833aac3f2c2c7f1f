use crate::core::converter::convert_job;
use crate::domain::model::{ConversionJob, ConversionSummary};
use crate::utils::monitor::RunMonitor;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn print_banner() {
    println!("{}", rule());
    println!("CSV to JSON Converter for China Climate Scorecard");
    println!("{}", rule());
    println!();
}

pub fn print_summary(summary: &ConversionSummary) {
    println!("{}", rule());
    println!(
        "Conversion complete: {}/{} files converted successfully",
        summary.successes(),
        summary.total()
    );
    println!("{}", rule());
}

/// Converts every job in order. A failed job is recorded and the
/// remaining jobs still run.
pub fn run_jobs(jobs: &[ConversionJob], monitor: &mut RunMonitor) -> ConversionSummary {
    let mut summary = ConversionSummary::default();

    for job in jobs {
        let result = convert_job(job);
        monitor.log_stats(&job.input.display().to_string());
        summary.push(result);
        println!();
    }

    monitor.log_final_stats();
    summary
}

/// Banner, all jobs, summary.
pub fn run(jobs: &[ConversionJob], monitor: &mut RunMonitor) -> ConversionSummary {
    print_banner();
    let summary = run_jobs(jobs, monitor);
    print_summary(&summary);

    if !summary.all_succeeded() {
        tracing::warn!(
            "{} of {} files failed to convert",
            summary.total() - summary.successes(),
            summary.total()
        );
    }

    summary
}
