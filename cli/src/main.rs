//! CLI entrypoint for Vet Clinic
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use clinic_application::{
    ClinicReport, RunClinicUseCase, TreatmentOutput, demo_veterinarian, demo_waiting_room,
};
use clinic_domain::WaitingRoom;
use clinic_presentation::{Cli, ConsoleOutput};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the narrative
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Vet Clinic");

    let report = run(&ConsoleOutput::stdout())?;
    info!("Treated {} patient(s)", report.treated_count());

    Ok(())
}

/// Admit the demonstration roster and treat it
fn run(output: &dyn TreatmentOutput) -> Result<ClinicReport> {
    let room = demo_waiting_room()?;
    info!("{} patient(s) admitted", room.len());
    treat_all(room, output)
}

/// Drain `room` with the veterinarian on duty.
///
/// A patient that is not an animal is only rejected here, not on
/// admission; the error ends the process with a non-zero status.
fn treat_all(mut room: WaitingRoom, output: &dyn TreatmentOutput) -> Result<ClinicReport> {
    // === Dependency Injection ===
    let use_case = RunClinicUseCase::new(demo_veterinarian());
    Ok(use_case.execute_with_output(&mut room, output)?)
}
