//! # Lifeline Main Entry Point
//!
//! Fills the prediction form from command-line flags, submits it once and
//! prints the outcome.

use anyhow::Result;
use lifeline::cmd_args::CommandLineArgs;
use lifeline::views::{TextRenderer, ViewRenderer};
use lifeline::{config, logging, ApiClient, FeatureField, LifecycleController, RequestOutcome};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = CommandLineArgs::parse();
    logging::init(args.verbose());

    let profile_path = config::get_profile_path();
    let server_override = config::get_server_override();
    let profile = config::load_profile(args.profile(), &profile_path, server_override.as_deref())?;

    let api = ApiClient::new(&profile)?;
    let mut controller = LifecycleController::new(api);
    let mut renderer = TextRenderer::new(std::io::stdout());

    if args.list_countries() {
        if !controller.load_countries().await {
            eprintln!(
                "Could not load countries: {}",
                controller.reference_error().unwrap_or("unknown error")
            );
            return Ok(ExitCode::FAILURE);
        }
        renderer.render_countries(&controller)?;
        return Ok(ExitCode::SUCCESS);
    }

    // Best effort: a failed load is logged and the submission still goes ahead
    controller.load_countries().await;
    for (field, value) in args.field_values() {
        controller.update_field(*field, value.as_str());
    }

    let country = controller.form().get(FeatureField::Country);
    if controller.countries().is_loaded() && !controller.countries().contains(country) {
        tracing::warn!("Country '{}' is not in the service's country list", country);
    }

    if let Err(rejection) = controller.submit().await {
        eprintln!("Cannot submit: {rejection}");
        return Ok(ExitCode::from(2));
    }

    renderer.render_outcome(&controller)?;

    Ok(match controller.outcome() {
        RequestOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
