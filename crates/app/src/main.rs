use advisor::{AdvisoryDesk, AdvisoryRequest, advisor_from_settings};
use clap::Parser;

mod cli;
mod report;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = cli::Args::parse();
    let settings = settings::Settings::new(args.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "mahr={level},engine={level},advisor={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let (groom, bride) = args.profiles();
    engine::validate_profiles(&groom, &bride)?;

    let result = engine::estimate(&groom, &bride);
    tracing::info!(
        fair = result.fair,
        currency = %groom.currency,
        "calculation complete"
    );

    // Advice is fetched in the background so the numbers print right away.
    let pending = if args.no_advice {
        None
    } else {
        let desk = AdvisoryDesk::new(advisor_from_settings(&settings.advisor));
        Some(desk.request(AdvisoryRequest::new(&groom, &bride, &result)))
    };

    print!("{}", report::render(&groom, &bride, &result, args.detailed));

    if let Some(pending) = pending
        && let Some(note) = pending.wait().await
    {
        print!("{}", report::render_advice(&note));
    }

    Ok(())
}
