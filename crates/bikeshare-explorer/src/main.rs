mod bootstrap;

use anyhow::Result;
use bikeshare_core::cities::CityCatalog;
use bikeshare_core::settings::Settings;
use bikeshare_session::controller::Controller;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::discover_data_dir(settings.data_dir.as_deref());
    tracing::info!("Data directory: {}", data_dir.display());

    let catalog = CityCatalog::new(data_dir);
    let available = catalog.available();
    if available.is_empty() {
        tracing::warn!(
            "No city datasets found in {}; loads will fail until files are added",
            catalog.data_dir().display()
        );
    } else {
        for entry in &available {
            tracing::debug!(city = entry.name.as_str(), "dataset present");
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let controller = Controller::new(&catalog);
    controller.run(&mut stdin.lock(), &mut stdout.lock())?;

    tracing::info!("Session ended");
    Ok(())
}
