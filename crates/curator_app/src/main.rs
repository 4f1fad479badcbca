mod platform;

use std::time::Duration;

use curator_engine::ApiSettings;

/// Environment variable naming the backend base URL. Read once here;
/// everything below gets the value injected through `ApiSettings`.
const API_URL_VAR: &str = "CURATOR_API_URL";

fn main() -> anyhow::Result<()> {
    platform::logging::initialize(platform::logging::LogDestination::File);

    let mut settings = ApiSettings::default();
    if let Ok(base_url) = std::env::var(API_URL_VAR) {
        settings.base_url = base_url;
    }
    settings.connect_timeout = Duration::from_secs(10);
    settings.request_timeout = Duration::from_secs(30);

    platform::app::run(settings)
}
