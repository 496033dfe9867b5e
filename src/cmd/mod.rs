pub mod assess;
pub mod compare;

use keygauge::config::AssessConfig;
use keygauge::error::KgResult;
use tracing::info;

/// A JSON config file, when given, replaces the flag-supplied values
/// wholesale.
pub fn resolve_config(file: &Option<String>, cli: AssessConfig) -> KgResult<AssessConfig> {
    match file {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path);
            AssessConfig::load_from_file(path)
        }
        None => Ok(cli),
    }
}
