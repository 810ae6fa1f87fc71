use env_logger::Env;
use log::debug;

use crate::config::SystemConfig;

/// Installs the `env_logger` backend. `RUST_LOG` wins; otherwise `system.debug`
/// selects `debug`, and `quiet_level` applies.
pub fn init(system: &SystemConfig, quiet_level: &str) {
    let default_level = if system.debug { "debug" } else { quiet_level };
    if let Err(e) = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()
    {
        // Another logger is already installed; keep using it
        debug!("Logger not replaced: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_the_first_logger() {
        let system = SystemConfig::default();
        init(&system, "warn");
        init(&system, "warn");
    }
}
