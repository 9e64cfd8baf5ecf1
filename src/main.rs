use std::path::Path;

use anyhow::Result;
use env_logger::Env;

use water_temp_lib::settings::{Settings, SETTINGS_PATH};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let settings = Settings::load(Path::new(SETTINGS_PATH))?;
    let stdout = std::io::stdout();
    water_temp_lib::run(&settings, &mut stdout.lock())?;
    Ok(())
}
