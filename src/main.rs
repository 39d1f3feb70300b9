use std::process;

use willow_lib::error::SettingsError;
use willow_lib::settings::{EngineSettings, ENGINE_USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match EngineSettings::parse(&args) {
        Ok(s) => s,
        Err(SettingsError::HelpRequested) => {
            println!("{ENGINE_USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{ENGINE_USAGE}");
            eprintln!();
            eprintln!("ERROR: {e}");
            eprintln!();
            process::exit(1);
        }
    };

    if let Err(e) = willow_lib::run(settings).await {
        if willow_lib::is_layout_path_error(&e) {
            eprintln!("{ENGINE_USAGE}");
            eprintln!();
        }
        log::error!("[willow] {e:#}");
        process::exit(1);
    }
}
