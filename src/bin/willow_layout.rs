//! Generate the willow tree layout file.
//! cargo run --bin willow-layout -- --output willow_tree.json

use std::process;

use anyhow::Context;

use willow_lib::error::SettingsError;
use willow_lib::fixtures::generate_layout;
use willow_lib::fixtures::parser::write_layout;
use willow_lib::settings::{LayoutSettings, LAYOUT_USAGE};

fn run(settings: &LayoutSettings) -> anyhow::Result<()> {
    let layout = generate_layout(&settings.geometry);
    write_layout(&settings.output, &layout)
        .with_context(|| format!("writing {}", settings.output.display()))?;
    log::info!(
        "[layout] wrote {} lights ({} vines) to {}",
        layout.len(),
        layout.num_vines(),
        settings.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match LayoutSettings::parse(&args) {
        Ok(s) => s,
        Err(SettingsError::HelpRequested) => {
            println!("{LAYOUT_USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{LAYOUT_USAGE}");
            eprintln!();
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&settings) {
        log::error!("[layout] {e:#}");
        process::exit(1);
    }
}
