use seajourney_page::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("seajourney_page", LevelFilter::Debug)
        .filter_module("seajourney_core", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::debug!("RUST_LOG unset, using default log filters");
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment()?;

    app::application(config).run()?;
    Ok(())
}
