use ReactLab::Catalogs::Catalog;
use ReactLab::Catalogs::catalog_config::CatalogConfig;
use ReactLab::Catalogs::ions::IonCatalog;
use ReactLab::cli::cli_main::run_interactive_menu;
use log::{LevelFilter, info, warn};
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};
use std::env;

/// REACTLAB_LOG=debug|info|warn|error|off, default warn
fn log_level() -> LevelFilter {
    env::var("REACTLAB_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn init_logging() {
    let level = log_level();
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        let _ = SimpleLogger::init(level, Config::default());
    }
}

/// reactlab [catalog_config.json] [ions.json]
pub fn main() {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => CatalogConfig::load_or_default(path),
        None => CatalogConfig::default(),
    };
    let ions = match args.get(1) {
        Some(path) => IonCatalog::from_json_file(path).unwrap_or_else(|e| {
            warn!("cannot load ions from {}: {}, using the built-in table", path, e);
            IonCatalog::standard()
        }),
        None => IonCatalog::standard(),
    };
    let catalog = Catalog::build(ions, &config);
    info!("{} ions, {} reagents", catalog.ions().len(), catalog.reagents().len());
    run_interactive_menu(&catalog);
}
