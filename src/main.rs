use clap::Parser;
use color_eyre::Result;
use tracing::info;

use linkflow::cli::{Cli, Commands, ConfigCommands, SeedCommands};
use linkflow::config::{AppConfig, get_config, init_config};
use linkflow::store::{Store, seed};
use linkflow::system::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            action: ConfigCommands::Generate { output_path },
        }) => generate_config(output_path),
        Some(Commands::Seed {
            action: SeedCommands::Export { output_path },
        }) => export_seed(output_path),
        Some(Commands::Tui) | None => run_dashboard(cli.config.as_deref(), cli.seed),
    }
}

/// Load config, logging and seed data, then hand the terminal to the dashboard
fn run_dashboard(config_path: Option<&str>, seed_override: Option<String>) -> Result<()> {
    init_config(config_path);
    let config = get_config();

    // 日志写入器的 guard 必须存活到进程退出
    let _guard = init_logging(&config.logging)?;
    install_panic_hook();

    let groups = match seed_override.or_else(|| config.data.seed_file.clone()) {
        Some(path) => seed::load_seed(&path)?,
        None => seed::default_seed(),
    };

    let store = Store::new(groups).sidebar_open(config.ui.sidebar_open);
    info!(
        "Starting dashboard with {} groups and {} links",
        store.state().groups.len(),
        store.total_links()
    );

    linkflow::interfaces::tui::run_tui(store, &config.ui)?;
    info!("Dashboard closed");
    Ok(())
}

fn generate_config(output_path: Option<String>) -> Result<()> {
    match output_path {
        Some(path) => {
            AppConfig::default().save_to_file(&path)?;
            println!("Sample configuration written to {}", path);
        }
        None => println!("{}", AppConfig::generate_sample_config()),
    }
    Ok(())
}

fn export_seed(output_path: Option<String>) -> Result<()> {
    let groups = seed::default_seed();
    match output_path {
        Some(path) => {
            seed::export_seed(&groups, &path)?;
            println!("Exported {} groups to {}", groups.len(), path);
        }
        None => println!("{}", seed::render_seed(&groups)?),
    }
    Ok(())
}
