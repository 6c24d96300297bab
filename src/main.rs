use q::cli::{AppConfig, Args};
use q::config::UserConfig;
use q::display::{BoxRenderer, ColorAssignment};
use q::domain::list_entries;
use q::error::{QError, Result};

use std::io::{self, IsTerminal};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors must surface before any filesystem work
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprint!("{}", e);
            process::exit(e.exit_code());
        }
    };

    let config: AppConfig = args.into();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Lists `config.path` and writes the table to stdout
fn run(config: &AppConfig) -> Result<()> {
    let user_config = UserConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load user config: {}", e);
        UserConfig::default()
    });

    let entries = list_entries(&config.path, config.show_hidden)?;

    let color_enabled = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let renderer = BoxRenderer::new(
        config.mode,
        config.human_readable,
        ColorAssignment::from_config(&user_config.colors),
    )
    .with_color(color_enabled);

    log::debug!(
        "Rendering {} entries in {:?} mode (color: {})",
        entries.len(),
        renderer.mode(),
        color_enabled
    );

    let mut stdout = io::stdout().lock();
    QError::check_output(renderer.write_to(&mut stdout, &entries))
}
