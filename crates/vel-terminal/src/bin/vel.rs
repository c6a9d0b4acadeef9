//! vel: the archival console in a terminal.
//!
//! Run: cargo run -p vel-terminal --bin vel -- --seed 7

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use vel_core::Section;
use vel_terminal::{logging, ColorMode, SkippedConfig, VelApp, VelConfig, VelError};

/// VEL archival console
#[derive(Parser, Debug)]
#[command(name = "vel", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (TOML); replaces the default search path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Section shown first (mission, console, faq)
    #[arg(short, long, value_name = "NAME")]
    section: Option<Section>,

    /// Seed the generator for a reproducible feed
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Capture the mouse (click navigation and FAQ rows)
    #[arg(long)]
    mouse: bool,

    /// Render once to stdout as plain text and exit
    #[arg(long)]
    render_once: bool,

    /// Terminal width for render-once mode
    #[arg(long, default_value = "100")]
    width: u16,

    /// Terminal height for render-once mode
    #[arg(long, default_value = "30")]
    height: u16,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `vel_core=trace` (RUST_LOG wins)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    /// Config file (or the first usable one on `search`, or defaults) with
    /// flags applied on top.
    fn resolve_config(
        &self,
        search: &[PathBuf],
    ) -> Result<(VelConfig, Vec<SkippedConfig>), VelError> {
        let (mut config, skipped) = match &self.config {
            Some(path) => (VelConfig::load_from_file(path)?, Vec::new()),
            None => VelConfig::load_first(search),
        };
        if let Some(section) = self.section {
            config.start_section = section;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_color {
            config.color_mode = Some(ColorMode::Mono);
        }
        if self.mouse {
            config.mouse = true;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        if self.log_file.is_some() {
            config.log_file.clone_from(&self.log_file);
        }
        config.validate()?;
        Ok((config, skipped))
    }

    /// Resolve the config and install logging, then report the config files
    /// that were passed over.
    fn start(&self, search: &[PathBuf]) -> Result<VelConfig, VelError> {
        let (config, skipped) = self.resolve_config(search)?;
        logging::init(&config.log_level, config.log_file.as_deref())?;
        for skipped in &skipped {
            skipped.warn();
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), VelError> {
    if cli.dump_config {
        print!("{}", VelConfig::default().to_toml()?);
        return Ok(());
    }

    let config = cli.start(&VelConfig::config_paths())?;
    info!(
        section = %config.start_section,
        seeded = config.seed.is_some(),
        "vel starting"
    );

    let mut app = VelApp::from_config(&config);
    if cli.render_once {
        let frame = app.render_text(cli.width, cli.height);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{frame}")?;
        stdout.flush()?;
        return Ok(());
    }
    app.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vel: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "vel",
            "--config",
            "/nonexistent/vel.toml",
            "--section",
            "faq",
        ]);
        assert!(matches!(
            cli.resolve_config(&[]),
            Err(VelError::ConfigRead { .. })
        ));

        let cli = Cli::parse_from(["vel", "--section", "faq", "--seed", "3", "--no-color", "--mouse"]);
        let (config, skipped) = cli.resolve_config(&[]).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(config.start_section, Section::Faq);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.color_mode, Some(ColorMode::Mono));
        assert!(config.mouse);
    }

    #[test]
    fn test_bad_section_rejected_by_parser() {
        assert!(Cli::try_parse_from(["vel", "--section", "vault"]).is_err());
    }

    #[test]
    fn test_broken_config_warning_reaches_log_file() {
        let dir = std::env::temp_dir().join(format!("vel-start-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("config.toml");
        let log = dir.join("vel.log");
        std::fs::write(&broken, "feed_interval_ms = \"fast\"").unwrap();

        let log_arg = log.display().to_string();
        let cli = Cli::parse_from(["vel", "--log-level", "debug", "--log-file", log_arg.as_str()]);
        let config = cli.start(&[broken.clone()]).unwrap();
        assert_eq!(config.feed_interval_ms, VelConfig::default().feed_interval_ms);

        let written = std::fs::read_to_string(&log).unwrap();
        assert!(written.contains("skipping config"), "{written}");
        assert!(written.contains(&broken.display().to_string()));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
