use std::time::Duration;

use clap::Parser;
use macroquad::prelude::*;
use highlife::{
    application::{TickOutcome, start_session},
    config::{ConfigError, SeedMode, SessionConfig, WindowSize, parse_tier},
    domain::RuleKind,
    input,
    rendering::MacroquadRenderer,
    ui::{Menu, MenuAction, MENU_HEIGHT, MENU_WIDTH},
};

/// HighLife (B36/S23) cellular automaton
#[derive(Parser, Debug)]
#[command(name = "highlife", version, about, long_about = None)]
struct Cli {
    /// Window width in pixels (640, 800 or 1024)
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Window height in pixels (480, 600 or 768)
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Cell size tier, 1 (tiny) to 10 (large)
    #[arg(long, default_value_t = 10)]
    tier: u8,

    /// Rule set: highlife or conway
    #[arg(long, default_value = "highlife")]
    rule: RuleKind,

    /// Skip the menu and start blank or random
    #[arg(long)]
    start: Option<SeedMode>,

    /// Fixed random seed instead of the clock
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let config = SessionConfig {
            window: WindowSize {
                width: self.width,
                height: self.height,
            },
            tier: parse_tier(self.tier)?,
            seed_mode: self.start.unwrap_or_default(),
            rule: self.rule,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life Simulation".to_owned(),
        window_width: MENU_WIDTH as i32,
        window_height: MENU_HEIGHT as i32,
        // X11 pins min/max size hints on fixed windows, which would
        // clamp every later request_new_screen_size to the menu size
        window_resizable: true,
        ..Default::default()
    }
}

/// Run one simulation session until Escape
async fn run_session(config: SessionConfig) {
    request_new_screen_size(config.window.width as f32, config.window.height as f32);
    // Let the click that started the session go by
    next_frame().await;

    let mut controller = start_session(&config);
    let mut renderer = MacroquadRenderer::new();

    loop {
        let events = input::collect_events();
        let elapsed = Duration::from_secs_f32(get_frame_time().max(0.0));
        if controller.tick(elapsed, events, &mut renderer) == TickOutcome::Terminate {
            break;
        }
        next_frame().await;
    }

    log::info!(
        "Session ended after {} generations, population {}",
        controller.state().generation,
        controller.engine().population()
    );

    request_new_screen_size(MENU_WIDTH as f32, MENU_HEIGHT as f32);
    next_frame().await;
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match cli.session_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    if cli.start.is_some() {
        run_session(config).await;
    }

    let mut menu = Menu::new(config);
    loop {
        if let MenuAction::Start(session) = menu.update() {
            run_session(session).await;
            continue;
        }
        menu.draw();
        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("highlife").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_make_valid_session() {
        let config = parse(&[]).session_config().unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_tier_out_of_range_is_rejected() {
        let cli = parse(&["--tier", "11"]);
        assert_eq!(cli.session_config(), Err(ConfigError::InvalidTier(11)));
    }

    #[test]
    fn test_width_not_in_presets_is_rejected() {
        let cli = parse(&["--width", "700"]);
        assert_eq!(cli.session_config(), Err(ConfigError::InvalidWidth(700)));
    }

    #[test]
    fn test_start_and_rule_flags() {
        let cli = parse(&["--start", "random", "--rule", "conway", "--seed", "5", "--tier", "3"]);
        let config = cli.session_config().unwrap();
        assert_eq!(config.seed_mode, SeedMode::Random);
        assert_eq!(config.rule, RuleKind::Conway);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.tier.get(), 3);
    }

    #[test]
    fn test_window_can_be_resized_for_sessions() {
        assert!(window_conf().window_resizable);
    }
}
