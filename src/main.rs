use anyhow::{Context, Result};
use macroquad::prelude::*;
use tracing::{error, info};
use block_life::{
    Flow, GameState, LifeConfig,
    input::{self, KeyboardInput},
    rendering,
};

fn window_conf() -> Conf {
    // A bad configuration is reported by `run`; the window still needs a size
    let config = LifeConfig::from_env().unwrap_or_default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = LifeConfig::from_env().context("invalid configuration")?;
    let (width, height) = config.grid_dimensions();
    info!(?config, width, height, "starting Game of Life");

    let mut state = GameState::new(&config);
    let keyboard = KeyboardInput;

    loop {
        // Input and stepping settle the grid before it is drawn
        if state.tick(input::poll(&keyboard)) == Flow::Quit {
            info!(generation = state.generation, "quit requested");
            return Ok(());
        }

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, config.block_size);
        rendering::draw_status(&state);

        next_frame().await;
    }
}
