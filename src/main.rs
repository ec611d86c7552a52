use macroquad::prelude::*;
use life_editor::{
    Controller, LifeConfig,
    application::{EventQueue, FramePacer},
    rendering, input,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf(config: &LifeConfig) -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match LifeConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "could not load configuration");
            std::process::exit(1);
        }
    };
    info!(
        rows = config.rows,
        columns = config.columns,
        tick_interval_secs = config.tick_interval_secs,
        poll_rate_hz = config.poll_rate_hz,
        seed = ?config.seed,
        "configuration loaded"
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: LifeConfig) {
    let mut controller = match Controller::new(&config, get_time()) {
        Ok(controller) => controller,
        Err(err) => {
            error!(%err, "could not start simulation");
            return;
        }
    };
    let mut events = EventQueue::new();
    let mut pacer = FramePacer::new(config.poll_rate_hz, get_time());

    loop {
        // All mutation for this cycle happens before drawing
        input::collect_events(&mut events);
        controller.poll(get_time(), events.drain());
        rendering::draw_frame(&controller);

        next_frame().await;

        // Cap at the configured poll rate; a vsynced swap already used the budget
        if let Some(wait) = pacer.wait_time(get_time()) {
            std::thread::sleep(wait);
        }
        pacer.mark(get_time());
    }
}
