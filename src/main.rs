use std::sync::OnceLock;

use log::{error, info};
use macroquad::prelude::*;
use sierpinski_zoom::{
    GameConfig, GameOver, ViewportController,
    input, rendering::{self, ScreenSurface}, ui,
};

/// Logger and config are set up once, before the window opens
fn startup_config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        match GameConfig::locate(std::env::args().skip(1)) {
            Some(path) => match GameConfig::from_file(&path) {
                Ok(config) => {
                    info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    error!("{err}; falling back to defaults");
                    GameConfig::default()
                }
            },
            None => {
                info!("no config file given, using defaults");
                GameConfig::default()
            }
        }
    })
}

fn window_conf() -> Conf {
    let config = startup_config();
    Conf {
        window_title: "Sierpinski Zoom".to_owned(),
        window_width: (config.canvas_width as f32 + ui::PANEL_WIDTH) as i32,
        window_height: config.canvas_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = startup_config().clone();
    let (canvas_width, canvas_height) = (config.canvas_width, config.canvas_height);

    let mut controller = ViewportController::new(config);
    let mut surface = ScreenSurface::new(canvas_width, canvas_height);
    let play_again = ui::create_play_again_button(canvas_width as f32);
    let mut wheel = input::WheelEvents::new();
    let mut game_over: Option<GameOver> = None;
    let mut render_ms = 0.0;

    loop {
        let mouse_pos = mouse_position();

        input::handle_zoom(&mut controller, &mut wheel, mouse_pos);
        input::handle_reset(&mut controller, &play_again, mouse_pos);

        let render_start = std::time::Instant::now();
        clear_background(WHITE);
        let report = controller.render_frame(&mut surface);
        // Smoothed so the panel readout stays legible
        let frame_ms = render_start.elapsed().as_secs_f32() * 1000.0;
        render_ms = render_ms * 0.9 + frame_ms * 0.1;

        if report.game_over.is_some() {
            game_over = report.game_over;
        } else if !controller.state().ended {
            game_over = None;
        }

        rendering::draw_panel(&controller, &report, &play_again, render_ms, mouse_pos);
        if let Some(over) = &game_over {
            rendering::draw_game_over(over, canvas_width as f32, canvas_height as f32);
        }

        next_frame().await;
    }
}
