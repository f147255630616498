//! A single button cut from a three-frame sprite sheet, with a timer readout.
//!
//! ```text
//! cargo run -p tether --example button_demo --features sdl2 -- <sheet.png> [font.ttf]
//! ```
//!
//! The sheet holds the default, hovering and pressed visuals stacked
//! vertically. Space pauses the timer, Return restarts it, clicking the button
//! restarts it too, Escape quits. Set `TETHER_PROFILE` to serve puffin scopes.

use std::error::Error;

use tether::input::sdl::poll_events;
use tether::ProfilingMode;
use tether::prelude::*;
use tether::render::sdl::{SdlFont, SdlPlatform, SdlTexture};

const BUTTON_SIZE: Size = Size::new(300, 200);

fn main() -> Result<(), Box<dyn Error>> {
    tether::core::logging::init();

    let mut args = std::env::args().skip(1);
    let sheet_path = args.next().unwrap_or_else(|| "assets/button.png".to_string());
    let font_path = args.next();

    let config = Config::default()
        .with_title("Tether button demo")
        .with_size(640, 480)
        .with_frame_rate(FrameRate::Capped(60))
        .with_profiling(if std::env::var_os("TETHER_PROFILE").is_some() {
            ProfilingMode::WithWebserver
        } else {
            ProfilingMode::Off
        });
    if config.profiling == ProfilingMode::WithWebserver {
        tether::core::profiling::init_profiling();
    }

    let platform = SdlPlatform::init()?;
    let window = platform.create_window(&config.window)?;
    let renderer = platform.create_renderer(&window, false)?;

    let sheet: Texture<SdlTexture, Shared> =
        load_texture(&platform, &renderer, &sheet_path, Some(Color::CYAN))?;
    let clips = [0, 1, 2].map(|row| {
        Rect::from_parts(Pos::new(0, row * BUTTON_SIZE.height), BUTTON_SIZE)
    });
    let output = renderer.output_size();
    let mut button = Button::from_sheet(
        &sheet,
        clips,
        Pos::new(
            (output.width - BUTTON_SIZE.width) / 2,
            (output.height - BUTTON_SIZE.height) / 2,
        ),
    );

    let font: Option<Managed<SdlFont>> = match font_path {
        Some(path) => Some(load_font(&platform, path, 20)?),
        None => None,
    };

    let mut input = InputState::new();
    let mut timer = Timer::new();
    let mut fps = FrameCounter::new();
    let mut limiter = FrameLimiter::new(config.frame_rate);

    while !input.quit_requested() {
        for event in poll_events() {
            match event {
                InputEvent::KeyDown {
                    key: KeyCode::Space,
                    repeat: false,
                } => {
                    if timer.is_paused() {
                        timer.unpause();
                    } else {
                        timer.pause();
                    }
                }
                InputEvent::KeyDown {
                    key: KeyCode::Return,
                    repeat: false,
                } => timer.reset(false),
                InputEvent::KeyDown {
                    key: KeyCode::Escape,
                    ..
                } => input.update(&InputEvent::Quit),
                _ => {}
            }
            input.update(&event);
        }

        button.update(&input.mouse);
        if button.is_clicked() {
            tracing::info!(elapsed = ?timer.elapsed(), "button clicked, restarting timer");
            timer.reset(false);
        }

        renderer.set_draw_color(Color::WHITE).clear();
        button.render(&renderer);

        if let Some(font) = &font {
            let line = format!(
                "{:.1}s elapsed, {:.0} fps",
                timer.elapsed().as_secs_f32(),
                fps.average_fps()
            );
            let text: Texture<SdlTexture> =
                render_text(&platform, &renderer, font, &line, Color::BLACK)?;
            text.draw_at(&renderer, Pos::new(8, 8));
        }

        renderer.present();
        fps.tick();
        limiter.throttle();
        tether::core::profiling::new_frame();
    }

    Ok(())
}
