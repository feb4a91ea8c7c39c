//! Headless demo driver
//!
//! Runs one scripted round at a 1s tick cadence and logs the draw commands
//! each frame, standing in for a real canvas and input stream. Pass a seed
//! as the first argument to replay a specific draw.

use glam::Vec2;

use touch_roulette::render::{DrawSurface, draw_frame};
use touch_roulette::round::{Banner, ContactId, RoundController, RoundEvent};
use touch_roulette::{ConfigError, RoundConfig};

/// Surface that logs draw commands instead of painting
struct LogSurface;

impl DrawSurface for LogSurface {
    fn clear(&mut self) {
        log::debug!("clear");
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        log::info!(
            "circle at ({:.0}, {:.0}) r={} color=#{:06X}",
            center.x,
            center.y,
            radius,
            color
        );
    }
}

fn banner_text(banner: Banner) -> String {
    match banner {
        Banner::Countdown(secs) => secs.to_string(),
        Banner::Winner => "Winner!".to_string(),
        Banner::Empty => String::new(),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("seed {}", seed);

    let mut round = RoundController::new(RoundConfig::default(), seed)?;
    let mut surface = LogSurface;

    // Scripted players: two fingers at the start, a third joins at 3s, the
    // second one bails at 6s.
    round.on_down(ContactId(1), 120.0, 300.0);
    round.on_down(ContactId(2), 480.0, 310.0);

    let mut elapsed = 0u64;
    loop {
        let event = round.tick(1000);
        elapsed += 1000;

        match elapsed {
            3000 => round.on_down(ContactId(3), 300.0, 640.0),
            6000 => round.on_up(ContactId(2)),
            _ => {}
        }

        let view = round.view_model();
        log::info!("t={}s  [{}]", elapsed / 1000, banner_text(view.banner));
        draw_frame(&view, &mut surface);

        match event {
            Some(RoundEvent::WinnerChosen(winner)) => match winner {
                Some(id) => log::info!("finger {} wins", id.0),
                None => log::info!("nobody was touching"),
            },
            Some(RoundEvent::RoundOver) => break,
            None => {}
        }
    }

    Ok(())
}
