//! Headless demo driver
//!
//! Runs the kernel for a few simulated minutes with a scripted paddle and a
//! toy scoring collaborator, logging the event stream. Useful for eyeballing
//! the physics without a renderer.

use brickfall::SimConfig;
use brickfall::level;
use brickfall::sim::state::{GameEvent, SimState};
use brickfall::sim::tick::{TickInput, tick};

const LEVELS_JSON: &str = include_str!("../data/levels.json");

/// Milliseconds per simulated frame (60 FPS).
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<(), serde_json::Error> {
    env_logger::init();

    let levels = level::load_levels(LEVELS_JSON)?;
    let mut state = SimState::new(SimConfig::default(), 7);
    state.load_level(&levels[0]);

    // Scoring collaborator: the kernel only reports events.
    let mut score: u64 = 0;
    let mut combo: u64 = 0;
    let mut lives: u32 = 3;

    'run: for frame in 0..(120 * 60) {
        // Scripted paddle: chase the ball's x position.
        let target = state.ball.pos.x - state.config.paddle_width / 2.0;
        let input = TickInput {
            paddle_x: Some(target),
            emit_trail: true,
        };
        tick(&mut state, &input, frame as f64 * FRAME_MS);

        for event in state.take_events() {
            match event {
                GameEvent::BrickDestroyed { brick } => {
                    combo += 1;
                    score += 100 * combo;
                    log::info!("frame {frame}: brick {brick} destroyed, score {score}");
                }
                GameEvent::PaddleBounce => {
                    combo = 0;
                }
                GameEvent::BallLost => {
                    lives -= 1;
                    log::info!("frame {frame}: ball lost, {lives} lives left");
                    if lives == 0 {
                        state.destroy_all_bricks();
                        break 'run;
                    }
                    state.reset_player();
                }
            }
        }

        if state.cleared() {
            log::info!("frame {frame}: level clear");
            break;
        }
    }

    println!(
        "final score {score}, {} / {} bricks destroyed, {} particles live",
        state.destroyed_count(),
        state.bricks.len(),
        state.pool.alive()
    );
    Ok(())
}
