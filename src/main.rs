//! Headless demo driver
//!
//! Stands in for the real host loop: steps the core at a fixed 60 Hz with
//! a reflex autopilot and logs the notifications a renderer/audio layer
//! would consume. The RNG seed comes from the first CLI argument when
//! given, so any run can be replayed exactly.

use drone_dash::consts::FIELD_HEIGHT;
use drone_dash::sim::{self, GamePhase, GameState, TickInput};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 120 * 60;

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xDA5B0A7);
    log::info!("Drone Dash headless demo, seed {seed}");

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new();
    let mut now = 0.0f64;

    for frame in 0..MAX_FRAMES {
        let input = autopilot(&state);
        let events = sim::tick(&mut state, &input, DT, now, &mut rng);
        for event in &events {
            log::info!("frame {frame}: {event:?}");
        }
        if state.phase == GamePhase::GameOver {
            log::info!("run over at frame {frame}");
            break;
        }
        now += DT as f64;
    }

    let snap = state.snapshot();
    let seconds = snap.score / 1000;
    let tenths = (snap.score % 1000) / 100;
    log::info!("final phase: {:?}", snap.phase);
    println!("Score: {seconds:05}{tenths}");
}

/// A jittery but serviceable player: starts the game, then jumps whenever
/// a low-flying hazard closes in.
fn autopilot(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Intro => TickInput {
            start: true,
            ..Default::default()
        },
        GamePhase::Gameplay => {
            let player = &state.player;
            let threat = state.hazards.iter_active().any(|(_, hazard)| {
                let ahead = hazard.pos.x - player.pos.x;
                let flying_low =
                    hazard.pos.y + hazard.kind.sprite_size().y > FIELD_HEIGHT - 100.0;
                (0.0..150.0).contains(&ahead) && flying_low
            });
            TickInput {
                jump: threat && !player.airborne,
                ..Default::default()
            }
        }
        _ => TickInput::default(),
    }
}
