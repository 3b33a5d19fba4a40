//! Headless demo driver
//!
//! Runs the simulation at a fixed timestep with a scripted pilot and
//! logs the collision events a real frontend would feed to positional
//! audio. Usage: `astro-drift [seed] [seconds]`.

use glam::Vec2;

use astro_drift::Config;
use astro_drift::input::{Mailbox, TiltSample, TouchSample};
use astro_drift::render::DrawList;
use astro_drift::sim::{Severity, TickInput, World};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);
    let seconds: f32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(60.0);

    let config = Config::default();
    let rotation_limit = config.device_rotation_limit;
    let mut world = World::new(config, seed);
    log::info!("world seeded with {seed}, {} asteroids", world.asteroids.len());

    // The mailboxes a platform layer would post sensor callbacks into.
    let tilt_box: Mailbox<TiltSample> = Mailbox::new();
    let touch_box: Mailbox<TouchSample> = Mailbox::new();

    let mut draw_list = DrawList::new();
    let mut collisions = 0usize;
    let mut large_collisions = 0usize;
    let mut rockets_fired = 0usize;

    let ticks = (seconds / DT) as u64;
    for tick_index in 0..ticks {
        let t = tick_index as f32 * DT;

        // Scripted pilot: a lazy figure-eight tilt, a tap every 3 seconds
        tilt_box.post(TiltSample {
            pitch: 0.3 * (t * 0.7).sin(),
            roll: 0.3 * (t * 0.4).cos(),
        });
        if tick_index % 180 == 0 {
            touch_box.post(TouchSample {
                position: Vec2::new(600.0 * (t * 0.9).sin(), 600.0 * (t * 1.3).cos()),
                held_for: 0.0,
            });
        }

        let tilt = tilt_box
            .take()
            .map(|sample| sample.control_vector(rotation_limit))
            .unwrap_or(Vec2::ZERO);
        let input = TickInput {
            tilt,
            touch: touch_box.take(),
        };

        let rockets_before = world.rockets.len();
        world.update(&input, DT);
        if world.rockets.len() > rockets_before {
            rockets_fired += 1;
        }

        for event in world.events() {
            collisions += 1;
            let gain = event.gain(&world.config);
            match event.severity {
                Severity::Large => {
                    large_collisions += 1;
                    log::info!(
                        "[{t:7.2}s] large collision at {:?}, gain {gain:.2}",
                        event.contact
                    );
                }
                Severity::Small => {
                    log::debug!(
                        "[{t:7.2}s] small collision at {:?}, gain {gain:.2}",
                        event.contact
                    );
                }
            }
        }

        draw_list.clear();
        world.draw(&mut draw_list);
    }

    println!("simulated {ticks} ticks ({seconds:.0}s) with seed {seed}");
    println!("rockets fired:     {rockets_fired}");
    println!("collisions:        {collisions} ({large_collisions} large)");
    println!("player alive:      {}", world.player.alive());
    println!("rockets in flight: {}", world.rockets.len());
    println!("camera at:         {:?}", world.camera_position());
    println!("draw commands:     {} (last frame)", draw_list.commands.len());
}
