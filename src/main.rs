//! Sky Dodge entry point
//!
//! Native builds run a headless demo: a simple autopilot flies a seeded
//! session until it crashes or time runs out. The web build is driven from
//! JavaScript through `sky_dodge::web`.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use sky_dodge::audio::{MusicBackend, MusicCommand, Soundtrack};
    use sky_dodge::consts::SIM_DT;
    use sky_dodge::platform::{InputQueue, InputSignal};
    use sky_dodge::{GameSession, PlayfieldConfig, Snapshot};

    /// Longest demo run (seconds)
    const MAX_RUN_SECS: f32 = 120.0;
    /// How far ahead of the craft the autopilot looks (display pixels)
    const LOOKAHEAD: f32 = 260.0;

    /// Logs music commands instead of playing them
    struct LoggedMusic;

    impl MusicBackend for LoggedMusic {
        fn execute(&mut self, command: MusicCommand) {
            log::info!("♪ {command:?}");
        }
    }

    /// Pick a direction away from the nearest threat in the lane ahead
    fn autopilot(snap: &Snapshot) -> Option<InputSignal> {
        let craft = &snap.craft;
        let craft_mid = craft.y + craft.size / 2.0;
        let threat = snap
            .obstacles
            .iter()
            .filter(|o| o.x + o.size > craft.x && o.x < craft.x + craft.size + LOOKAHEAD)
            .filter(|o| o.y < craft.y + craft.size && o.y + o.size > craft.y)
            .min_by(|a, b| a.x.total_cmp(&b.x))?;

        let threat_mid = threat.y + threat.size / 2.0;
        let room_above = craft.y;
        let room_below = snap.height - (craft.y + craft.size);
        let go_up = if threat_mid > craft_mid {
            room_above > craft.size / 2.0 || room_below < threat.size
        } else {
            room_below <= craft.size / 2.0 && room_above >= threat.size
        };
        Some(if go_up {
            InputSignal::MoveUpPressed
        } else {
            InputSignal::MoveDownPressed
        })
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
        let config = match args.next() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(json) => PlayfieldConfig::from_json(&json).unwrap_or_else(|e| {
                    log::warn!("{path}: {e}; using defaults");
                    PlayfieldConfig::default()
                }),
                Err(e) => {
                    log::warn!("Could not read {path}: {e}; using defaults");
                    PlayfieldConfig::default()
                }
            },
            None => PlayfieldConfig::default(),
        };

        let mut session = GameSession::with_viewport(config, seed, 1100.0, 640.0);
        let mut music = Soundtrack::new(LoggedMusic);
        let input = InputQueue::new();
        let listener = input.attach();

        let frames = (MAX_RUN_SECS / SIM_DT) as u32;
        let mut held = None;
        for _ in 0..frames {
            let wanted = autopilot(&session.snapshot());
            if wanted != held {
                input.push(InputSignal::ButtonsReleased);
                if let Some(signal) = wanted {
                    input.push(signal);
                }
                held = wanted;
            }
            session.apply_inputs(&input);
            session.advance(SIM_DT);

            for event in session.drain_events() {
                music.handle(event);
            }
            if !session.is_running() {
                break;
            }
        }
        listener.detach();
        session.apply_inputs(&input);

        let snap = session.snapshot();
        if snap.running {
            log::info!("Autopilot survived {MAX_RUN_SECS}s with score {}", snap.score);
        } else {
            log::info!("Autopilot crashed with score {}", snap.score);
        }
        println!("seed {seed}: score {}", snap.score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Dodge (native) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is sky_dodge::web::start, this is just to satisfy the compiler
}
