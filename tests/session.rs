//! End-to-end session scenarios

use glam::Vec2;

use sky_dodge::audio::{MusicBackend, MusicCommand, Soundtrack};
use sky_dodge::consts::SIM_DT;
use sky_dodge::platform::{Button, InputQueue, InputSignal};
use sky_dodge::sim::{GameEvent, HitPadding, TickOutcome, confirmed_hit};
use sky_dodge::{GameSession, PlayfieldConfig};

fn quiet() -> PlayfieldConfig {
    PlayfieldConfig {
        spawn_chance: 0.0,
        ..Default::default()
    }
}

#[test]
fn known_miss_and_known_hit() {
    let session = GameSession::new(quiet(), 1);
    let scale = *session.scale();
    let padding = HitPadding::scaled(session.config(), &scale);

    let mut state = session.state().clone();
    state.craft.pos = Vec2::new(100.0, 300.0);
    let craft_box = padding.craft_box(&state.craft, &scale);

    let far = state.obstacles.place(Vec2::new(500.0, 600.0));
    let near = state.obstacles.place(Vec2::new(120.0, 310.0));
    let boxes: Vec<_> = state
        .obstacles
        .iter()
        .map(|o| (o.id, padding.obstacle_box(o, &scale)))
        .collect();

    for (id, obs_box) in boxes {
        let hit = confirmed_hit(&craft_box, &obs_box, padding.min_overlap);
        if id == far {
            assert!(!hit);
        } else if id == near {
            assert!(hit);
        }
    }
}

#[test]
fn reset_from_any_state() {
    let mut session = GameSession::new(PlayfieldConfig::default(), 77);
    session.handle_input(InputSignal::MoveUpPressed);
    for _ in 0..600 {
        session.advance(SIM_DT);
    }
    session.reset();
    session.reset();

    let state = session.state();
    assert_eq!(state.score, 0);
    assert_eq!(state.speed, session.config().initial_speed);
    assert!(state.obstacles.is_empty());
    assert!(state.is_running());
    assert_eq!(state.craft.pos.y, session.scale().height / 2.0);
    assert!(session.is_ticking());
}

#[test]
fn frozen_after_game_over_until_reset() {
    let mut session = GameSession::new(quiet(), 3);
    session.state_mut().craft.pos = Vec2::new(100.0, 300.0);
    session.state_mut().obstacles.place(Vec2::new(128.005, 310.0));
    assert!(matches!(session.step(), TickOutcome::Crashed { .. }));

    let frozen = session.snapshot();
    session.handle_input(InputSignal::MoveDownPressed);
    for _ in 0..120 {
        session.advance(SIM_DT);
        session.step();
        session.step_movement();
    }
    assert_eq!(session.snapshot(), frozen);

    session.handle_input(InputSignal::RequestReset);
    assert!(session.is_running());
    assert_eq!(session.score(), 0);
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut session = GameSession::new(PlayfieldConfig::default(), seed);
        session.state_mut().craft.pos.y = 0.0;
        for _ in 0..900 {
            session.advance(SIM_DT);
        }
        session.snapshot()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn attached_input_drives_the_craft() {
    let mut session = GameSession::new(quiet(), 1);
    let queue = InputQueue::new();
    let guard = queue.attach();

    queue.push_key("ArrowUp", true);
    session.apply_inputs(&queue);
    for _ in 0..10 {
        session.step_movement();
    }
    assert_eq!(session.state().craft.pos.y, 250.0);

    queue.push_button(Button::Down, true);
    session.apply_inputs(&queue);
    session.step_movement();
    // Up then down cancel out mid-field
    assert_eq!(session.state().craft.pos.y, 250.0);

    // Detaching releases held buttons
    drop(guard);
    session.apply_inputs(&queue);
    assert!(session.state().intent.is_idle());
    assert!(!queue.push_key("ArrowDown", true));
}

#[derive(Debug, Default)]
struct Recorder(Vec<MusicCommand>);

impl MusicBackend for Recorder {
    fn execute(&mut self, command: MusicCommand) {
        self.0.push(command);
    }
}

#[test]
fn music_follows_game_lifecycle() {
    let mut session = GameSession::new(quiet(), 9);
    let mut music = Soundtrack::new(Recorder::default());

    session.handle_input(InputSignal::MoveUpPressed);
    session.state_mut().craft.pos = Vec2::new(100.0, 300.0);
    session.state_mut().obstacles.place(Vec2::new(128.005, 310.0));
    session.step();
    session.reset();

    let events = session.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::GameStarted,
            GameEvent::GameOver { score: 1 },
            GameEvent::Reset
        ]
    );
    for event in events {
        music.handle(event);
    }
    assert_eq!(
        music.backend().0,
        vec![MusicCommand::Play, MusicCommand::Pause, MusicCommand::Restart]
    );
}

#[test]
fn fixed_variant_ignores_resize() {
    let mut session = GameSession::new(PlayfieldConfig::fixed(), 1);
    session.on_resize(400.0, 300.0);
    let snap = session.snapshot();
    assert_eq!(snap.width, 1100.0);
    assert_eq!(snap.craft.x, 100.0);
}
