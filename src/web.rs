//! Browser bindings
//!
//! JavaScript owns the DOM listeners, the animation frame loop and the audio
//! element; it forwards raw events here and renders the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::audio::{MusicBackend, MusicCommand, Soundtrack};
use crate::consts::SIM_DT;
use crate::platform::{Attachment, Button, InputQueue, InputSignal};
use crate::{GameSession, PlayfieldConfig};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Sky Dodge (web) starting...");
}

/// Music commands buffered for JS to apply to its `<audio>` element
#[derive(Debug, Default)]
struct PendingMusic(Vec<MusicCommand>);

impl MusicBackend for PendingMusic {
    fn execute(&mut self, command: MusicCommand) {
        self.0.push(command);
    }
}

#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    input: InputQueue,
    listener: Option<Attachment>,
    music: Soundtrack<PendingMusic>,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` may be empty for the default playfield
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32, config_json: &str) -> WebGame {
        let config = if config_json.trim().is_empty() {
            PlayfieldConfig::default()
        } else {
            PlayfieldConfig::from_json(config_json).unwrap_or_else(|e| {
                log::warn!("{e}; using defaults");
                PlayfieldConfig::default()
            })
        };
        let seed = js_sys::Date::now() as u64;
        WebGame {
            session: GameSession::with_viewport(config, seed, viewport_width, viewport_height),
            input: InputQueue::new(),
            listener: None,
            music: Soundtrack::new(PendingMusic::default()),
            last_time: None,
        }
    }

    /// Call when JS registers its key/touch listeners
    pub fn attach(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(self.input.attach());
        }
    }

    /// Call when JS removes its listeners (component unmount)
    pub fn detach(&mut self) {
        self.listener = None;
    }

    pub fn key_down(&self, key: &str) {
        self.input.push_key(key, true);
    }

    pub fn key_up(&self, key: &str) {
        self.input.push_key(key, false);
    }

    /// On-screen button press (`up` selects the upper button)
    pub fn button_down(&self, up: bool) {
        let button = if up { Button::Up } else { Button::Down };
        self.input.push_button(button, true);
    }

    pub fn button_up(&self) {
        self.input.push_button(Button::Up, false);
    }

    pub fn request_reset(&self) {
        self.input.push(InputSignal::RequestReset);
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.session.on_resize(viewport_width, viewport_height);
    }

    /// Advance to `time_ms` (requestAnimationFrame timestamp) and return the
    /// snapshot as JSON
    pub fn frame(&mut self, time_ms: f64) -> String {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);

        self.session.apply_inputs(&self.input);
        self.session.advance(dt);
        for event in self.session.drain_events() {
            self.music.handle(event);
        }
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }

    /// Music commands since the last call, as a JSON array of names
    pub fn take_music_commands(&mut self) -> String {
        let commands: Vec<&'static str> = std::mem::take(&mut self.music.backend_mut().0)
            .into_iter()
            .map(|c| match c {
                MusicCommand::Play => "play",
                MusicCommand::Pause => "pause",
                MusicCommand::Restart => "restart",
            })
            .collect();
        serde_json::to_string(&commands).unwrap_or_default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.music.set_muted(muted);
    }
}
