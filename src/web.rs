use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Storage};

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::GameSession;
use crate::logging;
use crate::persist::{self, SaveSlot};
use crate::view::{BoardRenderer, Button, CoordinateConverter};

/// Browser front end: owns the session and draws it onto a `<canvas>`.
///
/// The page forwards clicks with `handle_click(event.offsetX, event.offsetY)`.
#[wasm_bindgen]
pub struct OthelloApp {
    session: GameSession,
    config: AppConfig,
    converter: CoordinateConverter,
    pass_button: Button,
    renderer: BoardRenderer,
    context: CanvasRenderingContext2d,
    storage: Option<Storage>,
}

#[wasm_bindgen]
impl OthelloApp {
    /// `config` may be `undefined` or a partial `AppConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<OthelloApp, JsError> {
        let config = parse_config(config)?;
        logging::init(config.level()?);

        let context = canvas_context(canvas_id)?;
        let storage = local_storage();
        if storage.is_none() {
            log::warn!("localStorage unavailable; the game will not be saved");
        }

        let session = match storage.as_ref().map(|s| persist::load(s, &config.storage_key)) {
            Some(Ok(Some(saved))) => match GameSession::from_saved(&saved) {
                Ok(session) => {
                    log::info!("restored saved game");
                    session
                }
                Err(e) => {
                    log::warn!("discarding saved game: {e}");
                    GameSession::new()
                }
            },
            Some(Err(e)) => {
                log::warn!("discarding saved game: {e}");
                GameSession::new()
            }
            Some(Ok(None)) | None => GameSession::new(),
        };

        let app = OthelloApp {
            session,
            converter: CoordinateConverter::from_config(&config),
            pass_button: Button::new(config.pass_button),
            renderer: BoardRenderer::new(&config),
            config,
            context,
            storage,
        };
        app.draw()?;
        Ok(app)
    }

    /// Handles a click at canvas offset `(x, y)`. Returns `true` if a stone was placed.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Result<bool, JsError> {
        if self.pass_button.contains(x, y) {
            self.pass()?;
        }

        let target = self.converter.pixel_to_tile(x, y);
        if self.session.play(target).is_err() {
            return Ok(false);
        }

        self.save();
        self.draw()?;
        Ok(true)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        self.session.pass();
        self.save();
        self.draw()
    }

    /// Starts a new game and forgets the saved one.
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.session = GameSession::new();
        if let Some(storage) = self.storage.as_mut()
            && let Err(e) = SaveSlot::clear(storage, &self.config.storage_key)
        {
            log::warn!("failed to clear saved game: {e}");
        }
        self.draw()
    }

    pub fn draw(&self) -> Result<(), JsError> {
        let mut context = self.context.clone();
        self.renderer
            .draw(&mut context, self.session.board())
            .map_err(|e| JsError::new(&format!("draw failed: {e:?}")))
    }

    /// Current `GameState` as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.to_game_state())?)
    }
}

impl OthelloApp {
    /// Persistence failures are logged, never fatal to play.
    fn save(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        let saved = self.session.to_saved();
        if let Err(e) = persist::save(storage, &self.config.storage_key, &saved) {
            log::warn!("failed to save game: {e}");
        }
    }
}

fn parse_config(value: JsValue) -> Result<AppConfig, ConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn canvas_context(canvas_id: &str) -> Result<CanvasRenderingContext2d, JsError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("no document available"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsError::new(&format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsError::new(&format!("'{canvas_id}' is not a canvas")))?;

    canvas
        .get_context("2d")
        .map_err(|e| JsError::new(&format!("getContext failed: {e:?}")))?
        .ok_or_else(|| JsError::new("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsError::new("unexpected context type"))
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
