use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::game::{GameInstance, Phase};
use crate::piece::Color;

/// Engine handle owned by the page script.
#[wasm_bindgen]
pub struct BlockBlast {
    game: GameInstance,
}

#[wasm_bindgen]
impl BlockBlast {
    /// `config` may be `undefined`, `null`, or an object such as `{ seed: 7 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BlockBlast, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            from_value(config)?
        };
        Ok(Self {
            game: GameInstance::from_config(&config),
        })
    }

    /// Places the current piece. `false` leaves the game untouched.
    pub fn place(&mut self, row: i32, col: i32) -> bool {
        self.game.place(row, col).is_ok()
    }

    /// Places the current piece and returns the outcome object, or throws
    /// the rejection reason.
    #[wasm_bindgen(js_name = tryPlace)]
    pub fn try_place(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let outcome = self
            .game
            .place(row, col)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        to_value(&outcome).map_err(Into::into)
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.game.to_game_state()).map_err(Into::into)
    }

    #[wasm_bindgen(js_name = finalResult)]
    pub fn final_result(&self) -> Result<JsValue, JsValue> {
        to_value(&self.game.to_game_result()).map_err(Into::into)
    }

    pub fn board(&self) -> Vec<u8> {
        self.game.board().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = nextPreview)]
    pub fn next_preview(&self) -> Vec<u8> {
        self.game.preview_cells()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn level(&self) -> u32 {
        self.game.level()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.phase() == Phase::GameOver
    }
}

/// Hex colors indexed by `cell value - 1`.
#[wasm_bindgen]
pub fn palette() -> Result<JsValue, JsValue> {
    let hex: Vec<&str> = Color::ALL.iter().map(|c| c.hex()).collect();
    to_value(&hex).map_err(Into::into)
}
