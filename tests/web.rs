//! Browser-side checks for the wasm surface. Run with `wasm-pack test`.
#![cfg(target_arch = "wasm32")]

use block_blast::api::{BlockBlast, palette};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn seeded(seed: u32) -> BlockBlast {
    let config = Object::new();
    Reflect::set(&config, &"seed".into(), &JsValue::from(seed)).unwrap();
    BlockBlast::new(config.into()).unwrap()
}

fn field(obj: &JsValue, name: &str) -> JsValue {
    Reflect::get(obj, &name.into()).unwrap()
}

#[wasm_bindgen_test]
fn new_accepts_undefined_config() {
    let game = BlockBlast::new(JsValue::UNDEFINED).unwrap();

    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert!(!game.is_game_over());
    assert_eq!(game.board(), vec![0u8; 64]);
}

#[wasm_bindgen_test]
fn state_exposes_camel_case_fields() {
    let game = seeded(11);
    let state = game.state().unwrap();

    assert_eq!(field(&state, "score").as_f64(), Some(0.0));
    assert_eq!(field(&state, "isGameOver").as_bool(), Some(false));
    let next = field(&state, "nextPiece");
    assert!(field(&next, "color").as_string().is_some());
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
}

#[wasm_bindgen_test]
fn out_of_range_place_returns_false() {
    let mut game = seeded(3);

    assert!(!game.place(8, 8));
    assert!(!game.place(-1, 0));
    assert!(game.try_place(9, 0).is_err());
    assert_eq!(game.board(), vec![0u8; 64]);
}

#[wasm_bindgen_test]
fn reset_clears_board() {
    let mut game = seeded(5);
    assert!(game.place(5, 0));

    game.reset();

    assert_eq!(game.board(), vec![0u8; 64]);
    assert_eq!(game.next_preview().len(), 16);
}

#[wasm_bindgen_test]
fn palette_lists_seven_colors() {
    let colors = Array::from(&palette().unwrap());

    assert_eq!(colors.length(), 7);
    assert_eq!(colors.get(0).as_string().as_deref(), Some("#FF6B6B"));
}
