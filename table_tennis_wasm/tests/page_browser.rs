#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use table_tennis_wasm::{WebScoreKeeper, init_page};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = "
    <div id='game-type-body'></div>
    <input id='player-name-1'><input id='player-name-2'>
    <input id='player-name-3'><input id='player-name-4'>
    <div id='serve-body'></div>
    <span id='team-name-1'></span><span id='team-name-2'></span>
    <span id='set-wins-name-1'></span><span id='set-wins-name-2'></span>
    <span id='score-1'></span><span id='score-2'></span>
    <span id='set-wins-1'></span><span id='set-wins-2'></span>
    <button id='decrement-1'></button><button id='decrement-2'></button>
    <div id='settings-body'></div>
    <p id='settings-status'></p>
    <p id='info-string'></p>
";

fn document() -> web_sys::Document { web_sys::window().unwrap().document().unwrap() }

fn input(id: &str) -> web_sys::HtmlInputElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn text(id: &str) -> String { document().get_element_by_id(id).unwrap().text_content().unwrap() }

fn setup_page() -> WebScoreKeeper {
    document().body().unwrap().set_inner_html(PAGE);
    init_page().unwrap();
    let keeper = WebScoreKeeper::new_keeper();
    keeper.update_state().unwrap();
    keeper
}

#[wasm_bindgen_test]
fn singles_keeps_extra_name_slots_visible_but_disabled() {
    let _keeper = setup_page();
    for id in ["player-name-3", "player-name-4"] {
        let slot = input(id);
        assert!(slot.disabled());
        assert!(!slot.class_name().contains("display-none"));
        assert_eq!(slot.value(), "");
    }
    assert!(!input("player-name-1").disabled());
    assert_eq!(input("player-name-1").value(), "Player 1");
}

#[wasm_bindgen_test]
fn score_buttons_update_board() {
    let mut keeper = setup_page();
    assert!(document().get_element_by_id("decrement-1").unwrap().has_attribute("disabled"));
    keeper.adjust_score(1, 1).unwrap();
    keeper.update_state().unwrap();
    assert_eq!(text("score-1"), "1");
    assert!(!document().get_element_by_id("decrement-1").unwrap().has_attribute("disabled"));

    keeper.set_game_type("double").unwrap();
    keeper.update_state().unwrap();
    assert!(!input("player-name-4").disabled());
    assert_eq!(text("team-name-2"), "Player 3-Player 4");
}
