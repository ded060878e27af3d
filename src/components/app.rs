use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    about_dialog::AboutDialog, game_over_toast::GameOverToast, menu_bar::MenuBar,
    score_panel::ScorePanel, tap_button::TapButton, time_display::TimeDisplay,
};
use crate::config::GameConfig;
use crate::countdown::{Countdown, CountdownHandle};
use crate::model::{GameAction, GameState, Snapshot};
use crate::storage;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| {
        let state = GameState::initialize(GameConfig::default(), storage::take_snapshot_or_log());
        log::debug!("App created. Score is {}", state.score);
        state
    });
    let timer = use_mut_ref(|| None::<CountdownHandle>);
    let show_about = use_state(|| false);

    // One timer per countdown plan; a new plan drops the previous timer.
    {
        let game = game.clone();
        let timer = timer.clone();
        let interval_ms = game.config.countdown_interval_ms;
        use_effect_with(game.countdown, move |plan| {
            if plan.running {
                let on_tick = {
                    let game = game.clone();
                    Callback::from(move |remaining_ms: u32| {
                        game.dispatch(GameAction::Tick { remaining_ms })
                    })
                };
                let on_finish = {
                    let game = game.clone();
                    Callback::from(move |_| game.dispatch(GameAction::Finish))
                };
                match Countdown::new(plan.duration_ms, interval_ms, on_tick, on_finish).start() {
                    Ok(handle) => *timer.borrow_mut() = Some(handle),
                    Err(e) => log::error!("Countdown failed to start: {}", e),
                }
            }
            move || {
                if let Some(mut handle) = timer.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    // Page lifecycle: pagehide is the teardown, pageshow(persisted) the recreate.
    // The reducer holds the current state, so the snapshot is taken there.
    {
        let game = game.clone();
        let timer = timer.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let mut listeners: Vec<(&'static str, Closure<dyn FnMut(web_sys::PageTransitionEvent)>)> =
                Vec::new();

            if let Some(win) = window.clone() {
                let hide_cb = {
                    let game = game.clone();
                    let timer = timer.clone();
                    Closure::wrap(Box::new(move |_e: web_sys::PageTransitionEvent| {
                        if let Some(mut handle) = timer.borrow_mut().take() {
                            handle.cancel();
                        }
                        let save = Callback::from(|snapshot: Snapshot| {
                            if let Err(e) = storage::save_snapshot(&snapshot) {
                                log::error!("Could not save game: {}", e);
                            }
                        });
                        game.dispatch(GameAction::Suspend { save });
                    }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>)
                };
                let show_cb = {
                    let game = game.clone();
                    Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
                        if !e.persisted() {
                            return;
                        }
                        // Without a stored copy the suspended game resumes from memory.
                        let saved = storage::take_snapshot_or_log();
                        game.dispatch(GameAction::Resume { saved });
                    }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>)
                };
                for (name, cb) in [("pagehide", hide_cb), ("pageshow", show_cb)] {
                    match win.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
                        Ok(()) => listeners.push((name, cb)),
                        Err(e) => log::warn!("Could not listen for {}: {:?}", name, e),
                    }
                }
            }

            move || {
                if let Some(win) = window {
                    for (name, cb) in listeners {
                        let _ = win
                            .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                    }
                }
                if let Some(mut handle) = timer.borrow_mut().take() {
                    handle.cancel();
                }
                log::debug!("App destroyed.");
            }
        });
    }

    let on_tap = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Tap))
    };
    let on_dismiss = {
        let game = game.clone();
        Callback::from(move |round: u32| game.dispatch(GameAction::DismissGameOver { round }))
    };
    let open_about = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(true))
    };
    let close_about = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(false))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px;">
            <MenuBar on_show_about={open_about} />
            <div style="display:flex; gap:32px;">
                <ScorePanel score={game.score} />
                <TimeDisplay time_left_secs={game.time_left_secs} />
            </div>
            <TapButton on_tap={on_tap} />
            <GameOverToast game_over={game.game_over} on_dismiss={on_dismiss} />
            <AboutDialog show={*show_about} on_close={close_about} />
        </div>
    }
}
