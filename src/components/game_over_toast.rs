use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::model::GameOver;
use crate::strings;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverToastProps {
    pub game_over: Option<GameOver>,
    pub on_dismiss: Callback<u32>,
}

#[function_component]
pub fn GameOverToast(props: &GameOverToastProps) -> Html {
    // Hide after the toast duration; a newer game-over restarts the clock.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.game_over, move |game_over| {
            let mut timeout = None;
            if let (Some(over), Some(win)) = (*game_over, web_sys::window()) {
                let round = over.round;
                let cb = Closure::wrap(Box::new(move || on_dismiss.emit(round)) as Box<dyn FnMut()>);
                match win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    TOAST_DURATION_MS as i32,
                ) {
                    Ok(id) => timeout = Some((win, id, cb)),
                    Err(e) => log::warn!("Toast timeout not scheduled: {:?}", e),
                }
            }
            move || {
                if let Some((win, id, _cb)) = timeout {
                    win.clear_timeout_with_handle(id);
                }
            }
        });
    }

    let Some(over) = props.game_over else {
        return html! {};
    };
    html! {
        <div style="position:absolute; bottom:48px; left:50%; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:1px solid #30363d; padding:10px 18px; border-radius:18px; text-align:center; z-index:40;">
            { strings::game_over_message(over.final_score) }
        </div>
    }
}
