use crate::strings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TapButtonProps {
    pub on_tap: Callback<()>,
}

/// The button bounces on every tap; re-keying the wrapper restarts the CSS animation.
#[function_component(TapButton)]
pub fn tap_button(props: &TapButtonProps) -> Html {
    let taps = use_state(|| 0_u64);
    let tap_cb = {
        let cb = props.on_tap.clone();
        let taps = taps.clone();
        Callback::from(move |_: MouseEvent| {
            taps.set(taps.wrapping_add(1));
            cb.emit(())
        })
    };
    let class = if *taps > 0 { "bounce" } else { "" };
    html! {
        <div key={format!("tap-{}", *taps)} class={class}>
            <button id="tap_me_button" onclick={tap_cb} style="padding:24px 48px; font-size:24px; font-weight:600; border-radius:12px; touch-action:manipulation;">
                { strings::TAP_ME }
            </button>
        </div>
    }
}
