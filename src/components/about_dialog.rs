use crate::strings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AboutDialogProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn AboutDialog(props: &AboutDialogProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:280px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <h3 style="margin:0; font-size:18px;">{ strings::about_title() }</h3>
            <p style="margin:0; line-height:1.4;">{ strings::ABOUT_MESSAGE }</p>
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={close_cb}>{"OK"}</button>
            </div>
        </div>
    </div>}
}
