use crate::strings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuBarProps {
    pub on_show_about: Callback<()>,
}

#[function_component]
pub fn MenuBar(props: &MenuBarProps) -> Html {
    let about_cb = {
        let cb = props.on_show_about.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:0; left:0; right:0; display:flex; justify-content:space-between; align-items:center; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d; padding:8px 12px;">
        <span style="font-weight:600;">{ strings::APP_NAME }</span>
        <button onclick={about_cb}>{ strings::ABOUT_ITEM }</button>
    </div>}
}
