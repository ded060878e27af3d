use crate::strings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub time_left_secs: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {<div id="time_left_text_view" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">
        { strings::time_left(props.time_left_secs) }
    </div>}
}
