use crate::strings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: u32,
}

#[function_component]
pub fn ScorePanel(props: &ScorePanelProps) -> Html {
    html! {
        <div id="game_score_text_view" style="font-size:20px; font-weight:600; color:#58a6ff; font-variant-numeric:tabular-nums;">
            { strings::your_score(props.score) }
        </div>
    }
}
