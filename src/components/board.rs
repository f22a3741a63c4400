use crate::model::Round;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub level: u32,
    pub round: Round,
    /// Changes on every fresh round; re-keys the grid node so tiles are
    /// rebuilt and CSS animations restart.
    pub round_seq: u32,
    pub shaking: bool,
    pub hint: bool,
    pub on_pick: Callback<usize>,
}

/// The N×N tile grid. Everything is derived from the current round: all
/// tiles show the base color except the odd one, and the odd tile carries a
/// temporary outline while a hint is active.
#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let total = Round::tile_count(props.level);
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({}, 1fr); gap:6px; aspect-ratio:1; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:10px;",
        props.level
    );
    let class = if props.shaking { "board shake" } else { "board" };

    html! {
        <div
            key={format!("round-{}", props.round_seq)}
            class={class}
            style={grid_style}
            aria-label="Color grid"
        >
            { for (0..total).map(|i| {
                let is_odd = i == props.round.odd_index;
                let color = if is_odd { props.round.odd } else { props.round.base };
                let outline = if props.hint && is_odd {
                    "outline:3px solid #f0f6fc; outline-offset:-3px;"
                } else {
                    ""
                };
                let style = format!(
                    "background:{}; border:none; border-radius:8px; cursor:pointer; {}",
                    color.css(),
                    outline
                );
                let onclick = {
                    let on_pick = props.on_pick.clone();
                    Callback::from(move |_: MouseEvent| on_pick.emit(i))
                };
                html! {
                    <button
                        type="button"
                        class="cell"
                        {style}
                        aria-label={ if is_odd { "odd square" } else { "square" } }
                        {onclick}
                    ></button>
                }
            }) }
        </div>
    }
}
