use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub level: u32,
    pub streak: u32,
    pub best: u32,
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let stat_style = "flex:1; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; text-align:center;";
    let key_style = "font-size:11px; opacity:0.7; letter-spacing:1px;";
    let value_style =
        "font-size:18px; font-weight:600; font-variant-numeric:tabular-nums; margin-top:2px;";
    html! {
        <div style="display:flex; gap:10px;">
            <div style={stat_style}>
                <div style={key_style}>{"GRID"}</div>
                <div style={value_style}>{ format!("{0}×{0}", props.level) }</div>
            </div>
            <div style={stat_style}>
                <div style={key_style}>{"STREAK"}</div>
                <div style={value_style}>{ props.streak }</div>
            </div>
            <div style={stat_style}>
                <div style={key_style}>{"BEST"}</div>
                <div style={value_style}>{ props.best }</div>
            </div>
        </div>
    }
}
