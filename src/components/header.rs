use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub is_mini: bool,
}

/// Brand block plus the WEB/MINI environment pill. The pill flips whenever
/// host detection resolves; it has no gameplay effect.
#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let pill_style = if props.is_mini {
        "padding:4px 10px; border-radius:999px; font-size:12px; font-weight:600; background:#1f6feb; border:1px solid #58a6ff;"
    } else {
        "padding:4px 10px; border-radius:999px; font-size:12px; font-weight:600; background:#21262d; border:1px solid #30363d;"
    };
    html! {
        <div style="display:flex; align-items:center; justify-content:space-between;">
            <div>
                <div style="font-size:20px; font-weight:700;">{"Which Shade?"}</div>
                <div style="font-size:12px; opacity:0.7;">{"tap the square that feels off"}</div>
            </div>
            <div style={pill_style}>{ if props.is_mini { "MINI" } else { "WEB" } }</div>
        </div>
    }
}
