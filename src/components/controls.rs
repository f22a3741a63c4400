use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsBarProps {
    pub toast: String,
    pub on_reset: Callback<()>,
    pub on_hint: Callback<()>,
}

/// Footer row: reset button, toast/status line, hint button. The toast only
/// ever shows gameplay feedback, never error text.
#[function_component]
pub fn ControlsBar(props: &ControlsBarProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let hint_cb = {
        let cb = props.on_hint.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let button_style = "background:transparent; border:1px solid #30363d; border-radius:8px; padding:6px 14px; color:inherit; cursor:pointer;";
    html! {
        <div style="display:flex; align-items:center; justify-content:space-between; gap:10px;">
            <button type="button" style={button_style} onclick={reset_cb}>{"reset"}</button>
            <div class="toast" style="font-size:13px; opacity:0.85; text-align:center; flex:1;">
                { props.toast.clone() }
            </div>
            <button type="button" style={button_style} onclick={hint_cb}>{"hint"}</button>
        </div>
    }
}
