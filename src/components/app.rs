use super::{board::Board, controls::ControlsBar, header::Header, hud::HudPanel};
use crate::model::{GameAction, GameState, hint_visible};
use crate::util::clog;
use crate::{host, storage};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// How long the hint outline stays on the odd tile.
const HINT_MS: i32 = 600;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| GameState::boot(storage::load_best(), "ready ✓"));
    // Hint bookkeeping lives outside the reducer: it is a transient UI
    // effect, not gameplay state. It records the round it was issued for so
    // the outline can never carry over and expose the next round's odd tile.
    let hint_round = use_state(|| None::<u32>);

    // Host handshake. Detection may resolve well after first render, so the
    // result is applied through a dispatch rather than blocking boot.
    // ready() is signalled exactly once, whatever detection said.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let is_mini = host::detect_host_environment().await;
                clog(if is_mini {
                    "which-shade: mini app host detected"
                } else {
                    "which-shade: running as plain web page"
                });
                state.dispatch(GameAction::SetEnvironment { is_mini });
                host::signal_ready().await;
            });
            || ()
        });
    }

    // Persist best whenever it moves.
    {
        let best = state.best;
        use_effect_with(best, move |_| {
            if best > 0 {
                storage::save_best(best);
            }
            || ()
        });
    }

    let on_pick = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(GameAction::Pick { index }))
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(GameAction::Reset))
    };
    let on_hint = {
        let state = state.clone();
        let hint_round = hint_round.clone();
        Callback::from(move |_| {
            state.dispatch(GameAction::ShowHint);
            hint_round.set(Some(state.round_seq));
            // One-shot removal; overlapping hints both clearing is fine.
            if let Some(window) = web_sys::window() {
                let hint_round = hint_round.clone();
                let clear = Closure::once_into_js(move || hint_round.set(None));
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    clear.unchecked_ref(),
                    HINT_MS,
                );
            }
        })
    };

    html! {
        <div style="max-width:520px; margin:0 auto; padding:16px; display:flex; flex-direction:column; gap:14px;">
            <Header is_mini={state.is_mini} />
            <HudPanel level={state.level} streak={state.streak} best={state.best} />
            <Board
                level={state.level}
                round={state.round}
                round_seq={state.round_seq}
                shaking={state.shaking}
                hint={hint_visible(*hint_round, state.round_seq)}
                on_pick={on_pick}
            />
            <ControlsBar toast={state.toast.clone()} on_reset={on_reset} on_hint={on_hint} />
        </div>
    }
}
