use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn ImageModal(state: AppState) -> impl IntoView {
    let src = Memo::new(move |_| {
        state
            .session
            .with(|session| session.modal_image().map(|image| image.as_str().to_string()))
    });
    let close = move |_: MouseEvent| state.session.update(|session| session.close_image());

    view! {
        {move || src.get().map(|src| view! {
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <button class="close" on:click=close>"×"</button>
                    <img src=src alt="Full size" />
                </div>
            </div>
        })}
    }
}
