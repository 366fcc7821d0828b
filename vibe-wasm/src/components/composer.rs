use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, HtmlInputElement};

use crate::state::AppState;
use crate::upload;

#[component]
pub(crate) fn Composer(state: AppState) -> impl IntoView {
    let draft = move || state.session.with(|session| session.view().draft_text().to_string());
    let preview = Memo::new(move |_| {
        state
            .session
            .with(|session| session.view().draft_image().map(|image| image.as_str().to_string()))
    });
    let can_publish = move || state.session.with(|session| session.view().can_publish());

    let on_file = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        spawn_local(async move {
            match upload::read_image(&input).await {
                Ok(Some(image)) => {
                    state.session.update(|session| session.view_mut().attach_image(image));
                    state.clear_error();
                }
                Ok(None) => {}
                Err(err) => state.set_error(err),
            }
            // иначе повторный выбор того же файла не вызовет change
            input.set_value("");
        });
    };

    view! {
        <section class="composer">
            <textarea
                placeholder="Share what you're thinking..."
                prop:value=draft
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.session.update(|session| session.view_mut().set_draft_text(text));
                }
            ></textarea>

            {move || preview.get().map(|src| view! {
                <div class="preview">
                    <img src=src alt="Preview" />
                    <button
                        class="remove"
                        on:click=move |_| state.session.update(|session| session.view_mut().remove_image())
                    >
                        "×"
                    </button>
                </div>
            })}

            <div class="composer-actions">
                <label class="photo">
                    <input type="file" accept="image/*" class="hidden" on:change=on_file />
                    "📷 Photo"
                </label>
                <button
                    class="publish"
                    disabled=move || !can_publish()
                    on:click=move |_| state.session.update(|session| {
                        session.publish();
                    })
                >
                    "Publish ✨"
                </button>
            </div>
        </section>
    }
}
