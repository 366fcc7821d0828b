use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::AppState;

/// Экран входа. Пароля нет: пользователь создаётся локально.
#[component]
pub(crate) fn LoginPanel(state: AppState) -> impl IntoView {
    let handle = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (h, n, b) = (handle.get(), display_name.get(), bio.get());
        state.session.update(|session| {
            session.login(&h, &n, &b);
        });
    };

    view! {
        <section class="login">
            <h1>"SocialVibe"</h1>
            <p class="subtitle">"Connect with the whole world"</p>

            <form on:submit=on_submit>
                <input
                    placeholder="Username"
                    prop:value=move || handle.get()
                    on:input=move |ev| handle.set(event_target_value(&ev))
                />
                <input
                    placeholder="Full name"
                    prop:value=move || display_name.get()
                    on:input=move |ev| display_name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Describe yourself..."
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Join"</button>
            </form>
        </section>
    }
}
