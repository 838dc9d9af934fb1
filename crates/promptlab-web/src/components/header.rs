use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Prompt Playground"</h1>
            <span class="subtitle">"Run one prompt under many sampling configurations"</span>
        </header>
    }
}
