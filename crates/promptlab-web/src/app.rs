use leptos::prelude::*;

use crate::components::header::Header;
use crate::pages::playground::PlaygroundPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="content">
                <PlaygroundPage />
            </main>
        </div>
    }
}
