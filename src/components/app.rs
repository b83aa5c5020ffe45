use super::player::Player;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <header>
            <h1>"Player Greeting"</h1>
        </header>
        <main>
            <Player />
        </main>
    }
}
