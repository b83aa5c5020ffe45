use crate::greeting::EnteredName;
use anyhow::{Context, Result};
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Reactive holder for the confirmed name.
#[derive(Debug, Clone, Copy)]
pub struct PlayerName {
    entered: RwSignal<EnteredName>,
}

impl Default for PlayerName {
    fn default() -> Self {
        Self {
            entered: RwSignal::new(EnteredName::default()),
        }
    }
}

impl PlayerName {
    pub fn confirm(&self, raw: String) {
        log!("Set name: {raw:?}");
        self.entered.update(|name| name.confirm(raw));
    }

    /// Tracked read, for use inside the view.
    pub fn greeting(&self) -> String {
        self.entered.with(EnteredName::greeting)
    }
}

/// Read the field's content as it is right now, without subscribing to it.
fn read_input(node: NodeRef<html::Input>) -> Result<String> {
    let input: HtmlInputElement = node
        .get_untracked()
        .context("player name input is not mounted")?;
    Ok(input.value())
}

/// Greets the player by whatever name was last confirmed.
///
/// The input is uncontrolled: keystrokes are not tracked, and the field is
/// only read when "Set Name" is clicked.
#[component]
pub fn Player() -> impl IntoView {
    let name = PlayerName::default();
    let name_input: NodeRef<html::Input> = NodeRef::new();

    let on_confirm = move |_ev: MouseEvent| match read_input(name_input) {
        Ok(raw) => name.confirm(raw),
        Err(err) => warn!("{err:#}"),
    };

    view! {
        <section id="player">
            <h2>{move || name.greeting()}</h2>
            <p>
                <input type="text" node_ref=name_input />
                <button on:click=on_confirm>"Set Name"</button>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(name: &PlayerName) -> String {
        name.entered.with_untracked(EnteredName::greeting)
    }

    #[test]
    fn test_player_name() {
        let name = PlayerName::default();
        assert_eq!(shown(&name), "Welcome unknown entity");
        name.confirm("Alice".to_string());
        assert_eq!(shown(&name), "Welcome Alice");
        name.confirm("Bob".to_string());
        assert_eq!(shown(&name), "Welcome Bob");
        name.confirm(String::new());
        assert_eq!(shown(&name), "Welcome ");
    }

    #[test]
    fn test_copies_share_state() {
        // the click handler owns a copy of the holder the heading reads from
        let name = PlayerName::default();
        let handler_copy = name;
        handler_copy.confirm(" x ".to_string());
        assert_eq!(shown(&name), "Welcome  x ");
    }

    #[test]
    fn test_unmounted_input_is_an_error() {
        let node: NodeRef<html::Input> = NodeRef::new();
        let err = read_input(node).unwrap_err();
        assert!(err.to_string().contains("not mounted"));
    }
}
