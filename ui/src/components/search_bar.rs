use crate::components::pico::Button;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// A search field that only reports its query on Search or Enter, so the
/// list below does not refilter on every keystroke.
#[component]
pub fn SearchBar(placeholder: String, on_search: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div {
            role: "group",
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_search.call(query());
                    }
                },
            }
            Button {
                on_click: move |_| on_search.call(query()),
                "Search"
            }
        }
    }
}
