use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    query_signal: Signal<String>,
    placeholder: &'static str,
    // disables the submit button and swaps its label while a search is out
    busy: bool,
    onsearch: EventHandler<String>,
}

// the query is only handed up on submit, typing just updates the signal
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut query_signal = props.query_signal;
    let placeholder = props.placeholder;
    let busy = props.busy;
    let onsearch = props.onsearch;

    rsx! {
        div { class: "search-bar",
            form {
                class: "search-form",
                onsubmit: move |_| {
                    onsearch.call(query_signal());
                },
                div { class: "search-input",
                    input {
                        class: "form-input",
                        name: "search_filter",
                        r#type: "text",
                        placeholder: "{placeholder}",
                        value: "{query_signal()}",
                        oninput: move |event| query_signal.set(event.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy {
                        span { class: "spinner" }
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }
        }
    }
}
