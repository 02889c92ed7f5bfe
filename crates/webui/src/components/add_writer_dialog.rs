use yew::prelude::*;

/// Returns the trimmed name, or `None` when the input is blank.
/// The Add button stays disabled until this returns `Some`.
fn normalized_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[derive(Properties, PartialEq)]
pub struct AddWriterDialogProps {
    /// Emitted with the raw input value; the parent closes the dialog only
    /// on a successful request, so failed submissions keep the input intact.
    pub on_submit: Callback<String>,
    pub on_cancel: Callback<()>,
}

#[function_component(AddWriterDialog)]
pub fn add_writer_dialog(props: &AddWriterDialogProps) -> Html {
    let name = use_state(String::new);

    let oninput = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit((*name).clone()))
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>{"Add New Writer"}</h3>
                <input
                    type="text"
                    placeholder="Writer name"
                    value={(*name).clone()}
                    {oninput}
                />
                <div class="dialog-actions">
                    <button class="button-secondary" onclick={oncancel}>{"Cancel"}</button>
                    <button
                        class="button-primary"
                        onclick={onsubmit}
                        disabled={normalized_name(&name).is_none()}
                    >
                        {"Add"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::normalized_name;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(normalized_name(""), None);
        assert_eq!(normalized_name("  "), None);
        assert_eq!(normalized_name("\t\n"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalized_name("Jane Doe"), Some("Jane Doe"));
        assert_eq!(normalized_name("  Jane Doe "), Some("Jane Doe"));
    }
}
