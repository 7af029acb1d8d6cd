//! The add/edit dialog and its form inputs.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    pub children: Children,
}

/// Closes on the ×, on Cancel and on a click on the backdrop.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop.
    let on_content_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="modal" onclick={on_close.clone()}>
            <div class="modal-content" onclick={on_content_click}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="close-btn" aria-label="Close" onclick={on_close.clone()}>{"×"}</button>
                </div>
                <form onsubmit={on_submit}>
                    { props.children.clone() }
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={on_close}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.name.clone()}>{ label_text(&props.label, props.required) }</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                required={props.required}
                step={props.step.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub text: AttrValue,
}

impl SelectOption {
    pub fn new(value: impl Into<AttrValue>, text: impl Into<AttrValue>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.name.clone()}>{ label_text(&props.label, props.required) }</label>
            <select id={props.name.clone()} name={props.name.clone()} required={props.required} {onchange}>
                { for props.options.iter().map(|option| html! {
                    <option value={option.value.clone()} selected={option.value == props.value}>
                        { option.text.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}
