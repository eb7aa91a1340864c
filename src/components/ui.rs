use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const UI_CSS: &str = r#"
.field-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.9rem 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 10px;
    color: #fff;
    font-size: 1rem;
    font-family: inherit;
    transition: border-color 0.2s ease, background 0.2s ease;
}
.field-input::placeholder {
    color: rgba(255, 255, 255, 0.45);
}
.field-input:focus {
    outline: none;
    border-color: rgba(255, 255, 255, 0.4);
    background: rgba(255, 255, 255, 0.08);
}
.field-input[aria-invalid="true"] {
    border-color: #f87171;
}
.field-error {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: #f87171;
}
.ui-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 1.5rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 10px;
    color: #fff;
    font-size: 1.1rem;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s ease;
}
.ui-button:hover:not(:disabled) {
    background: rgba(255, 255, 255, 0.2);
    transform: scale(1.05);
    box-shadow: 0 10px 20px rgba(255, 255, 255, 0.1);
}
.ui-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s linear infinite;
}
.spinner.large {
    width: 48px;
    height: 48px;
    border-width: 4px;
}
.section-loader {
    min-height: 400px;
    display: flex;
    align-items: center;
    justify-content: center;
}
@keyframes spin { to { transform: rotate(360deg); } }
"#;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let error_id = format!("{}-error", props.name);

    html! {
        <div>
            <input
                class="field-input"
                type={props.input_type.clone()}
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required=true
                aria-invalid={if props.error.is_some() { "true" } else { "false" }}
                aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                {oninput}
            />
            <FieldError id={error_id} error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(6)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };
    let error_id = format!("{}-error", props.name);

    html! {
        <div>
            <textarea
                class="field-input"
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                rows={props.rows.to_string()}
                required=true
                aria-invalid={if props.error.is_some() { "true" } else { "false" }}
                aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                {oninput}
            />
            <FieldError id={error_id} error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FieldErrorProps {
    id: String,
    error: Option<AttrValue>,
}

#[function_component(FieldError)]
fn field_error(props: &FieldErrorProps) -> Html {
    match &props.error {
        Some(message) => html! { <p id={props.id.clone()} class="field-error">{ message.clone() }</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("ui-button", props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[function_component(SectionLoader)]
pub fn section_loader() -> Html {
    html! {
        <div class="section-loader">
            <span class="spinner large"></span>
        </div>
    }
}
