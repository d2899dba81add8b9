use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::form::model::Field;

#[derive(Properties, PartialEq)]
struct LabelProps {
    text: AttrValue,
    required: bool,
}

#[function_component(FieldLabel)]
fn field_label(props: &LabelProps) -> Html {
    html! {
        <label class="field-label">
            {&props.text}
            if props.required {
                <>{" "}<span class="required-mark">{"*"}</span></>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub label: AttrValue,
    pub field: Field,
    pub value: AttrValue,
    pub on_change: Callback<(Field, String)>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div>
            <FieldLabel text={props.label.clone()} required={props.required} />
            <input
                type={props.input_type.clone()}
                name={props.field.as_str()}
                value={props.value.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                class="field-input"
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub field: Field,
    pub value: AttrValue,
    pub options: &'static [&'static str],
    pub on_change: Callback<(Field, String)>,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((field, select.value()));
        })
    };

    html! {
        <div>
            <FieldLabel text={props.label.clone()} required={props.required} />
            <select
                name={props.field.as_str()}
                required={props.required}
                class="field-input field-select"
                {onchange}
            >
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                { for props.options.iter().map(|opt| html! {
                    <option key={*opt} value={*opt} selected={props.value.as_str() == *opt}>{*opt}</option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub field: Field,
    pub value: AttrValue,
    pub on_change: Callback<(Field, String)>,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(3)]
    pub rows: u32,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((field, area.value()));
        })
    };

    html! {
        <div>
            <FieldLabel text={props.label.clone()} required={props.required} />
            <textarea
                name={props.field.as_str()}
                value={props.value.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                rows={props.rows.to_string()}
                class="field-input field-textarea"
                {oninput}
            />
        </div>
    }
}
