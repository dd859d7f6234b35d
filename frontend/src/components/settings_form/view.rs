//! View function for the settings form component.
//!
//! Renders one input per registry field with its `name` and `data-type`
//! attributes, the required-field error labels, a submit button and the
//! `status` element.

use common::form::{FieldDescriptor, FieldKind};
use common::sync::SyncState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SettingsForm;

pub fn view(component: &SettingsForm, ctx: &Context<SettingsForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        // the page must never fall back to a native form post
        e.prevent_default();
        Msg::Submit
    });
    let loading = component.controller.state() == SyncState::Loading;

    html! {
        <form id="settings" novalidate={true} {onsubmit}>
            { for component
                .controller
                .registry()
                .fields()
                .iter()
                .enumerate()
                .map(|(index, field)| view_field(component, ctx, index, field)) }
            <button type="submit" disabled={loading}>{"Save"}</button>
            <div id="status">{ component.controller.status() }</div>
        </form>
    }
}

fn view_field(
    component: &SettingsForm,
    ctx: &Context<SettingsForm>,
    index: usize,
    field: &FieldDescriptor,
) -> Html {
    let link = ctx.link();
    let id = format!("field-{}", index);
    let invalid = component.invalid.contains(&field.name);
    let data_type = field.declared_type.annotation();

    let input = match field.kind {
        FieldKind::Text => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::EditText(index, input.value())
            });
            html! {
                <input
                    type="text"
                    id={id.clone()}
                    name={field.name.clone()}
                    data-type={data_type}
                    value={field.text.clone()}
                    class={classes!(invalid.then_some("error"))}
                    {oninput}
                />
            }
        }
        FieldKind::Checkbox | FieldKind::Radio => {
            let onchange = link.callback(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::SetChecked(index, input.checked())
            });
            html! {
                <input
                    type={field.kind.input_type()}
                    id={id.clone()}
                    name={field.name.clone()}
                    data-type={data_type}
                    value={field.text.clone()}
                    checked={field.checked}
                    class={classes!(invalid.then_some("error"))}
                    {onchange}
                />
            }
        }
    };

    html! {
        <div class="field">
            <label for={id.clone()}>{ component.label(index) }</label>
            { input }
            if invalid {
                <label class="error" for={id}>{"This field is required."}</label>
            }
        </div>
    }
}
