//! Update function for the settings form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render. Network requests
//! are spawned here and report back through `Msg::Loaded` and `Msg::Submitted`.

use common::sync::{SettingsBackend, SubmitStep};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SettingsForm;

pub fn update(component: &mut SettingsForm, ctx: &Context<SettingsForm>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            if let Err(err) = component.controller.finish_load(result) {
                error!(format!("Error loading settings: {}", err));
            }
            true
        }
        Msg::EditText(index, text) => {
            component.controller.registry_mut().set_text(index, text);
            component.revalidate();
            true
        }
        Msg::SetChecked(index, checked) => {
            component.controller.registry_mut().set_checked(index, checked);
            component.revalidate();
            true
        }
        Msg::Submit => {
            match component.controller.begin_submit() {
                SubmitStep::Send { ticket, settings } => {
                    component.invalid.clear();
                    let link = ctx.link().clone();
                    let backend = component.backend.clone();
                    spawn_local(async move {
                        let result = backend.store(&settings).await;
                        if result.is_ok() {
                            log!(settings.to_json_string().unwrap_or_default());
                        }
                        link.send_message(Msg::Submitted(ticket, result));
                    });
                }
                SubmitStep::Invalid(outcome) => component.invalid = outcome.failed,
                SubmitStep::Rejected(err) => error!(err.to_string()),
                SubmitStep::NotReady => return false,
            }
            true
        }
        Msg::Submitted(ticket, result) => {
            if let Err(err) = &result {
                error!(format!("Error saving settings: {}", err));
            }
            component.controller.finish_submit(ticket, result)
        }
    }
}
