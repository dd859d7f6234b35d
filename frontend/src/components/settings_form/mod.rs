//! Device settings form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SettingsFormProps`, `SettingsForm`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the device settings and hand them to the controller,
//!   which writes them onto the form.

use common::sync::SettingsBackend;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SettingsFormProps;
pub use state::SettingsForm;

impl Component for SettingsForm {
    type Message = Msg;
    type Properties = SettingsFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        SettingsForm::new(&ctx.props().endpoint)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.controller.begin_load();

            let link = ctx.link().clone();
            let backend = self.backend.clone();
            spawn_local(async move {
                let result = backend.fetch().await;
                link.send_message(Msg::Loaded(result));
            });
        }
    }
}
