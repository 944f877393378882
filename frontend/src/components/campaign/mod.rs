//! Campaign dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `CampaignDashboardProps`, `CampaignDashboard`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, tell the user when a saved draft was restored (toast, in Spanish).
//! - Cancel any pending playback tick when the component is torn down.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignDashboardProps;
pub use state::CampaignDashboard;

use crate::toast::show_toast;

impl Component for CampaignDashboard {
    type Message = Msg;
    type Properties = CampaignDashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        CampaignDashboard::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            if !self.store.filters().is_empty() || !self.store.campaign_name().is_empty() {
                show_toast("Se recuperó el borrador de tu última campaña.");
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel_playback();
    }
}
