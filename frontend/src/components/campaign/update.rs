//! Update function for the campaign dashboard.
//!
//! Elm-style: receives the current `CampaignDashboard`, the `Context` and a
//! `Msg`, mutates the state and returns whether the view must re-render.
//!
//! Key behaviors
//! - Filter edits go through `FilterStore`, which persists every change.
//! - The projection is recomputed after each filter edit.
//! - Preview and submit are guarded by `SubmissionFlow`; refusals become
//!   toasts (in Spanish), never errors.
//! - Submit downloads the campaign file right away. A `Timeout` chain then
//!   feeds the playback its virtual time, and the playback asks for the
//!   closing download exactly once.

use common::catalog::FilterCategory;
use common::model::filter::{FilterValue, TagKind};
use common::playback::PlaybackEvent;
use common::ports::SystemClock;
use common::submission::DownloadFile;
use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CampaignDashboard;
use crate::services::download::trigger_download;
use crate::toast::show_toast;

/// Central update function for the component.
pub fn update(
    component: &mut CampaignDashboard,
    ctx: &Context<CampaignDashboard>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetCampaignName(name) => {
            component.store.set_campaign_name(name);
            true
        }
        Msg::SelectCategory(category) => {
            component.active_category = category;
            component.tag_input.clear();
            true
        }
        Msg::ToggleValue(category, value) => {
            match component.store.toggle_filter_value(category, value) {
                Ok(_) => component.refresh_projection(),
                Err(e) => show_toast(&e.to_string()),
            }
            true
        }
        Msg::ClearCategory(category) => {
            match component.store.update_filter(category, Vec::new()) {
                Ok(()) => component.refresh_projection(),
                Err(e) => show_toast(&e.to_string()),
            }
            true
        }
        Msg::SetTagInput(text) => {
            component.tag_input = text;
            false
        }
        Msg::SetTagKind(kind) => {
            component.tag_kind = kind;
            true
        }
        Msg::AddTag => {
            let category = component.active_category;
            let text = component.tag_input.trim().to_string();
            if text.is_empty() {
                return false;
            }
            // only custom tags carry a company/title kind
            let kind = if category == FilterCategory::CustomTags {
                component.tag_kind
            } else {
                TagKind::Plain
            };
            let value = FilterValue::new(kind, text);
            if component.store.is_value_selected(category, &value) {
                show_toast(&format!("\"{}\" ya está en los filtros.", value));
            } else {
                match component.store.toggle_filter_value(category, value) {
                    Ok(_) => component.refresh_projection(),
                    Err(e) => show_toast(&e.to_string()),
                }
            }
            component.tag_input.clear();
            true
        }
        Msg::Preview => {
            if let Err(e) = component.flow.preview(&component.store.draft()) {
                show_toast(&e.to_string());
            }
            true
        }
        Msg::Back => component.flow.back(),
        Msg::Submit => {
            match component.flow.submit(&mut component.store, &SystemClock) {
                Ok(submission) => {
                    // the draft is already gone from storage; hand the file
                    // over before anything can interrupt the playback
                    deliver(&submission.download);
                    component.log_lines.clear();
                    component.submission = Some(submission);
                    component.refresh_projection();
                    schedule_next_tick(component, ctx);
                }
                Err(e) => show_toast(&e.to_string()),
            }
            true
        }
        Msg::PlaybackTick(elapsed) => {
            let Some(submission) = component.submission.as_mut() else {
                return false;
            };
            for event in submission.playback.advance(elapsed) {
                match event {
                    PlaybackEvent::Line(line) => component.log_lines.push(line),
                    PlaybackEvent::Download => deliver(&submission.download),
                }
            }
            schedule_next_tick(component, ctx);
            true
        }
        Msg::NewCampaign => {
            component.cancel_playback();
            component.submission = None;
            component.log_lines.clear();
            component.tag_input.clear();
            component.flow.start_new(&mut component.store, &SystemClock);
            component.refresh_projection();
            true
        }
    }
}

fn deliver(download: &DownloadFile) {
    if let Err(e) = trigger_download(download) {
        error!("download of {} failed: {:?}", download.filename, e);
        show_toast("No se pudo descargar el archivo de la campaña.");
    }
}

/// Arms a `Timeout` for the next playback event, or clears the timer once
/// the playback is over.
fn schedule_next_tick(component: &mut CampaignDashboard, ctx: &Context<CampaignDashboard>) {
    let wait = component
        .submission
        .as_ref()
        .and_then(|s| s.playback.next_due());

    component.playback_timer = wait.map(|wait| {
        let link = ctx.link().clone();
        let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(Msg::PlaybackTick(wait)))
    });
}
