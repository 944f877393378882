//! View rendering for the campaign dashboard.
//!
//! Three screens follow the submission stage: the configurator (name,
//! category tabs, value picker, live estimate), the preview summary, and
//! the terminal-style confirmation log once submitted.
//!
//! All user-facing text is Spanish.

use common::catalog::{Domain, FilterCategory};
use common::estimate::EstimateProjection;
use common::model::filter::{FilterValue, TagKind};
use common::submission::SubmissionStage;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_count, format_percent, summarize, tag_kind_from_key, tag_kind_key};
use super::messages::Msg;
use super::state::CampaignDashboard;

pub fn view(component: &CampaignDashboard, ctx: &Context<CampaignDashboard>) -> Html {
    let link = ctx.link();
    let body = match component.flow.stage() {
        SubmissionStage::Configuring => build_configurator(component, link),
        SubmissionStage::Previewing => build_preview(component, link),
        SubmissionStage::Submitted => build_terminal(component, link),
    };

    html! {
        <section class="campaign-dashboard">
            { body }
        </section>
    }
}

fn build_configurator(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    html! {
        <>
            { build_name_input(component, link) }
            <div class="dashboard-grid">
                <div class="filters-pane">
                    { build_category_tabs(component, link) }
                    { build_value_picker(component, link) }
                    { build_selected(component, link) }
                </div>
                { build_estimate_panel(&component.projection) }
            </div>
            <div class="actions">
                <button class="btn primary" onclick={link.callback(|_| Msg::Preview)}>
                    {"Revisar campaña"}
                </button>
            </div>
        </>
    }
}

fn build_name_input(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    html! {
        <label class="campaign-name">
            <span>{"Nombre de la campaña"}</span>
            <input
                type="text"
                placeholder="Ej. Q2 Leads"
                value={component.store.campaign_name().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetCampaignName(input.value())
                })}
            />
        </label>
    }
}

/// Tab per category, with the number of selected values as a badge.
fn build_category_tabs(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let tabs = FilterCategory::ALL
        .iter()
        .map(|&category| {
            let count = component.store.filters().values(category).len();
            let active = component.active_category == category;
            html! {
                <button
                    class={classes!("tab-btn", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectCategory(category))}
                >
                    { category.label() }
                    if count > 0 {
                        <span class="badge">{ count }</span>
                    }
                </button>
            }
        })
        .collect::<Html>();

    html! { <div class="tab-bar">{ tabs }</div> }
}

fn build_value_picker(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let category = component.active_category;
    match category.domain() {
        Domain::Closed(values) => {
            let chips = values
                .iter()
                .map(|&value| {
                    let selected = component.store.filters().contains_plain(category, value);
                    html! {
                        <button
                            class={classes!("chip", selected.then_some("selected"))}
                            onclick={link.callback(move |_| {
                                Msg::ToggleValue(category, FilterValue::plain(value))
                            })}
                        >
                            { value }
                        </button>
                    }
                })
                .collect::<Html>();
            html! { <div class="chip-grid">{ chips }</div> }
        }
        Domain::Open => build_free_text_input(component, link),
    }
}

/// Free-text entry for open categories. Custom tags also get a kind
/// selector (plain, company, job title).
fn build_free_text_input(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let is_tags = component.active_category == FilterCategory::CustomTags;
    let kind_select = if is_tags {
        let option = |kind: TagKind, label: &'static str| {
            html! {
                <option value={tag_kind_key(kind)} selected={component.tag_kind == kind}>
                    { label }
                </option>
            }
        };
        html! {
            <select onchange={link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::SetTagKind(tag_kind_from_key(&select.value()))
            })}>
                { option(TagKind::Plain, "Etiqueta") }
                { option(TagKind::Company, "Empresa") }
                { option(TagKind::Title, "Cargo") }
            </select>
        }
    } else {
        html! {}
    };

    html! {
        <div class="free-text">
            { kind_select }
            <input
                type="text"
                placeholder="Escribe y presiona Enter"
                value={component.tag_input.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetTagInput(input.value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::AddTag)
                })}
            />
            <button class="btn" onclick={link.callback(|_| Msg::AddTag)}>{"Agregar"}</button>
        </div>
    }
}

/// Selected values of the active category, each removable.
fn build_selected(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let category = component.active_category;
    let values = component.store.filters().values(category);
    if values.is_empty() {
        return html! { <p class="hint">{"Sin valores seleccionados."}</p> };
    }

    let chips = values
        .iter()
        .map(|value| {
            let to_remove = value.clone();
            html! {
                <span class="chip selected">
                    { value.to_string() }
                    <button
                        class="chip-remove"
                        title="Quitar"
                        onclick={link.callback(move |_| Msg::ToggleValue(category, to_remove.clone()))}
                    >
                        {"×"}
                    </button>
                </span>
            }
        })
        .collect::<Html>();

    html! {
        <div class="selected-values">
            { chips }
            <button class="btn link" onclick={link.callback(move |_| Msg::ClearCategory(category))}>
                {"Limpiar"}
            </button>
        </div>
    }
}

fn build_estimate_panel(projection: &EstimateProjection) -> Html {
    html! {
        <aside class="estimate-panel">
            <h3>{"Estimación"}</h3>
            <dl>
                <dt>{"Prospectos potenciales"}</dt>
                <dd>{ format!("~{}", format_count(projection.potential_leads)) }</dd>
                <dt>{"Respuestas esperadas"}</dt>
                <dd>{ format_count(projection.expected_responses) }</dd>
                <dt>{"Reuniones estimadas"}</dt>
                <dd>{ format_count(projection.estimated_meetings) }</dd>
                <dt>{"Tasa de respuesta"}</dt>
                <dd>{ format_percent(projection.conversion_rate_percent) }</dd>
            </dl>
            <p class="hint">{"Cifras aproximadas; varían con cada cambio de filtros."}</p>
        </aside>
    }
}

fn build_preview(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let filters = component.store.filters();
    let rows = filters
        .populated_categories()
        .map(|category| {
            html! {
                <tr>
                    <th>{ category.label() }</th>
                    <td>{ summarize(filters, category) }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="campaign-preview">
            <h2>{ component.store.campaign_name().to_string() }</h2>
            <table class="filter-summary">{ rows }</table>
            { build_estimate_panel(&component.exact_projection()) }
            <div class="actions">
                <button class="btn" onclick={link.callback(|_| Msg::Back)}>{"Volver"}</button>
                <button class="btn primary" onclick={link.callback(|_| Msg::Submit)}>
                    {"Enviar campaña"}
                </button>
            </div>
        </div>
    }
}

fn build_terminal(component: &CampaignDashboard, link: &Scope<CampaignDashboard>) -> Html {
    let lines = component
        .log_lines
        .iter()
        .map(|line| html! { <div class="terminal-line">{ line.clone() }</div> })
        .collect::<Html>();
    let finished = component
        .submission
        .as_ref()
        .map_or(true, |s| s.playback.is_finished());
    let filename = component
        .submission
        .as_ref()
        .map(|s| s.download.filename.clone())
        .unwrap_or_default();

    html! {
        <div class="campaign-submitted">
            <div class="terminal">
                { lines }
                if !finished {
                    <div class="terminal-line cursor">{"_"}</div>
                }
            </div>
            if finished {
                <p>{ format!("Archivo descargado: {}", filename) }</p>
                <button class="btn primary" onclick={link.callback(|_| Msg::NewCampaign)}>
                    {"Nueva campaña"}
                </button>
            }
        </div>
    }
}
