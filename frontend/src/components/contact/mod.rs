//! Contact form. Validates a `ContactRecord` locally and forwards it to the
//! record service; every outcome is reported with a toast.

use common::model::contact::ContactRecord;
use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::records::forward_contact;
use crate::toast::show_toast;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Sent(Result<(), String>),
}

#[derive(Default)]
pub struct ContactForm {
    record: ContactRecord,
    sending: bool,
}

impl ContactForm {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.record.name,
            Field::Email => &mut self.record.email,
            Field::Phone => &mut self.record.phone,
            Field::Company => &mut self.record.company,
            Field::Message => &mut self.record.message,
        }
    }

    fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.record.name,
            Field::Email => &self.record.email,
            Field::Phone => &self.record.phone,
            Field::Company => &self.record.company,
            Field::Message => &self.record.message,
        }
    }

    fn input(&self, ctx: &Context<Self>, field: Field, label: &'static str, kind: &'static str) -> Html {
        html! {
            <label class="form-field">
                <span>{ label }</span>
                <input
                    type={kind}
                    value={self.field(field).to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Edit(field, input.value())
                    })}
                />
            </label>
        }
    }
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                *self.field_mut(field) = value;
                false
            }
            Msg::Submit => {
                if self.sending {
                    return false;
                }
                if let Err(e) = self.record.validate() {
                    show_toast(&e.to_string());
                    return false;
                }
                self.sending = true;
                let record = self.record.normalized();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = forward_contact(&record).await;
                    link.send_message(Msg::Sent(result));
                });
                true
            }
            Msg::Sent(result) => {
                self.sending = false;
                match result {
                    Ok(()) => {
                        self.record = ContactRecord::default();
                        show_toast("¡Gracias! Te contactaremos pronto.");
                    }
                    Err(e) => {
                        warn!("contact record not forwarded: {}", e);
                        show_toast(&e);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="contact-form">
                <h2>{"Contáctanos"}</h2>
                { self.input(ctx, Field::Name, "Nombre *", "text") }
                { self.input(ctx, Field::Email, "Correo *", "email") }
                { self.input(ctx, Field::Phone, "Teléfono", "tel") }
                { self.input(ctx, Field::Company, "Empresa", "text") }
                <label class="form-field">
                    <span>{"Mensaje *"}</span>
                    <textarea
                        value={self.record.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::Edit(Field::Message, area.value())
                        })}
                    />
                </label>
                <button
                    class="btn primary"
                    disabled={self.sending}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if self.sending { "Enviando..." } else { "Enviar" } }
                </button>
            </section>
        }
    }
}
