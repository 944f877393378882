use crate::components::campaign::CampaignDashboard;
use crate::components::chat::ChatButton;
use crate::components::contact::ContactForm;
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Campaign,
    Contact,
}

pub struct App {
    view: View,
}

impl Component for App {
    type Message = View;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::Campaign,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, view: Self::Message) -> bool {
        let changed = self.view != view;
        self.view = view;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav = |view: View, label: &'static str| {
            html! {
                <button
                    class={classes!("nav-btn", (self.view == view).then_some("active"))}
                    onclick={link.callback(move |_| view)}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="app">
                <nav class="top-nav">
                    { nav(View::Campaign, "Campañas") }
                    { nav(View::Contact, "Contacto") }
                </nav>
                <main>
                    {
                        match self.view {
                            View::Campaign => html! { <CampaignDashboard /> },
                            View::Contact => html! { <ContactForm /> },
                        }
                    }
                </main>
                <ChatButton />
            </div>
        }
    }
}
