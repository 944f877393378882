use common::ports::ensure_widget;
use yew::prelude::*;

use crate::services::chat_widget::DomWidgetLoader;
use crate::toast::show_toast;

/// Floating button that brings up the chat widget. The script is injected on
/// the first click only; later clicks find it already in the page.
#[function_component(ChatButton)]
pub fn chat_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        if !ensure_widget(&DomWidgetLoader) {
            show_toast("El chat no está disponible en este momento.");
        }
    });

    html! {
        <button class="chat-button" title="Chatea con nosotros" {onclick}>{"💬"}</button>
    }
}
