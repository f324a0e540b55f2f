use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent, MessageBarTitle};

#[component]
pub fn ErrorView(title: &'static str, message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                <MessageBarTitle>{title}</MessageBarTitle>
                {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
            </MessageBarBody>
        </MessageBar>
    }
}
