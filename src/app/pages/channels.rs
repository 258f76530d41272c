use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonVariant, EmptyState, ErrorMessage, LoadingText, StatusMessage,
};
use crate::domain::models::{Channel, SendFileRequest};
use crate::shared::hooks::use_api;

/// Channel list plus a form to push a file to one of them
#[component]
pub fn Channels() -> Element {
    let api = use_api();

    let mut channels = use_resource(move || {
        let api = api.clone();
        async move { api.list_channels().await }
    });

    let (content, channel_names) = match &*channels.read() {
        Some(Ok(list)) if list.is_empty() => (
            rsx! { EmptyState { message: "No channels yet. A channel appears once a client subscribes to it.".to_string() } },
            Vec::new(),
        ),
        Some(Ok(list)) => (
            rsx! { ChannelTable { channels: list.clone() } },
            list.iter().map(|channel| channel.name.clone()).collect(),
        ),
        Some(Err(err)) => {
            tracing::error!("Failed to load channels: {}", err);
            (
                rsx! { ErrorMessage { message: format!("Could not load channels: {}", err) } },
                Vec::new(),
            )
        }
        None => (
            rsx! { LoadingText { message: "Loading channels...".to_string() } },
            Vec::new(),
        ),
    };

    rsx! {
        div { class: "channels-page",
            div { class: "channels-page__header",
                h1 { "Channels" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| channels.restart(),
                    "Refresh"
                }
            }

            {content}

            SendFileForm {
                channel_names,
                on_sent: move |_| channels.restart(),
            }
        }
    }
}

#[component]
fn ChannelTable(channels: Vec<Channel>) -> Element {
    rsx! {
        table { class: "c-channels",
            thead {
                tr {
                    th { "Name" }
                    th { "Clients" }
                    th { "Files sent" }
                    th { "Created" }
                }
            }
            tbody {
                for channel in channels {
                    tr { key: "{channel.name}",
                        td { class: "c-channels__name", "{channel.name}" }
                        td { "{channel.clients_connected}" }
                        td { "{channel.files_sent}" }
                        td { {channel.created_at.format("%Y-%m-%d %H:%M").to_string()} }
                    }
                }
            }
        }
    }
}

#[component]
fn SendFileForm(channel_names: Vec<String>, on_sent: EventHandler<()>) -> Element {
    let api = use_api();

    let mut channel = use_signal(String::new);
    let mut file_name = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut sending = use_signal(|| false);
    // (is_error, message)
    let mut status = use_signal(|| None::<(bool, String)>);

    let send = move |_: MouseEvent| {
        if channel().is_empty() || file_name().trim().is_empty() {
            status.set(Some((true, "Pick a channel and a file name first.".to_string())));
            return;
        }

        let api = api.clone();
        let request = SendFileRequest::from_content(channel(), file_name().trim(), content().as_bytes());
        spawn(async move {
            sending.set(true);
            let outcome = match api.send_file(&request).await {
                Ok(response) => {
                    if !response.error {
                        content.set(String::new());
                        on_sent.call(());
                    }
                    (response.error, response.message)
                }
                Err(err) => {
                    tracing::error!("Failed to send file: {}", err);
                    (true, format!("Could not reach the server: {}", err))
                }
            };
            status.set(Some(outcome));
            sending.set(false);
        });
    };

    rsx! {
        section { class: "c-send-form",
            h2 { "Send a file" }

            label { class: "c-send-form__field",
                span { "Channel" }
                select {
                    value: "{channel}",
                    onchange: move |evt| channel.set(evt.value()),
                    option { value: "", "Select a channel" }
                    for name in channel_names {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            label { class: "c-send-form__field",
                span { "File name" }
                input {
                    r#type: "text",
                    placeholder: "notes.txt",
                    value: "{file_name}",
                    oninput: move |evt| file_name.set(evt.value()),
                }
            }

            label { class: "c-send-form__field",
                span { "Content" }
                textarea {
                    rows: "8",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
            }

            Button {
                disabled: sending(),
                onclick: send,
                if sending() { "Sending..." } else { "Send" }
            }

            if let Some((is_error, message)) = status() {
                StatusMessage { is_error, message }
            }
        }
    }
}
