//! Terminal event loop.

use crate::{
    config::ClientConfig,
    domain::Connector,
    error::ClientError,
    infrastructure::stomp::StompConnector,
    ui::{app::ChatClient, input::InputReader, terminal::TerminalView, view::ChatView},
};

const USERNAME_PROMPT: &str = "Username: ";
const MESSAGE_PROMPT: &str = "> ";

/// Run the chat client until input ends.
///
/// One loop handles both event sources; each handler finishes before the
/// next event is taken.
pub async fn run(config: ClientConfig) -> Result<(), ClientError> {
    let connector = StompConnector::new(config.url.clone());
    let mut client = ChatClient::new(connector, TerminalView::stdout());
    let mut input = InputReader::spawn().await?;

    if let Some(username) = config.username.as_deref() {
        client.submit_username(username).await;
    }
    input.request(prompt_for(&client));

    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line else {
                    tracing::debug!("Input closed");
                    break;
                };
                if client.is_chat_page() {
                    client.submit_message(&line).await;
                } else {
                    client.submit_username(&line).await;
                }
                input.request(prompt_for(&client));
            }
            inbound = client.next_inbound() => match inbound {
                Some(Ok(payload)) => client.receive(&payload),
                Some(Err(e)) => client.connection_lost(Some(e)),
                None => client.connection_lost(None),
            },
        }
    }

    client.close().await;
    Ok(())
}

fn prompt_for<K: Connector, V: ChatView>(client: &ChatClient<K, V>) -> &'static str {
    if client.is_chat_page() {
        MESSAGE_PROMPT
    } else {
        USERNAME_PROMPT
    }
}
