//! Command routing and the Slack response model.

use serde::{Deserialize, Serialize};

use crate::{compose, parse_arguments, CommandError, Verb};

/// Who sees the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub text: String,
}

/// Slash command response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackResponse {
    pub text: String,
    pub response_type: ResponseType,
    pub attachments: Vec<Attachment>,
}

impl SlackResponse {
    fn new(
        text: impl Into<String>,
        response_type: ResponseType,
        attachment: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            response_type,
            attachments: vec![Attachment {
                text: attachment.into(),
            }],
        }
    }

    /// Usage for an unknown command word.
    pub fn usage() -> Self {
        let verbs: Vec<&str> = Verb::ALL.iter().map(Verb::word).collect();
        Self::new(
            "Usage: <Command> <Argument>",
            ResponseType::Ephemeral,
            format!("Available Commands: {}", verbs.join(", ")),
        )
    }

    /// Error shown only to the invoking user.
    pub fn from_error(err: &CommandError) -> Self {
        Self::new(err.message.clone(), ResponseType::Ephemeral, err.help_text.clone())
    }

    pub fn is_ephemeral(&self) -> bool {
        self.response_type == ResponseType::Ephemeral
    }
}

/// A slash command as received from the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// Verb and arguments, e.g. `flip -table`
    pub text: String,
    pub user_id: String,
    pub response_url: String,
}

/// The response plus where to send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    pub response: SlackResponse,
    pub response_url: String,
}

/// Split command text into the verb word and the trimmed remainder.
pub fn split_command(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (text, ""),
    }
}

/// Dispatch command text to the matching verb.
pub fn route(text: &str, user_id: &str) -> SlackResponse {
    let (word, args) = split_command(text);

    let Some(verb) = Verb::from_word(word) else {
        tracing::debug!(command = word, "unknown command");
        return SlackResponse::usage();
    };

    match parse_arguments(verb, args) {
        Ok(parsed) => {
            tracing::debug!(verb = verb.word(), ?parsed, "rendering command");
            SlackResponse::new(
                compose(verb, &parsed),
                ResponseType::InChannel,
                format!("<@{}> {}", user_id, verb.past_tense()),
            )
        }
        Err(err) => {
            tracing::debug!(verb = verb.word(), error = %err, "rejected arguments");
            SlackResponse::from_error(&err)
        }
    }
}

/// Handle a full invocation, passing the response URL through.
pub fn handle(invocation: &CommandInvocation) -> CommandReply {
    CommandReply {
        response: route(&invocation.text, &invocation.user_id),
        response_url: invocation.response_url.clone(),
    }
}
