//! Platform intents wrapping a deep link.

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

pub const EXTRA_SUBJECT: &str = "android.intent.extra.SUBJECT";
pub const EXTRA_TEXT: &str = "android.intent.extra.TEXT";

/// Subject line attached to every share intent.
pub const SHARE_SUBJECT: &str = "Explorer Map";
pub const SHARE_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntentAction {
    /// Open the URI in whichever application handles its scheme.
    #[serde(rename = "android.intent.action.VIEW")]
    View,
    /// Hand text to a share target.
    #[serde(rename = "android.intent.action.SEND")]
    Send,
}

impl IntentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentAction::View => "android.intent.action.VIEW",
            IntentAction::Send => "android.intent.action.SEND",
        }
    }
}

/// An action plus its payload, ready to pass to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intent {
    pub action: IntentAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Url>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl Intent {
    pub fn view(uri: Url) -> Self {
        Self {
            action: IntentAction::View,
            data: Some(uri),
            mime_type: None,
            extras: BTreeMap::new(),
        }
    }

    pub fn share_text(subject: &str, text: String) -> Self {
        let mut extras = BTreeMap::new();
        extras.insert(EXTRA_SUBJECT.to_string(), subject.to_string());
        extras.insert(EXTRA_TEXT.to_string(), text);
        Self {
            action: IntentAction::Send,
            data: None,
            mime_type: Some(SHARE_MIME_TYPE.to_string()),
            extras,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.extras.get(EXTRA_SUBJECT).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.extras.get(EXTRA_TEXT).map(String::as_str)
    }
}
