use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// JSON answer to an in-page (fetch) form submission.
///
/// Endpoints disagree on the success flag: the onboarding form answers with
/// `success`, contact and cancel endpoints answer with `valid`. Either one
/// being `true` means the server accepted the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
    /// Field name -> messages, as produced by server-side form validation
    #[serde(default, deserialize_with = "messages_map")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl SubmissionResponse {
    pub fn is_accepted(&self) -> bool {
        self.success == Some(true) || self.valid == Some(true)
    }

    pub fn reason_text(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Per-field messages joined into one line each, empty fields skipped
    pub fn field_messages(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .filter(|(_, msgs)| !msgs.is_empty())
            .map(|(field, msgs)| (field.clone(), msgs.join(" ")))
            .collect()
    }
}

/// Accepts both `{"zip": ["msg"]}` and `{"zip": "msg"}`; `null` means no errors.
fn messages_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Messages {
        Many(Vec<String>),
        One(String),
    }

    let raw: Option<BTreeMap<String, Messages>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(field, msgs)| {
            let msgs = match msgs {
                Messages::Many(list) => list,
                Messages::One(single) => vec![single],
            };
            (field, msgs)
        })
        .collect())
}
