use crate::types::{RelayEnvelope, SearchResponse};

/// How a relay hands back the upstream response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"contents": "<upstream body as a JSON string>"}`
    Envelope,
    /// The upstream body unchanged.
    Direct,
}

impl ResponseShape {
    /// Parses a relay response body into the search response it carries.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error of whichever parse step failed. For
    /// [`ResponseShape::Envelope`] that is either the envelope itself or the
    /// embedded upstream body.
    pub fn unwrap_body(&self, body: &str) -> Result<SearchResponse, serde_json::Error> {
        match self {
            ResponseShape::Envelope => {
                let envelope: RelayEnvelope = serde_json::from_str(body)?;
                serde_json::from_str(&envelope.contents)
            }
            ResponseShape::Direct => serde_json::from_str(body),
        }
    }
}

/// One way of reaching the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPath {
    pub name: String,
    pub prefix: String,
    pub shape: ResponseShape,
}

impl AccessPath {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, shape: ResponseShape) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            shape,
        }
    }

    /// Builds the relay URL for `target` by appending it, percent-encoded,
    /// to the relay prefix.
    pub fn wrap(&self, target: &str) -> String {
        format!("{}{}", self.prefix, urlencoding::encode(target))
    }
}

/// The relays tried by default, in order.
pub fn default_access_paths() -> Vec<AccessPath> {
    vec![
        AccessPath::new(
            "allorigins",
            "https://api.allorigins.win/get?url=",
            ResponseShape::Envelope,
        ),
        AccessPath::new("corsproxy", "https://corsproxy.io/?", ResponseShape::Direct),
        AccessPath::new(
            "codetabs",
            "https://api.codetabs.com/v1/proxy?quest=",
            ResponseShape::Direct,
        ),
    ]
}
