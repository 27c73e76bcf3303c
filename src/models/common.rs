use serde::{Deserialize, Serialize};

/// The fixed menu of Stable Diffusion models the gateway exposes. Keys are
/// what the user types; each resolves to a static backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKey {
    Sdxl,
    Core,
    Large3,
    Ultra,
    Large35,
}

impl ModelKey {
    pub fn all() -> [ModelKey; 5] {
        [
            ModelKey::Sdxl,
            ModelKey::Core,
            ModelKey::Large3,
            ModelKey::Ultra,
            ModelKey::Large35,
        ]
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "sdxl" => Some(ModelKey::Sdxl),
            "core" => Some(ModelKey::Core),
            "large3" => Some(ModelKey::Large3),
            "ultra" => Some(ModelKey::Ultra),
            "large35" => Some(ModelKey::Large35),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ModelKey::Sdxl => "sdxl",
            ModelKey::Core => "core",
            ModelKey::Large3 => "large3",
            ModelKey::Ultra => "ultra",
            ModelKey::Large35 => "large35",
        }
    }

    /// The model identifier the gateway routes on.
    pub fn backend_id(&self) -> &'static str {
        match self {
            ModelKey::Sdxl => "eit_sdxl",
            ModelKey::Core => "eit_sdcore",
            ModelKey::Large3 => "eit_sd3large",
            ModelKey::Ultra => "eit_sdultra",
            ModelKey::Large35 => "eit_sd35large",
        }
    }

    /// Per-image price hint shown in the selection prompt.
    pub fn price_hint(&self) -> &'static str {
        match self {
            ModelKey::Sdxl => "$0.04",
            ModelKey::Core => "$0.04",
            ModelKey::Large3 => "$0.08",
            ModelKey::Ultra => "$0.08",
            ModelKey::Large35 => "$0.14",
        }
    }

    /// The sdxl family takes a different request shape than the other models.
    pub fn is_sdxl_family(&self) -> bool {
        self.backend_id().contains("sdxl")
    }
}

/// Who asked for the generation. Either field may be absent; both render as
/// "unknown" in the payload's metadata tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requester {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Requester {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Requester {
            email: Some(email.into()),
            name: Some(name.into()),
        }
    }

    pub fn email_tag(&self) -> &str {
        self.email.as_deref().unwrap_or("unknown")
    }

    pub fn name_tag(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}
