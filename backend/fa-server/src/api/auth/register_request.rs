use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name (required)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Descriptor captured at enrollment (required)
    #[serde(default)]
    pub face_descriptor: Option<Vec<f64>>,
}
