use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLoginRequest {
    #[serde(default)]
    pub face_descriptor: Option<Vec<f64>>,
}
