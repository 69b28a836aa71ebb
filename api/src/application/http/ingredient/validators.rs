use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Multipart body limit: the image plus the other form fields
pub const MAX_UPLOAD_BODY_SIZE: usize = MAX_IMAGE_SIZE + 1024 * 1024;

const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Photo upload with the ingredients already on the user's list
#[derive(Debug)]
pub struct ImageUploadForm {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub existing_ingredients: Vec<String>,
}

impl ImageUploadForm {
    /// Reads the `image` field and every `existingIngredients` field.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut image: Option<(Vec<u8>, String)> = None;
        let mut existing_ingredients = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error("Failed to read multipart field", e))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "image" => {
                    let mime_type = match field.content_type() {
                        None | Some("application/octet-stream") => {
                            DEFAULT_IMAGE_MIME_TYPE.to_string()
                        }
                        Some(content_type) => content_type.to_string(),
                    };

                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error("Failed to read image", e))?;

                    if data.is_empty() {
                        warn!("Empty image upload attempted");
                        return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
                    }

                    if data.len() > MAX_IMAGE_SIZE {
                        return Err(ApiError::PayloadTooLarge(format!(
                            "Image too large. Max size is {} bytes",
                            MAX_IMAGE_SIZE
                        )));
                    }

                    if !mime_type.starts_with("image/") {
                        return Err(ApiError::BadRequest(format!(
                            "Unsupported file type: {}",
                            mime_type
                        )));
                    }

                    image = Some((data.to_vec(), mime_type));
                }
                "existingIngredients" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| multipart_error("Failed to read existingIngredients", e))?;
                    existing_ingredients.push(value);
                }
                _ => {}
            }
        }

        let (image_data, mime_type) =
            image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

        Ok(Self {
            image_data,
            mime_type,
            existing_ingredients,
        })
    }
}

/// A body cut off by the upload limit surfaces as a multipart error carrying 413
fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("{}: upload exceeds {} bytes", context, MAX_UPLOAD_BODY_SIZE);
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    error!("{}: {}", context, error);
    ApiError::BadRequest(format!("{}: {}", context, error))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MergeIngredientsRequest {
    /// A single name or a list of names
    #[serde(default, deserialize_with = "one_or_many")]
    #[schema(value_type = Vec<String>)]
    pub existing: Vec<String>,
    #[serde(default)]
    pub detected: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_accepts_a_single_name() {
        let request: MergeIngredientsRequest =
            serde_json::from_str(r#"{"existing": "egg", "detected": ["milk"]}"#).unwrap();

        assert_eq!(request.existing, vec!["egg"]);
        assert_eq!(request.detected, vec!["milk"]);
    }

    #[test]
    fn test_existing_accepts_a_list() {
        let request: MergeIngredientsRequest =
            serde_json::from_str(r#"{"existing": ["egg", "rice"]}"#).unwrap();

        assert_eq!(request.existing, vec!["egg", "rice"]);
        assert!(request.detected.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: MergeIngredientsRequest = serde_json::from_str("{}").unwrap();

        assert!(request.existing.is_empty());
        assert!(request.detected.is_empty());
    }

    #[test]
    fn test_existing_rejects_other_types() {
        assert!(serde_json::from_str::<MergeIngredientsRequest>(r#"{"existing": 3}"#).is_err());
    }
}
