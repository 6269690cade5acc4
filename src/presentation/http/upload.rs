// src/presentation/http/upload.rs
use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};

use crate::application::commands::ImageUpload;

use super::error::{HttpError, HttpResult};

const IMAGE_FIELD: &str = "image";

/// Text fields of a multipart create request plus its optional image part.
#[derive(Debug, Default)]
pub struct FormFields {
    text: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(detail = %rejection.body_text(), "rejected multipart body");
            HttpError::bad_request("expected a multipart/form-data body")
        })?;
        Self::read(multipart).await
    }
}

impl FormFields {
    async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(format!("invalid multipart body: {err}")))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            if name == IMAGE_FIELD {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|err| {
                    HttpError::bad_request(format!("could not read image: {err}"))
                })?;
                form.image = Some(ImageUpload { file_name, bytes });
            } else {
                let value = field.text().await.map_err(|err| {
                    HttpError::bad_request(format!("could not read field {name}: {err}"))
                })?;
                form.text.insert(name, value);
            }
        }
        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.text.get(name).map(String::as_str)
    }

    pub fn required(&self, name: &str) -> HttpResult<String> {
        self.text(name)
            .map(str::to_owned)
            .ok_or_else(|| HttpError::bad_request(format!("missing form field: {name}")))
    }

    /// Boolean field, `true`/`false` in any letter case; blank counts as absent.
    pub fn flag(&self, name: &str) -> HttpResult<Option<bool>> {
        match self.text(name).map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
            Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
            Some(raw) => Err(HttpError::bad_request(format!(
                "invalid {name}: expected true or false, got '{raw}'"
            ))),
            None => Ok(None),
        }
    }

    /// Parse an optional field; blank values count as absent.
    pub fn parsed<T>(&self, name: &str) -> HttpResult<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.text(name).map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|err| HttpError::bad_request(format!("invalid {name}: {err}"))),
            None => Ok(None),
        }
    }
}
