use std::io::Cursor;

use axum::{body::Bytes, extract::Multipart};
use shopapp_proto::dto::{FieldViolation, ProductDto};

use crate::{ingest::UploadRequest, Result};

const FILES_FIELD: &'static str = "files";

/// Product creation form bound from `multipart/form-data`.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub product: ProductDto,
    pub files: Vec<UploadRequest<Cursor<Bytes>>>,
    /// Values that could not be converted to their field type.
    pub binding_violations: Vec<FieldViolation>,
}

impl ProductForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILES_FIELD {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;

                match file_name {
                    // browsers send an empty unnamed part when no file is picked
                    Some(file_name) if !file_name.is_empty() || !data.is_empty() => {
                        log::debug!("file part {:?}: {} bytes", file_name, data.len());
                        form.files
                            .push(UploadRequest::from_bytes(file_name, content_type, data));
                    }
                    _ => log::debug!("skip empty file part"),
                }
                continue;
            }

            let value = field.text().await?;
            form.bind(&name, value);
        }

        Ok(form)
    }

    fn bind(&mut self, name: &str, value: String) {
        match name {
            "name" => self.product.name = value,
            "price" => self.bind_price(value.trim()),
            "thumbnail" => self.product.thumbnail = Some(value),
            "description" => self.product.description = Some(value),
            "category_id" | "categoryId" => self.product.category_id = Some(value),
            _ => log::debug!("ignore unknown form field {:?}", name),
        }
    }

    fn bind_price(&mut self, value: &str) {
        if value.is_empty() {
            self.product.price = None;
            return;
        }
        match value.parse::<f64>() {
            Ok(price) if price.is_finite() => self.product.price = Some(price),
            _ => self
                .binding_violations
                .push(FieldViolation::new("price", "Price must be a number")),
        }
    }
}
