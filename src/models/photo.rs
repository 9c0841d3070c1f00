use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

/// Raw image bytes attached to a visit, stored as a BLOB exactly as uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo(Vec<u8>);

/// A stored photo decoded for display. Keeps the original bytes alongside.
#[derive(Debug, Clone)]
pub struct DecodedPhoto {
    pub raw: Vec<u8>,
    pub format: Option<ImageFormat>,
    pub image: DynamicImage,
}

impl DecodedPhoto {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

impl Photo {
    /// Wrap uploaded bytes without touching them. No upload means no photo.
    pub fn encode(upload: Option<Vec<u8>>) -> Option<Self> {
        upload.map(Self)
    }

    /// Interpret the stored bytes as an image. No resizing or re-encoding.
    pub fn decode(&self) -> Result<DecodedPhoto> {
        let format = image::guess_format(&self.0).ok();
        let image = image::load_from_memory(&self.0)?;
        Ok(DecodedPhoto {
            raw: self.0.clone(),
            format,
            image,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Photo {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

// JSON carries the blob as standard base64.
impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use base64::Engine;
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use base64::Engine;
        let encoded = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) fn sample_png(width: u32, height: u32) -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 40) as u8, (y * 40) as u8, 128])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
