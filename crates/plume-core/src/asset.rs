//! Opaque asset values shared between styles.
//!
//! The style engine never looks inside a font or an image beyond the handful
//! of queries declared here; rasterization and decoding belong to the host.
//! Both types are immutable and meant to be shared behind an `Arc`.

use std::sync::Arc;

/// Face attributes of a [`Font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// A font value compared by equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    family: Arc<str>,
    size_px: u16,
    face: FontFace,
    line_height: u16,
}

impl Font {
    /// Create a font with a line height of 1.25x its pixel size.
    pub fn new(family: impl Into<Arc<str>>, size_px: u16) -> Self {
        let line_height = size_px.saturating_add(size_px / 4);
        Self {
            family: family.into(),
            size_px,
            face: FontFace::Regular,
            line_height,
        }
    }

    /// Set the face.
    pub fn with_face(mut self, face: FontFace) -> Self {
        self.face = face;
        self
    }

    /// Override the line height reported by [`Font::line_height`].
    pub fn with_line_height(mut self, line_height: u16) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size_px(&self) -> u16 {
        self.size_px
    }

    pub fn face(&self) -> FontFace {
        self.face
    }

    /// Height of one line of text in pixels.
    pub fn line_height(&self) -> i32 {
        i32::from(self.line_height)
    }
}

/// An image value compared by equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    id: Arc<str>,
    width: u32,
    height: u32,
    opaque: bool,
    animated: bool,
}

impl Image {
    /// Create a non-opaque, static image.
    pub fn new(id: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            opaque: false,
            animated: false,
        }
    }

    /// Mark whether every pixel of the image is fully opaque.
    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    /// Mark whether the image is animated.
    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    pub fn is_animation(&self) -> bool {
        self.animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_equality_is_by_value() {
        let a = Font::new("Roboto", 16);
        let b = Font::new(String::from("Roboto"), 16);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_face(FontFace::Bold));
    }

    #[test]
    fn font_line_height_defaults_to_size_and_a_quarter() {
        assert_eq!(Font::new("Roboto", 16).line_height(), 20);
        assert_eq!(Font::new("Roboto", 16).with_line_height(18).line_height(), 18);
    }

    #[test]
    fn image_flags() {
        let img = Image::new("bg.png", 10, 20).with_opaque(true);
        assert!(img.is_opaque());
        assert!(!img.is_animation());
        assert_eq!((img.width(), img.height()), (10, 20));
    }
}
