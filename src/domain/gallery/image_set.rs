// SPDX-License-Identifier: MPL-2.0
//! Ordered, immutable set of image references backing the gallery viewer.

use std::fmt;

/// Reference to a single gallery image (URL, path or opaque identifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates a new image reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Fixed-length, ordered sequence of images.
///
/// The order defines the index-to-image mapping used by the viewer. The set
/// is populated once and exposes no way to mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSet {
    images: Vec<ImageRef>,
}

impl ImageSet {
    /// Creates an image set from an ordered list of references.
    #[must_use]
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// Returns the number of images in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the set contains no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the image at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

impl<R: Into<ImageRef>> FromIterator<R> for ImageSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order() {
        let set: ImageSet = ["a.jpg", "b.jpg", "c.jpg"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).map(ImageRef::as_str), Some("a.jpg"));
        assert_eq!(set.get(2).map(ImageRef::as_str), Some("c.jpg"));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn default_set_is_empty() {
        let set = ImageSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn image_ref_displays_raw_reference() {
        let image = ImageRef::new("https://example.com/ramen.webp");
        assert_eq!(image.to_string(), "https://example.com/ramen.webp");
    }
}
