// SPDX-License-Identifier: MPL-2.0
//! Upload pipeline: validation rules and form state.
//!
//! The flow is deliberately ordered so that nothing invalid ever leaves the
//! machine: the picked file passes [`validate`] *before* the side-channel
//! upload to the image host starts, field validators run at submission, and
//! the metadata record is only created once the host has resolved a public
//! URL.

pub mod form;
pub mod validate;

use std::path::Path;

/// MIME type for a picked file, derived from its extension.
///
/// Only the formats the gallery accepts are mapped; everything else returns
/// `None` and is reported through the regular format validator.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_extensions_map_to_mime_types() {
        assert_eq!(
            mime_from_path(&PathBuf::from("photo.PNG")),
            Some("image/png")
        );
        assert_eq!(
            mime_from_path(&PathBuf::from("photo.jpg")),
            Some("image/jpeg")
        );
        assert_eq!(
            mime_from_path(&PathBuf::from("photo.jpeg")),
            Some("image/jpeg")
        );
        assert_eq!(
            mime_from_path(&PathBuf::from("anim.gif")),
            Some("image/gif")
        );
    }

    #[test]
    fn unknown_or_missing_extensions_map_to_none() {
        assert_eq!(mime_from_path(&PathBuf::from("photo.webp")), None);
        assert_eq!(mime_from_path(&PathBuf::from("photo")), None);
    }
}
