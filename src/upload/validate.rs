// SPDX-License-Identifier: MPL-2.0
//! Pure validation rules for the upload form.
//!
//! Every validator is total and synchronous: it never panics, never touches
//! I/O, and always returns a definite outcome. Rejections carry the Fluent
//! key (and arguments) of a human-readable message resolved at render time.
//! Validators for one field compose with short-circuit AND via `?`: the first
//! failure wins and later validators are not evaluated.

use std::fmt;

/// Files at or above this size are rejected.
pub const MAX_FILE_SIZE_BYTES: u64 = 10_000_000;

/// Title length bounds, in characters.
pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 20;

/// Description length bound, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 65;

/// Accepted image formats, matched as the final `/`- or `.`-delimited segment
/// of the declared MIME type, case-insensitively.
const ACCEPTED_FORMATS: [&str; 3] = ["gif", "jpeg", "png"];

/// Why a candidate value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Required,
    FileTooLarge,
    UnsupportedFormat,
    TooShort { min: usize },
    TooLong { max: usize },
}

impl Rejection {
    /// The Fluent key of the user-facing message.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Rejection::Required => "validation-required",
            Rejection::FileTooLarge => "validation-file-too-large",
            Rejection::UnsupportedFormat => "validation-unsupported-format",
            Rejection::TooShort { .. } => "validation-too-short",
            Rejection::TooLong { .. } => "validation-too-long",
        }
    }

    /// Interpolation arguments for the message, if any.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Rejection::TooShort { min } => vec![("min", min.to_string())],
            Rejection::TooLong { max } => vec![("max", max.to_string())],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Required => write!(f, "required field"),
            Rejection::FileTooLarge => write!(f, "file too large"),
            Rejection::UnsupportedFormat => write!(f, "unsupported format"),
            Rejection::TooShort { min } => write!(f, "shorter than {} characters", min),
            Rejection::TooLong { max } => write!(f, "longer than {} characters", max),
        }
    }
}

pub type Validation = Result<(), Rejection>;

/// Rejects files of [`MAX_FILE_SIZE_BYTES`] or more.
pub fn validate_size(size_bytes: u64) -> Validation {
    if size_bytes >= MAX_FILE_SIZE_BYTES {
        Err(Rejection::FileTooLarge)
    } else {
        Ok(())
    }
}

/// Accepts MIME strings whose final `/`- or `.`-delimited segment is one of
/// the accepted formats, case-insensitively. `image/png` and `IMAGE/GIF`
/// pass; `image/webp`, `image/bmp` and a bare `png` do not.
pub fn validate_format(mime: &str) -> Validation {
    let lowered = mime.to_ascii_lowercase();
    for format in ACCEPTED_FORMATS {
        if let Some(prefix) = lowered.strip_suffix(format) {
            if prefix.ends_with('/') || prefix.ends_with('.') {
                return Ok(());
            }
        }
    }
    Err(Rejection::UnsupportedFormat)
}

/// Rejects text whose character count falls outside `[min, max]`.
pub fn validate_length(text: &str, min: usize, max: usize) -> Validation {
    let length = text.chars().count();
    if length < min {
        Err(Rejection::TooShort { min })
    } else if length > max {
        Err(Rejection::TooLong { max })
    } else {
        Ok(())
    }
}

/// Rejects empty (or whitespace-only) input. Runs before length validators.
pub fn validate_required(text: &str) -> Validation {
    if text.trim().is_empty() {
        Err(Rejection::Required)
    } else {
        Ok(())
    }
}

/// Title rules: required, then 2 to 20 characters.
pub fn validate_title(title: &str) -> Validation {
    validate_required(title)?;
    validate_length(title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)
}

/// Description rules: required, then at most 65 characters.
pub fn validate_description(description: &str) -> Validation {
    validate_required(description)?;
    validate_length(description, 0, DESCRIPTION_MAX_CHARS)
}

/// File rules: size bound, then declared format.
pub fn validate_file(size_bytes: u64, mime: &str) -> Validation {
    validate_size(size_bytes)?;
    validate_format(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_boundary_follows_the_ten_megabyte_rule() {
        assert_eq!(validate_size(9_999_999), Ok(()));
        assert_eq!(validate_size(10_000_000), Err(Rejection::FileTooLarge));
        assert_eq!(validate_size(10_000_001), Err(Rejection::FileTooLarge));
        assert_eq!(validate_size(0), Ok(()));
    }

    #[test]
    fn format_accepts_the_three_image_types() {
        assert_eq!(validate_format("image/gif"), Ok(()));
        assert_eq!(validate_format("image/jpeg"), Ok(()));
        assert_eq!(validate_format("image/png"), Ok(()));
    }

    #[test]
    fn format_match_is_case_insensitive() {
        assert_eq!(validate_format("IMAGE/PNG"), Ok(()));
        assert_eq!(validate_format("Image/Jpeg"), Ok(()));
    }

    #[test]
    fn format_rejects_other_image_types() {
        assert_eq!(validate_format("image/bmp"), Err(Rejection::UnsupportedFormat));
        assert_eq!(
            validate_format("image/webp"),
            Err(Rejection::UnsupportedFormat)
        );
        assert_eq!(validate_format(""), Err(Rejection::UnsupportedFormat));
    }

    #[test]
    fn format_requires_a_delimiter_before_the_suffix() {
        // A bare suffix or a smuggled one is not a declared image type.
        assert_eq!(validate_format("png"), Err(Rejection::UnsupportedFormat));
        assert_eq!(
            validate_format("image/notpng"),
            Err(Rejection::UnsupportedFormat)
        );
    }

    #[test]
    fn length_bounds_count_characters_not_bytes() {
        // Five multibyte characters fit a max of five.
        assert_eq!(validate_length("ação!", 1, 5), Ok(()));
        assert_eq!(
            validate_length("ação!!", 1, 5),
            Err(Rejection::TooLong { max: 5 })
        );
    }

    #[test]
    fn length_rejects_out_of_bounds_input() {
        assert_eq!(validate_length("a", 2, 20), Err(Rejection::TooShort { min: 2 }));
        assert_eq!(validate_length("ab", 2, 20), Ok(()));
        let long = "x".repeat(21);
        assert_eq!(
            validate_length(&long, 2, 20),
            Err(Rejection::TooLong { max: 20 })
        );
    }

    #[test]
    fn required_runs_before_length_in_title_rules() {
        // An empty title is reported as missing, not as too short.
        assert_eq!(validate_title(""), Err(Rejection::Required));
        assert_eq!(validate_title("   "), Err(Rejection::Required));
        assert_eq!(validate_title("a"), Err(Rejection::TooShort { min: 2 }));
        assert_eq!(validate_title("Dunes"), Ok(()));
    }

    #[test]
    fn description_is_required_but_has_no_minimum() {
        assert_eq!(validate_description(""), Err(Rejection::Required));
        assert_eq!(validate_description("x"), Ok(()));
        let long = "x".repeat(66);
        assert_eq!(
            validate_description(&long),
            Err(Rejection::TooLong { max: 65 })
        );
    }

    #[test]
    fn file_rules_short_circuit_on_size() {
        // Both rules fail here; only the first failure is reported.
        assert_eq!(
            validate_file(20_000_000, "image/webp"),
            Err(Rejection::FileTooLarge)
        );
        assert_eq!(
            validate_file(1_000, "image/webp"),
            Err(Rejection::UnsupportedFormat)
        );
        assert_eq!(validate_file(1_000, "image/png"), Ok(()));
    }

    #[test]
    fn too_short_carries_the_bound_as_argument() {
        let rejection = Rejection::TooShort { min: 2 };
        assert_eq!(rejection.i18n_key(), "validation-too-short");
        assert_eq!(rejection.i18n_args(), vec![("min", "2".to_string())]);
    }
}
