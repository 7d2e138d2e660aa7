//! Upload-metadata checks: `file`, `image`, `dimensions`, `mimetypes`.
//!
//! These rules prefer the uploaded-file metadata registered for the
//! field; `image`, `dimensions` and `mimetypes` fall back to treating a
//! present string value as an in-memory payload. Probing reads image
//! headers only, without decoding pixel data.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use validation_core::{FieldContext, Rule, RuleOutcome};

fn dimensions_from_path(path: &Path) -> Option<(u32, u32)> {
    ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

fn dimensions_from_bytes(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Resolves the image payload for a field: the uploaded temp file when an
/// upload is registered, else a present string value as raw bytes.
///
/// `Err(outcome)` carries the early result (skip or invalid-upload
/// failure) when no payload can be probed.
fn probe_dimensions(
    ctx: &FieldContext<'_>,
    missing_key: &'static str,
) -> Result<Option<(u32, u32)>, RuleOutcome> {
    if let Some(upload) = ctx.uploads.get(ctx.key) {
        if !upload.tmp_exists() {
            return Err(RuleOutcome::fail(missing_key));
        }
        return Ok(dimensions_from_path(upload.path()));
    }

    if !ctx.exists {
        return Err(RuleOutcome::Skip);
    }

    Ok(ctx
        .value
        .as_str()
        .and_then(|s| dimensions_from_bytes(s.as_bytes())))
}

/// Name: `file` - Type Rule
///
/// The field must be a successful file upload: registered metadata, an
/// existing temp file and the no-error sentinel. Never skips — a missing
/// upload is exactly what it rejects.
pub struct File;

impl Rule for File {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let ok = ctx
            .uploads
            .get(ctx.key)
            .is_some_and(|u| u.tmp_exists() && u.is_ok());

        if ok {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_invalid_file")
        }
    }
}

/// Name: `image` - Type Rule
///
/// The field must be an uploaded image, or a present in-memory payload
/// that decodes as an image header.
pub struct Image;

impl Rule for Image {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        match probe_dimensions(ctx, "formvalidator_make_image") {
            Err(early) => early,
            Ok(Some(_)) => RuleOutcome::Pass,
            Ok(None) => RuleOutcome::fail("formvalidator_make_image"),
        }
    }
}

/// Name: `dimensions`
///
/// The field must contain an image with the required dimensions. Options
/// are comma-separated `OPTION=VALUE` pairs: `min_width`, `min_height`,
/// `width`, `height`, `max_width`, `max_height`, `ratio` (`ratio` also
/// accepts `W/H` fractions and compares at one decimal).
/// Usage: `dimensions:OPTION=VALUE,...`
pub struct Dimensions;

impl Rule for Dimensions {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let dims = match probe_dimensions(ctx, "formvalidator_make_invalid_file") {
            Err(early) => return early,
            Ok(Some(dims)) => dims,
            Ok(None) => return RuleOutcome::fail("formvalidator_make_invalid_file"),
        };
        let (width, height) = (dims.0 as i64, dims.1 as i64);

        let options = ctx.options_str();
        for constraint in options.split(',') {
            let Some((name, bound)) = constraint.split_once('=') else {
                continue;
            };
            let bound = bound.trim();

            let failed_key = match name.trim() {
                "min_width" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b > width)
                    .then_some("formvalidator_make_min_width"),
                "min_height" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b > height)
                    .then_some("formvalidator_make_min_height"),
                "width" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b != width)
                    .then_some("formvalidator_make_width"),
                "height" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b != height)
                    .then_some("formvalidator_make_height"),
                "max_width" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b < width)
                    .then_some("formvalidator_make_max_width"),
                "max_height" => bound
                    .parse::<i64>()
                    .is_ok_and(|b| b < height)
                    .then_some("formvalidator_make_max_height"),
                "ratio" => {
                    let expected = match bound.split_once('/') {
                        Some((num, den)) => {
                            let num = num.trim().parse::<f64>().ok();
                            let den = den.trim().parse::<f64>().ok();
                            match (num, den) {
                                (Some(n), Some(d)) if d != 0.0 => Some(n / d),
                                _ => None,
                            }
                        }
                        None => bound.trim().parse::<f64>().ok(),
                    };

                    let actual = width as f64 / height as f64;
                    expected
                        .is_some_and(|e| format!("{actual:.1}") != format!("{e:.1}"))
                        .then_some("formvalidator_make_ratio")
                }
                _ => None,
            };

            if let Some(key) = failed_key {
                return RuleOutcome::fail_with(key, options);
            }
        }

        RuleOutcome::Pass
    }
}

/// Name: `mimetypes`
///
/// The field's payload must have one of the specified MIME types
/// (comma separated), detected from magic bytes. `*` wildcards match
/// either half, e.g. `image/*`. Usage: `mimetypes:MIME_TYPE,...`
pub struct MimeTypes;

fn mime_matches(detected: &str, candidates: &str) -> bool {
    let Some((d_type, d_sub)) = detected.split_once('/') else {
        return false;
    };

    candidates.split(',').any(|candidate| {
        candidate.trim().split_once('/').is_some_and(|(c_type, c_sub)| {
            (c_type == "*" || c_type == d_type) && (c_sub == "*" || c_sub == d_sub)
        })
    })
}

impl Rule for MimeTypes {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let detected = if let Some(upload) = ctx.uploads.get(ctx.key) {
            if !upload.tmp_exists() {
                return RuleOutcome::fail("formvalidator_make_invalid_file");
            }
            infer::get_from_path(upload.path())
                .ok()
                .flatten()
                .map(|t| t.mime_type().to_string())
        } else {
            if !ctx.exists {
                return RuleOutcome::Skip;
            }
            ctx.value
                .as_str()
                .and_then(|s| infer::get(s.as_bytes()))
                .map(|t| t.mime_type().to_string())
        };

        match detected {
            Some(mime) if mime_matches(&mime, ctx.options_str()) => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_invalid_file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::{TestField, assert_fail, assert_pass, assert_skip};
    use std::io::Write;
    use validation_core::UploadedFile;

    /// Writes a 2x1 PNG and returns the temp file handle.
    fn png_upload() -> tempfile::NamedTempFile {
        let mut tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let mut bytes = Vec::new();
        let img = image::RgbImage::new(2, 1);
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        tmp.write_all(&bytes).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn test_file_requires_successful_upload() {
        // `file` never skips: an absent field without an upload fails.
        assert_fail(&File, &TestField::absent(), "formvalidator_make_invalid_file");

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let field = TestField::absent().upload(UploadedFile::new(tmp.path()));
        assert_pass(&File, &field);
    }

    #[test]
    fn test_file_rejects_transport_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let field = TestField::absent().upload(UploadedFile::with_error(tmp.path(), 3));
        assert_fail(&File, &field, "formvalidator_make_invalid_file");
    }

    #[test]
    fn test_file_rejects_missing_tmp() {
        let field = TestField::absent().upload(UploadedFile::new("/nonexistent/tmp"));
        assert_fail(&File, &field, "formvalidator_make_invalid_file");
    }

    #[test]
    fn test_image_upload() {
        let tmp = png_upload();
        let field = TestField::absent().upload(UploadedFile::new(tmp.path()));
        assert_pass(&Image, &field);
    }

    #[test]
    fn test_image_rejects_non_image_upload() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"plain text").unwrap();
        let field = TestField::absent().upload(UploadedFile::new(tmp.path()));
        assert_fail(&Image, &field, "formvalidator_make_image");
    }

    #[test]
    fn test_image_skips_without_upload_or_value() {
        assert_skip(&Image, &TestField::absent());
    }

    #[test]
    fn test_image_rejects_non_image_value() {
        assert_fail(
            &Image,
            &TestField::present("not image bytes"),
            "formvalidator_make_image",
        );
    }

    #[test]
    fn test_dimensions_checks() {
        let tmp = png_upload(); // 2x1

        let cases = [
            ("width=2,height=1", true),
            ("width=3", false),
            ("min_width=2", true),
            ("min_width=3", false),
            ("max_width=2,max_height=1", true),
            ("max_width=1", false),
            ("min_height=2", false),
            ("ratio=2", true),
            ("ratio=4/2", true),
            ("ratio=1", false),
        ];

        for (options, expect_pass) in cases {
            let field = TestField::absent()
                .upload(UploadedFile::new(tmp.path()))
                .options(options);
            let outcome = field.check(&Dimensions);
            assert_eq!(
                outcome == RuleOutcome::Pass,
                expect_pass,
                "options {options:?} gave {outcome:?}"
            );
        }
    }

    #[test]
    fn test_dimensions_invalid_payload() {
        let field = TestField::present("junk").options("width=2");
        assert_fail(&Dimensions, &field, "formvalidator_make_invalid_file");
    }

    #[test]
    fn test_mimetypes_upload() {
        let tmp = png_upload();

        for options in ["image/png", "image/*", "*/*", "text/plain,image/png"] {
            let field = TestField::absent()
                .upload(UploadedFile::new(tmp.path()))
                .options(options);
            assert_pass(&MimeTypes, &field);
        }

        let field = TestField::absent()
            .upload(UploadedFile::new(tmp.path()))
            .options("image/jpeg");
        assert_fail(&MimeTypes, &field, "formvalidator_make_invalid_file");
    }

    #[test]
    fn test_mimetypes_skips_without_upload_or_value() {
        assert_skip(&MimeTypes, &TestField::absent().options("image/*"));
    }

    #[test]
    fn test_mime_wildcard_matching() {
        assert!(mime_matches("image/png", "image/*"));
        assert!(mime_matches("image/png", "*/*"));
        assert!(mime_matches("image/png", "text/plain,image/png"));
        assert!(!mime_matches("image/png", "image/jpeg"));
        assert!(!mime_matches("image/png", "image"));
    }
}
