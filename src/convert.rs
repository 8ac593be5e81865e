use std::path::{Path, PathBuf};

use crate::error::Error;

/// `true` when the path's extension marks the provider's lossy webp format.
pub fn is_webp(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("webp"))
}

/// Decode a webp wallpaper and re-encode it as png at a sibling path with
/// the extension swapped.
///
/// The original file is left in place. Png is lossless, so the decoded pixel
/// data survives the round trip exactly.
pub fn convert_webp_to_png(path: &Path) -> Result<PathBuf, Error> {
    if !is_webp(path) {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|source| decode_error(path, source))?;

    let png_path = path.with_extension("png");
    image
        .save_with_format(&png_path, image::ImageFormat::Png)
        .map_err(|source| decode_error(&png_path, source))?;

    Ok(png_path)
}

fn decode_error(path: &Path, source: image::ImageError) -> Error {
    match source {
        image::ImageError::IoError(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        source => Error::Decode {
            path: path.to_path_buf(),
            source,
        },
    }
}
