use std::path::PathBuf;

use url::Url;

/// Failure taxonomy for the wallpaper pipeline.
///
/// Each variant carries the URL or path it was working on, so a failed run
/// can be diagnosed from the message alone. Nothing is retried; every error
/// is terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GET itself failed (DNS, connection, timeout).
    #[error("request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The homepage markup did not contain the `#preloadBg` placeholder, or
    /// its `href` attribute was missing or unusable.
    #[error("could not find a wallpaper link in the #preloadBg element on {url}")]
    NotFound { url: Url },

    /// The wallpaper link has no `id` query parameter to name the file after.
    #[error("no usable id query parameter in wallpaper link {link}; cannot resolve a filename")]
    MissingParameter { link: Url },

    /// The `id` query parameter appears more than once. There is no defined
    /// tie-break, so refuse instead of guessing.
    #[error("id query parameter appears {count} times in wallpaper link {link}; cannot resolve a filename")]
    AmbiguousParameter { link: Url, count: usize },

    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converter was pointed at a file whose extension does not mark it
    /// as webp.
    #[error("{} is not a webp file", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file claimed to be webp but its bytes did not decode as webp.
    #[cfg(feature = "convert")]
    #[error("could not decode {} as webp: {}", path.display(), source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Required input was missing from the command line and the config file.
    #[error("{0}")]
    Usage(String),
}
