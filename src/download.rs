use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use url::Url;

use crate::error::Error;

/// Stream the wallpaper body to `dest/filename` and return the final path.
///
/// The body is written chunk by chunk so memory stays bounded no matter how
/// large the image is. An existing file at the destination is overwritten.
/// On a failed transfer a truncated file may be left behind; the next
/// successful run overwrites it.
pub async fn save_wallpaper(
    client: &reqwest::Client,
    link: &Url,
    dest: &Path,
    filename: &str,
) -> Result<PathBuf, Error> {
    let output_path = dest.join(filename);

    let response = client
        .get(link.clone())
        .send()
        .await
        .map_err(|source| Error::Network {
            url: link.clone(),
            source,
        })?;

    let mut file = File::create(&output_path).map_err(|source| Error::Io {
        path: output_path.clone(),
        source,
    })?;

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|source| Error::Network {
            url: link.clone(),
            source,
        })?;
        file.write_all(&chunk).map_err(|source| Error::Io {
            path: output_path.clone(),
            source,
        })?;
    }

    Ok(output_path)
}
