pub mod config;
#[cfg(feature = "convert")]
pub mod convert;
pub mod download;
pub mod error;
pub mod logging;
pub mod name;
pub mod opt;
pub mod page;

use std::path::{Path, PathBuf};

use tracing::info;

pub use config::Config;
#[cfg(doc)]
pub use config::Raw as RawConfig;
pub use error::Error;
pub use opt::Opt;

/// Run the whole pipeline: resolve the wallpaper link, derive a filename,
/// download the image, and optionally convert it to png.
///
/// The steps form a strict linear sequence; the first failure aborts the run.
pub async fn run(opt: Opt) -> anyhow::Result<()> {
    if let Some(shell) = opt.completion {
        Opt::print_completion(&mut std::io::stdout(), shell);
        return Ok(());
    }

    let config = Config::initialize(&opt)?;
    let client = reqwest::Client::new();

    let link = page::fetch_wallpaper_link(&client, &config.base_url).await?;
    info!("found wallpaper link: {link}");
    println!("{link}");

    let filename = name::wallpaper_name(&link, config.filename.as_deref())?;

    let saved = download::save_wallpaper(&client, &link, &config.output_dir, &filename).await?;
    info!("saved wallpaper to {}", saved.display());
    println!("{}", saved.display());

    if config.convert_png {
        let converted = convert_step(&saved)?;
        info!("converted {} to png", saved.display());
        println!("{}", converted.display());
    }

    Ok(())
}

#[cfg(feature = "convert")]
fn convert_step(path: &Path) -> Result<PathBuf, Error> {
    convert::convert_webp_to_png(path)
}

#[cfg(not(feature = "convert"))]
fn convert_step(path: &Path) -> Result<PathBuf, Error> {
    let _ = path;
    Err(Error::Usage(
        "this build does not include the png converter; rebuild with the `convert` feature"
            .to_string(),
    ))
}
