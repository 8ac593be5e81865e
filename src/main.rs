use clap::Parser;

use bing_wallpaper_fetch::Opt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    bing_wallpaper_fetch::logging::init();
    bing_wallpaper_fetch::run(opt).await
}
