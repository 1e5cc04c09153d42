mod icon;
mod icon_set;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let caps = icon::Capabilities::detect();
    let output_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(icon_set::default_output_dir);

    let report = icon_set::build(&output_dir, caps)?;
    log::info!(
        "Wrote {} PNGs to {} (ico: {:?})",
        report.pngs.len(),
        output_dir.display(),
        report.container
    );

    Ok(())
}
