//! Implementations of each subcommand.

use anyhow::{anyhow, ensure, Context, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use maskarray::io::{export_mask, import_mask_as, import_mask_with_pool, MaskFormat};
use maskarray::pool::SharedRowPool;
use maskarray::MaskArray;

use crate::config::Config;
use crate::CombineOp;

pub fn info(path: &Path) -> Result<()> {
    let mask = load_mask(path, SharedRowPool::new())?;
    println!("size:            {}x{}", mask.width(), mask.height());
    println!("population:      {}", mask.population());
    match mask.bounding_rect() {
        Some(rect) => println!("bounding box:    {}", rect),
        None => println!("bounding box:    none"),
    }
    println!("{}", mask.stats());
    Ok(())
}

pub fn convert(
    config: &Config,
    input: &Path,
    output: &Path,
    format: Option<MaskFormat>,
) -> Result<()> {
    let mask = load_mask(input, SharedRowPool::new())?;
    save_mask(config, &mask, output, format)
}

pub fn combine(
    config: &Config,
    op: CombineOp,
    a: &Path,
    b: &Path,
    output: &Path,
    format: Option<MaskFormat>,
) -> Result<()> {
    let pool = SharedRowPool::new();
    let a = load_mask(a, pool.clone())?;
    let b = load_mask(b, pool.clone())?;
    ensure!(
        a.size() == b.size(),
        "cannot combine masks of different sizes ({} and {})",
        a.size(),
        b.size(),
    );
    let result = match op {
        CombineOp::Union => a.union(&b),
        CombineOp::Intersection => a.intersection(&b),
        CombineOp::Difference => a.difference(&b),
        CombineOp::Xor => a.symmetric_difference(&b),
    }?;
    info!(
        "{:?} of {} and {} cells has {} cells",
        op,
        a.population(),
        b.population(),
        result.population(),
    );
    drop((a, b));
    if config.gc_after_combine {
        pool.collect_garbage();
    }
    debug!("Row pool holds {} patterns", pool.len());
    save_mask(config, &result, output, format)
}

pub fn render(config: &Config, path: &Path) -> Result<()> {
    let mask = load_mask(path, SharedRowPool::new())?;
    print!("{}", mask.render(config.render_set, config.render_clear));
    Ok(())
}

/// Loads a mask, using the format implied by the file extension if there is
/// one and trying every format otherwise.
fn load_mask(path: &Path, pool: SharedRowPool) -> Result<MaskArray> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let mask = match MaskFormat::from_path(path) {
        Some(format) => import_mask_as(&data, format, pool)
            .with_context(|| format!("loading {} as {}", path.display(), format))?,
        None => import_mask_with_pool(&data, pool).map_err(|errors| {
            anyhow!(
                "unable to load {}: {}",
                path.display(),
                errors.iter().join("; "),
            )
        })?,
    };
    info!(
        "Loaded {}x{} mask from {}",
        mask.width(),
        mask.height(),
        path.display(),
    );
    Ok(mask)
}

fn save_mask(
    config: &Config,
    mask: &MaskArray,
    path: &Path,
    format: Option<MaskFormat>,
) -> Result<()> {
    let format = output_format(config, path, format);
    let data = export_mask(mask, format)?;
    fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {} bytes of {} to {}", data.len(), format, path.display());
    Ok(())
}

fn output_format(config: &Config, path: &Path, format: Option<MaskFormat>) -> MaskFormat {
    format
        .or_else(|| MaskFormat::from_path(path))
        .unwrap_or_else(|| {
            warn!(
                "Unknown extension for {}; using {}",
                path.display(),
                config.default_format,
            );
            config.default_format
        })
}
