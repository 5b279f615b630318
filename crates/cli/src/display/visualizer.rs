//! Affichage texte des sites

use gc_core::SiteState;
use gc_simulation::ChromosomeConfig;
use gc_utils::window::{self, DEFAULT_STRIDE, DEFAULT_WIDTH};
use std::io::{self, Write};

/// Écrit les paramètres puis les sites, centrés sur `mark` s'il existe
pub fn write_sites(
    out: &mut dyn Write,
    config: &ChromosomeConfig,
    sites: &[SiteState],
    mark: Option<usize>,
) -> io::Result<()> {
    writeln!(
        out,
        "length= {}  mu= {:e}  c= {:e}",
        config.length, config.mutation_rate, config.conversion_rate
    )?;
    match mark {
        Some(site) => window::write_centered(out, sites, site, DEFAULT_STRIDE, DEFAULT_WIDTH),
        None => window::write_window(out, sites, 0, None, DEFAULT_WIDTH, None),
    }
}
