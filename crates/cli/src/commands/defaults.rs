//! Commande d'affichage de la configuration par défaut

use anyhow::Result;
use gc_simulation::SimulationConfig;

/// Le JSON produit est directement utilisable avec `run --config`
pub fn run() -> Result<()> {
    println!("{}", SimulationConfig::default().to_json_pretty()?);
    Ok(())
}
