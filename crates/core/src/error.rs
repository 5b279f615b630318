//! Types d'erreurs pour le modèle de chromosome

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChromError {
    #[error("Longueur de chromosome invalide: {0} (doit être > 0)")]
    InvalidLength(usize),

    #[error("Taux invalide pour {name}: {value} (doit être fini et >= 0)")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Hétérozygotie hors plage: {0} pas dans [0, 1]")]
    HeterozygosityOutOfRange(f64),

    #[error("Seuil d'événement hors plage pour {name}: {threshold} > 1 (taux × sites)")]
    ThresholdOutOfRange { name: &'static str, threshold: f64 },

    #[error("Probabilité géométrique invalide: {0} pas dans ]0, 1]")]
    InvalidProbability(f64),

    #[error("Graine hors plage: ij={ij} (max 31328), kl={kl} (max 30081)")]
    SeedOutOfRange { ij: u32, kl: u32 },

    #[error("Plus d'une cassure double brin en attente ({pending}), réparation multiple non implémentée")]
    MultipleBreaksPending { pending: usize },

    #[error("Limite de ticks atteinte: {ticks} ticks, {breaks}/{target} cassures observées")]
    TickLimitReached { ticks: u64, breaks: u64, target: u64 },

    #[error("Configuration invalide: {0}")]
    InvalidConfig(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChromError>;
