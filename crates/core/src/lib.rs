//! GC Core Library
//!
//! Types de base du modèle de chromosome: séquence binaire, générateurs
//! aléatoires, journaux d'événements et taxonomie d'erreurs.

pub mod error;
pub mod events;
pub mod logging;
pub mod random;
pub mod sequence;

// Réexportations principales
pub use error::{ChromError, Result};
pub use events::{BreakEvent, EventLog, MutationEvent, TabRecord};
pub use logging::{init_logging, level_for_verbosity};
// La macro log_operation est exportée à la racine du crate; elle passe par
// cette réexportation, l'appelant n'a pas besoin de dépendre de tracing
pub use tracing;
pub use random::{
    ChaChaUniform, GeneratorKind, GeometricRandom, InversionGeometric, Ranmar, ScriptedGeometric,
    ScriptedUniform, SeedSource, UniformRandom,
};
pub use sequence::{SequenceModel, SiteState};
