//! Séquence binaire homozygote/hétérozygote d'un chromosome

use crate::error::{ChromError, Result};
use crate::random::UniformRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// État d'un site
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SiteState {
    #[default]
    Homozygous = 0,
    Heterozygous = 1,
}

impl SiteState {
    /// Tous les états, dans l'ordre de leur code
    pub const ALL: [SiteState; 2] = [SiteState::Homozygous, SiteState::Heterozygous];

    pub fn is_homozygous(self) -> bool {
        self == SiteState::Homozygous
    }

    pub fn is_heterozygous(self) -> bool {
        self == SiteState::Heterozygous
    }

    /// Code numérique (0 = homozygote, 1 = hétérozygote)
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        match self {
            SiteState::Homozygous => '0',
            SiteState::Heterozygous => '1',
        }
    }
}

impl fmt::Display for SiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Séquence de `length` sites
///
/// `length` et la taille du stockage doivent toujours coïncider après
/// [`SequenceModel::init`]. Un écart est une erreur de programmation et
/// provoque un arrêt immédiat lors de [`SequenceModel::size`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceModel {
    length: usize,
    sites: Vec<SiteState>,
}

impl SequenceModel {
    /// Crée une séquence de `length` sites homozygotes
    pub fn new(length: usize) -> Self {
        let mut model = Self {
            length: 0,
            sites: Vec::new(),
        };
        model.init(length);
        model
    }

    /// Fixe la longueur et remet tous les sites à l'état homozygote
    pub fn init(&mut self, length: usize) {
        self.length = length;
        self.sites.clear();
        self.sites.resize(length, SiteState::Homozygous);
    }

    /// Modifie la longueur sans toucher au stockage
    ///
    /// Doit être suivi de [`SequenceModel::reinit`] ou d'un `init`.
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Réinitialise le stockage à la longueur courante
    pub fn reinit(&mut self) {
        self.init(self.length);
    }

    /// Met tous les sites dans le même état
    pub fn fill(&mut self, state: SiteState) {
        self.sites.iter_mut().for_each(|site| *site = state);
    }

    /// Remet tout à l'état homozygote puis rend chaque site hétérozygote
    /// avec probabilité `heterozygosity`, un tirage par site
    pub fn set_heterozygosity(
        &mut self,
        heterozygosity: f64,
        uniform: &mut dyn UniformRandom,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&heterozygosity) {
            return Err(ChromError::HeterozygosityOutOfRange(heterozygosity));
        }
        self.fill(SiteState::Homozygous);
        for site in self.sites.iter_mut() {
            if uniform.draw() < heterozygosity {
                *site = SiteState::Heterozygous;
            }
        }
        Ok(())
    }

    /// Nombre de sites, après vérification de l'invariant de longueur
    pub fn size(&self) -> usize {
        self.check();
        self.length
    }

    /// Longueur configurée, sans vérification
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn sites(&self) -> &[SiteState] {
        &self.sites
    }

    pub fn get(&self, index: usize) -> SiteState {
        self.sites[index]
    }

    pub fn set(&mut self, index: usize, state: SiteState) {
        self.sites[index] = state;
    }

    /// Nombre de sites dans l'état donné
    pub fn count(&self, state: SiteState) -> usize {
        self.sites.iter().filter(|&&s| s == state).count()
    }

    /// Fraction de sites hétérozygotes
    pub fn heterozygosity(&self) -> f64 {
        if self.sites.is_empty() {
            return 0.0;
        }
        self.count(SiteState::Heterozygous) as f64 / self.sites.len() as f64
    }

    fn check(&self) {
        assert_eq!(
            self.length,
            self.sites.len(),
            "SequenceModel::check(): longueur modifiée sans init()"
        );
    }
}

impl fmt::Display for SequenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for site in &self.sites {
            write!(f, "{}", site.as_char())?;
        }
        Ok(())
    }
}
