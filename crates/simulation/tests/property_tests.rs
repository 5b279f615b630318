//! Propriétés du modèle sur des configurations aléatoires

use gc_core::{ScriptedGeometric, ScriptedUniform, SiteState};
use gc_simulation::{Chromosome, ChromosomeConfig, RandomSources, RepairKind};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = ChromosomeConfig> {
    (2usize..400, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..=1.0, any::<u64>()).prop_map(
        |(length, mu_scale, c_scale, het, seed)| {
            // taux ramenés pour que les seuils restent dans [0, 1]
            ChromosomeConfig::new(
                length,
                mu_scale / length as f64,
                c_scale / (length - 1) as f64,
            )
            .with_heterozygosity(het)
            .with_seed(seed)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn length_invariant_holds(config in arb_config(), ticks in 1usize..300) {
        let length = config.length;
        let mut chrom = Chromosome::new(config).unwrap();
        for _ in 0..ticks {
            chrom.mutate();
            prop_assert_eq!(chrom.size(), length);
            chrom.break_check();
            prop_assert_eq!(chrom.size(), length);
            chrom.repair().unwrap();
            prop_assert_eq!(chrom.size(), length);
        }
    }

    #[test]
    fn break_sites_never_zero(config in arb_config(), ticks in 1usize..300) {
        let length = config.length;
        let mut chrom = Chromosome::new(config).unwrap();
        for _ in 0..ticks {
            chrom.tick().unwrap();
        }
        for event in chrom.break_log() {
            prop_assert!(event.site >= 1 && event.site < length);
        }
        prop_assert_eq!(chrom.pending_breaks(), 0);
    }

    #[test]
    fn minimal_repair_is_noop(config in arb_config(), ticks in 1usize..300) {
        let config = ChromosomeConfig { mutation_rate: 0.0, ..config }
            .with_repair(RepairKind::Minimal);
        let mut chrom = Chromosome::new(config).unwrap();
        let before = chrom.sequence().clone();
        for _ in 0..ticks {
            chrom.tick().unwrap();
        }
        prop_assert_eq!(chrom.sequence(), &before);
    }

    #[test]
    fn tract_end_stays_on_chromosome(
        length in 2usize..200,
        site_draw in 0.0f64..1.0,
        dir_draw in 0.0f64..1.0,
        tract in 0u64..10_000,
    ) {
        let config = ChromosomeConfig::new(length, 0.0, 0.5 / (length - 1) as f64)
            .with_heterozygosity(1.0);
        let sources = RandomSources {
            heterozygosity: Box::new(ScriptedUniform::new(vec![0.0])),
            mutation: Box::new(ScriptedUniform::new(vec![0.5])),
            dsbreak: Box::new(ScriptedUniform::new(vec![0.0, site_draw])),
            repair_direction: Box::new(ScriptedUniform::new(vec![dir_draw])),
            repair_tract: Box::new(ScriptedGeometric::new(vec![tract])),
        };
        let mut chrom = Chromosome::with_sources(config, 0, sources).unwrap();
        let outcome = chrom.tick().unwrap();
        let repair = outcome.repair.unwrap();

        prop_assert!(repair.tract_end < length);
        let (lo, hi) = if tract == 0 {
            (repair.site, repair.site)
        } else if repair.tract_end < repair.site {
            (repair.tract_end, repair.site)
        } else {
            (repair.site, repair.tract_end)
        };
        let homozygous = chrom.sequence().count(SiteState::Homozygous);
        let expected = if tract == 0 { 0 } else { hi - lo + 1 };
        prop_assert_eq!(homozygous, expected);
        prop_assert_eq!(repair.converted, expected);
    }
}
