//! Commande de simulation jusqu'à un nombre de cassures

use crate::display::stats::{composition_table, heading, write_runs_report, write_site_histogram};
use crate::display::visualizer::write_sites;
use crate::{create_progress_bar, GeneratorArg, OutputFormat, RepairArg};
use anyhow::{Context, Result};
use clap::Args;
use gc_core::{GeneratorKind, SeedSource};
use gc_simulation::{run_with_progress, Chromosome, RepairKind, SimulationConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Fichier JSON (sections `chromosome` et `run`), voir `defaults`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Nombre de sites
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Taux de mutation par site
    #[arg(long)]
    pub mu: Option<f64>,

    /// Taux de cassure/conversion par site
    #[arg(long)]
    pub c: Option<f64>,

    /// Fraction initiale de sites hétérozygotes
    #[arg(long)]
    pub het: Option<f64>,

    /// Paramètre p de la loi géométrique des tracts
    #[arg(long)]
    pub tract_p: Option<f64>,

    /// Politique de réparation
    #[arg(long, value_enum)]
    pub repair: Option<RepairArg>,

    /// Générateur uniforme
    #[arg(long, value_enum)]
    pub generator: Option<GeneratorArg>,

    /// Graine fixe
    #[arg(long, conflicts_with = "clock_seed")]
    pub seed: Option<u64>,

    /// Graine tirée de l'horloge
    #[arg(long)]
    pub clock_seed: bool,

    /// Nombre de cassures avant l'arrêt
    #[arg(short, long)]
    pub breaks: Option<u64>,

    /// Nombre maximal de ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Journal des mutations (TSV)
    #[arg(long)]
    pub mutations_out: Option<PathBuf>,

    /// Journal des cassures (TSV)
    #[arg(long)]
    pub breaks_out: Option<PathBuf>,

    /// Affiche les statistiques de plages de la séquence finale
    #[arg(long)]
    pub runs: bool,

    /// Affiche les sites finaux autour de la dernière cassure
    #[arg(long)]
    pub show_sequence: bool,

    /// Format du bilan
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Configuration du fichier éventuel, surchargée par les options
pub fn build_config(args: &RunArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("lecture de la configuration {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let chromosome = &mut config.chromosome;
    if let Some(length) = args.length {
        chromosome.length = length;
    }
    if let Some(mu) = args.mu {
        chromosome.mutation_rate = mu;
    }
    if let Some(c) = args.c {
        chromosome.conversion_rate = c;
    }
    if let Some(het) = args.het {
        chromosome.heterozygosity = het;
    }
    if let Some(p) = args.tract_p {
        chromosome.tract_probability = p;
    }
    if let Some(repair) = args.repair {
        chromosome.repair = match repair {
            RepairArg::Minimal => RepairKind::Minimal,
            RepairArg::Tract => RepairKind::Tract,
        };
    }
    if let Some(generator) = args.generator {
        chromosome.generator = match generator {
            GeneratorArg::Chacha => GeneratorKind::ChaCha,
            GeneratorArg::Ranmar => GeneratorKind::Ranmar,
        };
    }
    if let Some(seed) = args.seed {
        chromosome.seed = SeedSource::Fixed(seed);
    } else if args.clock_seed {
        chromosome.seed = SeedSource::Clock;
    }

    if let Some(breaks) = args.breaks {
        config.run.target_breaks = breaks;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.run.max_ticks = Some(max_ticks);
    }

    config.validate().context("configuration invalide")?;
    debug!(?config, "configuration retenue");
    Ok(config)
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    let table = args.format == OutputFormat::Table;
    let stdout = io::stdout();

    let mut chromosome =
        Chromosome::new(config.chromosome.clone()).context("initialisation du chromosome")?;

    if table {
        println!("{}", heading("Composition initiale"));
        write_site_histogram(&mut stdout.lock(), chromosome.sequence())?;
    }

    let pb = create_progress_bar(config.run.target_breaks, "Simulation en cours...");
    let summary = match run_with_progress(&mut chromosome, &config.run, |summary| {
        pb.set_position(summary.breaks)
    }) {
        Ok(summary) => summary,
        Err(e) => {
            pb.abandon_with_message(String::from("Simulation interrompue"));
            return Err(e).context("simulation");
        }
    };
    pb.finish_with_message(String::from("Simulation terminée"));

    if let Some(path) = &args.mutations_out {
        write_log(path, |out| chromosome.write_mutations(out, true))?;
    }
    if let Some(path) = &args.breaks_out {
        write_log(path, |out| chromosome.write_breaks(out, true))?;
    }

    match args.format {
        OutputFormat::Table => {
            println!("{}", heading("Bilan"));
            println!("{}", summary.format_table());
            println!("{}", composition_table(&summary));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if (args.runs || args.show_sequence) && !table {
        warn!("--runs et --show-sequence ne sont affichés qu'au format table");
        return Ok(());
    }
    if args.runs {
        println!("{}", heading("Plages"));
        write_runs_report(&mut stdout.lock(), chromosome.sequence())?;
    }
    if args.show_sequence {
        println!("{}", heading("Séquence finale"));
        let mark = chromosome.break_log().last().map(|event| event.site);
        write_sites(
            &mut stdout.lock(),
            chromosome.config(),
            chromosome.sequence().sites(),
            mark,
        )?;
    }

    Ok(())
}

/// Écrit un journal tabulé dans `path`
fn write_log<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("création de {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("écriture de {}", path.display()))?;
    out.flush()?;
    info!(path = %path.display(), "journal écrit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: RunArgs,
    }

    fn parse(argv: &[&str]) -> RunArgs {
        let mut full = vec!["chrom-gc"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = build_config(&parse(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "--length", "500", "--mu", "0.001", "--c", "0.002", "--repair", "minimal",
            "--generator", "ranmar", "--seed", "7", "--breaks", "3", "--max-ticks", "1000",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.chromosome.length, 500);
        assert_eq!(config.chromosome.mutation_rate, 0.001);
        assert_eq!(config.chromosome.conversion_rate, 0.002);
        assert_eq!(config.chromosome.repair, RepairKind::Minimal);
        assert_eq!(config.chromosome.generator, GeneratorKind::Ranmar);
        assert_eq!(config.chromosome.seed, SeedSource::Fixed(7));
        assert_eq!(config.run.target_breaks, 3);
        assert_eq!(config.run.max_ticks, Some(1000));
    }

    #[test]
    fn test_file_then_flags() {
        let path = std::env::temp_dir().join(format!("chrom-gc-run-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"chromosome": {"length": 50, "heterozygosity": 0.2}, "run": {"target_breaks": 5}}"#,
        )
        .unwrap();
        let args = parse(&["--config", path.to_str().unwrap(), "--het", "0.5"]);
        let config = build_config(&args);
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();
        assert_eq!(config.chromosome.length, 50);
        assert_eq!(config.chromosome.heterozygosity, 0.5);
        assert_eq!(config.run.target_breaks, 5);
    }

    #[test]
    fn test_invalid_override_rejected() {
        assert!(build_config(&parse(&["--het", "1.5"])).is_err());
        assert!(build_config(&parse(&["--length", "0"])).is_err());
    }

    #[test]
    fn test_seed_conflicts_with_clock() {
        let argv = ["chrom-gc", "--seed", "1", "--clock-seed"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_write_log_to_file() {
        let config = SimulationConfig::default().chromosome.with_seed(3);
        let chromosome = Chromosome::new(config).unwrap();
        let path = std::env::temp_dir().join(format!("chrom-gc-log-{}.tsv", std::process::id()));
        write_log(&path, |out| chromosome.write_breaks(out, true)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "event_threshold\tevent_draw\tevent_site\n");
    }
}
