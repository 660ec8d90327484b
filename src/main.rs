// src/main.rs
//
// Exercices Q-pur — point d’entrée (ligne de commande)
// ----------------------------------------------------
// Deux modes exclusifs :
// - génération : -n <nombre> -r <plage>  -> Exercises.txt + Answers.txt
// - correction : -e <exercices> -a <réponses> -> Grade.txt
//
// Drapeaux manquants ou mélangés : aide affichée, code de sortie 1.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use simplelog::LevelFilter;

mod app;
mod noyau;

use app::{Mode, Reglages};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Génère et corrige des exercices d’arithmétique (entiers et fractions)"
)]
struct Args {
    /// Nombre d’exercices à générer
    #[arg(short = 'n', value_name = "NOMBRE")]
    nombre: Option<u32>,

    /// Plage des nombres (entiers dans [0, plage], dénominateurs dans [2, plage])
    #[arg(short = 'r', value_name = "PLAGE")]
    plage: Option<u32>,

    /// Fichier d’exercices à corriger
    #[arg(short = 'e', value_name = "FICHIER")]
    exercices: Option<PathBuf>,

    /// Fichier de réponses à corriger
    #[arg(short = 'a', value_name = "FICHIER")]
    reponses: Option<PathBuf>,

    /// Graine du tirage (série reproductible)
    #[arg(long, value_name = "INT")]
    graine: Option<u64>,

    #[arg(long, value_name = "FICHIER", default_value = app::etat::FICHIER_EXERCICES)]
    exercices_out: PathBuf,

    #[arg(long, value_name = "FICHIER", default_value = app::etat::FICHIER_REPONSES)]
    reponses_out: PathBuf,

    #[arg(long, value_name = "FICHIER", default_value = app::etat::FICHIER_NOTE)]
    note_out: PathBuf,

    /// Plus de journal (-v : debug, -vv : trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Moins de journal (avertissements seulement)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    /// Exactement un couple complet : (-n, -r) ou (-e, -a).
    fn mode(&self) -> Option<Mode> {
        match (&self.nombre, &self.plage, &self.exercices, &self.reponses) {
            (Some(nombre), Some(plage), None, None) => Some(Mode::Generer {
                nombre: *nombre,
                plage: *plage,
            }),
            (None, None, Some(exercices), Some(reponses)) => Some(Mode::Corriger {
                exercices: exercices.clone(),
                reponses: reponses.clone(),
            }),
            _ => None,
        }
    }

    fn reglages(&self) -> Reglages {
        Reglages {
            graine: self.graine,
            sortie_exercices: self.exercices_out.clone(),
            sortie_reponses: self.reponses_out.clone(),
            sortie_note: self.note_out.clone(),
            ..Reglages::default()
        }
    }

    fn niveau_journal(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.niveau_journal(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let Some(mode) = args.mode() else {
        Args::command().print_help()?;
        println!();
        std::process::exit(1);
    };

    match app::executer(&mode, &args.reglages()) {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            Err(e.into())
        }
    }
}
