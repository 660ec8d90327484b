// src/app.rs
//
// Exercices Q-pur — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + fichiers.rs)
// - Ré-exporter Mode / Reglages (pour main.rs)
// - Relier le noyau (pur) aux fichiers : génération -> 2 fichiers, correction -> 1 fichier
//
// Important:
// - Le noyau ne fait aucune I/O ; tout passe par fichiers.rs.
// - La série complète est construite avant toute écriture.

pub mod etat;
pub mod fichiers;

pub use etat::{Mode, Reglages};

use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::noyau::{construire_serie, corriger, Bilan, ErreurNoyau, Generateur, Serie};
use fichiers::{ecrire_lignes, lire_lignes};

#[derive(Error, Debug)]
pub enum ErreurApp {
    #[error("fichier {}: {source}", chemin.display())]
    Io {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Noyau(#[from] ErreurNoyau),
}

/// Exécute le mode demandé ; renvoie le message de fin pour l’utilisateur.
pub fn executer(mode: &Mode, reglages: &Reglages) -> Result<String, ErreurApp> {
    match mode {
        Mode::Generer { nombre, plage } => {
            let serie = generer_fichiers(*nombre, *plage, reglages)?;
            Ok(format!(
                "{} exercices générés : exercices dans {}, réponses dans {}",
                serie.exercices.len(),
                reglages.sortie_exercices.display(),
                reglages.sortie_reponses.display()
            ))
        }
        Mode::Corriger {
            exercices,
            reponses,
        } => {
            let bilan = corriger_fichiers(exercices, reponses, reglages)?;
            Ok(format!(
                "correction terminée ({} justes, {} fausses) : bilan dans {}",
                bilan.justes.len(),
                bilan.fausses.len(),
                reglages.sortie_note.display()
            ))
        }
    }
}

pub fn generer_fichiers(
    nombre: u32,
    plage: u32,
    reglages: &Reglages,
) -> Result<Serie, ErreurApp> {
    let plage = Reglages::borner_plage(plage);
    let graine = reglages.graine.unwrap_or_else(|| rand::rng().random());
    log::info!("génération: {nombre} exercices, plage {plage}, graine {graine}");

    let rng = ChaCha8Rng::seed_from_u64(graine);
    let mut generateur = Generateur::new(plage, rng).avec_max_rejets(reglages.max_rejets);
    let serie = construire_serie(&mut generateur, nombre as usize, reglages.max_tentatives(nombre))?;

    ecrire_lignes(&reglages.sortie_exercices, &serie.lignes_exercices())?;
    ecrire_lignes(&reglages.sortie_reponses, &serie.lignes_reponses())?;
    Ok(serie)
}

pub fn corriger_fichiers(
    exercices: &Path,
    reponses: &Path,
    reglages: &Reglages,
) -> Result<Bilan, ErreurApp> {
    let lignes_ex = lire_lignes(exercices)?;
    let lignes_rep = lire_lignes(reponses)?;
    log::info!(
        "correction: {} exercices ({}), {} réponses ({})",
        lignes_ex.len(),
        exercices.display(),
        lignes_rep.len(),
        reponses.display()
    );

    let bilan = corriger(&lignes_ex, &lignes_rep)?;
    ecrire_lignes(&reglages.sortie_note, &bilan.lignes())?;
    Ok(bilan)
}
