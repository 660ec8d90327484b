//! src/app/etat.rs
//!
//! Réglages d’une exécution (sans noyau, sans I/O).
//!
//! Rôle : porter le mode choisi (génération / correction) et les paramètres,
//! avec des valeurs par défaut et des bornes explicites.
//!
//! Contrats :
//! - Aucune génération ni lecture de fichier ici.
//! - Défense en profondeur : plage bornée (PLAGE_MAX), budget de tirages borné.

use std::path::PathBuf;

use crate::noyau::generateur::REJETS_DEFAUT;

/// Fichiers produits par défaut (répertoire courant).
pub const FICHIER_EXERCICES: &str = "Exercises.txt";
pub const FICHIER_REPONSES: &str = "Answers.txt";
pub const FICHIER_NOTE: &str = "Grade.txt";

/// Garde-fou : au-delà, les produits de fractions sortent vite de i64.
pub const PLAGE_MAX: u32 = 100_000;

/// Budget de tirages de la série : fixe + proportionnel au nombre demandé.
const TENTATIVES_BASE: u64 = 1000;
const TENTATIVES_PAR_EXERCICE: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Generer { nombre: u32, plage: u32 },
    Corriger { exercices: PathBuf, reponses: PathBuf },
}

#[derive(Clone, Debug)]
pub struct Reglages {
    /// Graine du tirage (None : graine aléatoire).
    pub graine: Option<u64>,
    pub max_rejets: u32,

    pub sortie_exercices: PathBuf,
    pub sortie_reponses: PathBuf,
    pub sortie_note: PathBuf,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            graine: None,
            max_rejets: REJETS_DEFAUT,
            sortie_exercices: PathBuf::from(FICHIER_EXERCICES),
            sortie_reponses: PathBuf::from(FICHIER_REPONSES),
            sortie_note: PathBuf::from(FICHIER_NOTE),
        }
    }
}

impl Reglages {
    /// Garde-fou : limite la plage (avertit si on coupe).
    pub fn borner_plage(plage: u32) -> u32 {
        if plage > PLAGE_MAX {
            log::warn!("plage {plage} ramenée à {PLAGE_MAX}");
        }
        plage.min(PLAGE_MAX)
    }

    /// Nombre maximum de tirages pour `nombre` exercices distincts.
    pub fn max_tentatives(&self, nombre: u32) -> u64 {
        TENTATIVES_BASE + TENTATIVES_PAR_EXERCICE * u64::from(nombre)
    }
}
