// src/app/fichiers.rs
//
// Collaborateur fichiers : lignes de texte UTF-8, rien de plus.
// - lecture : lignes rognées, rang conservé (une ligne vide reste une ligne) ;
//   seules les lignes vides de fin de fichier sont retirées
// - écriture : contenu complet dans un fichier temporaire voisin, puis renommage
//   (jamais de fichier cible à moitié écrit)

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::ErreurApp;

fn erreur_io(chemin: &Path, source: io::Error) -> ErreurApp {
    ErreurApp::Io {
        chemin: chemin.to_path_buf(),
        source,
    }
}

pub fn lire_lignes(chemin: &Path) -> Result<Vec<String>, ErreurApp> {
    let fichier = File::open(chemin).map_err(|e| erreur_io(chemin, e))?;
    let mut lignes = Vec::new();
    for ligne in BufReader::new(fichier).lines() {
        let ligne = ligne.map_err(|e| erreur_io(chemin, e))?;
        lignes.push(ligne.trim().to_string());
    }
    while lignes.last().is_some_and(|l| l.is_empty()) {
        lignes.pop();
    }
    log::debug!("{} lignes lues dans {}", lignes.len(), chemin.display());
    Ok(lignes)
}

/// ".Exercises.txt.tmp" dans le même répertoire (le renommage reste sur le même disque).
fn chemin_temporaire(chemin: &Path) -> PathBuf {
    let nom = chemin
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    chemin.with_file_name(format!(".{nom}.tmp"))
}

pub fn ecrire_lignes<S: AsRef<str>>(chemin: &Path, lignes: &[S]) -> Result<(), ErreurApp> {
    let mut contenu = String::new();
    for l in lignes {
        contenu.push_str(l.as_ref());
        contenu.push('\n');
    }

    let tmp = chemin_temporaire(chemin);
    let ecrit = fs::write(&tmp, contenu).and_then(|()| fs::rename(&tmp, chemin));
    if let Err(e) = ecrit {
        // best effort : le temporaire peut ne pas exister
        let _ = fs::remove_file(&tmp);
        return Err(erreur_io(chemin, e));
    }

    log::debug!("{} lignes écrites dans {}", lignes.len(), chemin.display());
    Ok(())
}
