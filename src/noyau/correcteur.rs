// src/noyau/correcteur.rs
//
// Correction : chaque exercice est relu, recalculé, puis comparé (texte) à la réponse
// de même rang. L’alignement se fait par position, pas par le numéro écrit.
//
// Formats :
//   exercice : "N. <expression> ="
//   réponse  : "N. <valeur>"
//   bilan    : "Correct: 2 (1, 3)" / "Wrong: 1 (2)"
//
// Une ligne illisible interrompt toute la correction (erreur propagée).

use super::erreur::{ErreurNoyau, Resultat};
use super::eval::evaluer_texte;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub justes: Vec<usize>,
    pub fausses: Vec<usize>,
}

fn ligne_bilan(titre: &str, indices: &[usize]) -> String {
    let liste: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("{titre}: {} ({})", indices.len(), liste.join(", "))
}

impl Bilan {
    /// Les deux lignes du fichier de note.
    pub fn lignes(&self) -> Vec<String> {
        vec![
            ligne_bilan("Correct", &self.justes),
            ligne_bilan("Wrong", &self.fausses),
        ]
    }
}

/// "N. 1/2 + 1/3 =" -> "1/2 + 1/3" (préfixe jusqu’au premier espace, suffixe depuis le dernier '=').
pub fn extraire_expression(index: usize, ligne: &str) -> Resultat<&str> {
    let apres_index = ligne.split_once(' ').map_or(ligne, |(_, reste)| reste);
    let (expr, _) = apres_index
        .rsplit_once('=')
        .ok_or_else(|| ErreurNoyau::LigneMalformee {
            index,
            ligne: ligne.to_string(),
        })?;
    Ok(expr.trim())
}

/// "N. 5/6" -> "5/6" (tout ce qui suit le premier '.').
pub fn extraire_reponse(ligne: &str) -> &str {
    ligne.split_once('.').map_or(ligne, |(_, reste)| reste).trim()
}

pub fn corriger<S: AsRef<str>>(exercices: &[S], reponses: &[S]) -> Resultat<Bilan> {
    let mut bilan = Bilan::default();

    for (i, exercice) in exercices.iter().enumerate() {
        let index = i + 1;
        let texte = extraire_expression(index, exercice.as_ref())?;
        let (attendue, demarche) = evaluer_texte(texte)?;

        let donnee = reponses
            .get(i)
            .map(|r| extraire_reponse(r.as_ref()))
            .ok_or(ErreurNoyau::ReponseManquante { index })?;

        log::debug!(
            "exercice {index}: jetons [{}] arbre {} canon {} attendu {attendue} donné {donnee}",
            demarche.jetons,
            demarche.arbre,
            demarche.canon
        );

        if attendue == donnee {
            bilan.justes.push(index);
        } else {
            bilan.fausses.push(index);
        }
    }

    log::info!(
        "correction: {} justes, {} fausses",
        bilan.justes.len(),
        bilan.fausses.len()
    );
    Ok(bilan)
}
