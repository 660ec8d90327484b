// src/noyau/serie.rs
//
// Construction d’une série d’exercices deux à deux distincts.
// - un tirage dont la forme canonique est déjà vue est ignoré (sans compter)
// - sinon : index suivant (à partir de 1), ligne d’exercice + ligne de réponse
// - tirage en dépassement (i64) ou rejet épuisé : ignoré aussi
// - tirage dont le texte relu ne redonne pas la réponse : ignoré (le correcteur échouerait)
// - nombre total de tirages borné : GenerationEchouee plutôt qu’une boucle infinie

use std::collections::HashSet;

use rand::Rng;

use super::descente::parse;
use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Expr;
use super::generateur::Generateur;
use super::rationnel::Rationnel;

/// Un exercice numéroté et sa réponse exacte.
#[derive(Clone, Debug)]
pub struct Exercice {
    pub index: usize,
    pub expr: Expr,
    pub reponse: Rationnel,
}

impl Exercice {
    /// "3. 1/2 + 1/3 ="
    pub fn ligne_exercice(&self) -> String {
        format!("{}. {} =", self.index, self.expr.format())
    }

    /// "3. 5/6"
    pub fn ligne_reponse(&self) -> String {
        format!("{}. {}", self.index, self.reponse)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Serie {
    pub exercices: Vec<Exercice>,
    /// Tirages effectués (doublons et rejets compris).
    pub tentatives: u64,
}

impl Serie {
    pub fn lignes_exercices(&self) -> Vec<String> {
        self.exercices.iter().map(Exercice::ligne_exercice).collect()
    }

    pub fn lignes_reponses(&self) -> Vec<String> {
        self.exercices.iter().map(Exercice::ligne_reponse).collect()
    }
}

/// Le texte affiché, relu puis recalculé, donne-t-il exactement `reponse` ?
fn relecture_fidele(expr: &Expr, reponse: &Rationnel) -> bool {
    parse(&expr.format())
        .and_then(|relu| relu.evaluate())
        .is_ok_and(|v| v == *reponse)
}

/// Tire des expressions jusqu’à obtenir `nombre` exercices distincts.
pub fn construire_serie<R: Rng>(
    generateur: &mut Generateur<R>,
    nombre: usize,
    max_tentatives: u64,
) -> Resultat<Serie> {
    let mut vus: HashSet<String> = HashSet::with_capacity(nombre);
    let mut serie = Serie {
        exercices: Vec::with_capacity(nombre),
        tentatives: 0,
    };

    while serie.exercices.len() < nombre {
        if serie.tentatives >= max_tentatives {
            return Err(ErreurNoyau::GenerationEchouee {
                tentatives: u32::try_from(serie.tentatives).unwrap_or(u32::MAX),
            });
        }
        serie.tentatives += 1;

        let expr = match generateur.generer() {
            Ok(e) => e,
            Err(e @ (ErreurNoyau::Depassement | ErreurNoyau::GenerationEchouee { .. })) => {
                log::warn!("tirage ignoré: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };

        let reponse = match expr.evaluate() {
            Ok(r) => r,
            Err(ErreurNoyau::Depassement) => {
                log::warn!("tirage ignoré (dépassement): {expr}");
                continue;
            }
            Err(e) => return Err(e),
        };

        if !relecture_fidele(&expr, &reponse) {
            log::warn!("tirage ignoré (relecture infidèle): {expr}");
            continue;
        }

        let canon = expr.canonical_form();
        if vus.contains(&canon) {
            log::debug!("doublon ignoré: {canon}");
            continue;
        }
        vus.insert(canon);

        let index = serie.exercices.len() + 1;
        serie.exercices.push(Exercice {
            index,
            expr,
            reponse,
        });
    }

    log::info!(
        "{} exercices distincts en {} tirages",
        serie.exercices.len(),
        serie.tentatives
    );
    Ok(serie)
}
