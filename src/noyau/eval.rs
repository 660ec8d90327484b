//! Noyau — évaluation d’un texte d’exercice (pipeline complet)
//!
//! texte -> jetons -> Expr (descente récursive) -> Rationnel -> réponse affichée
//!
//! La démarche garde une trace de chaque étape (journal du correcteur).

use super::descente::parse_tokens;
use super::erreur::Resultat;
use super::jetons::{format_tokens, tokenize};

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub canon: String,
}

/// API publique : évalue une expression nue (sans "N. " ni " =") et retourne
/// la réponse au format fichier (7, 3/4, 2’1/3) avec la démarche.
pub fn evaluer_texte(expr_str: &str) -> Resultat<(String, Demarche)> {
    let jetons = tokenize(expr_str.trim())?;
    let expr = parse_tokens(&jetons)?;
    let valeur = expr.evaluate()?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        arbre: expr.format(),
        canon: expr.canonical_form(),
    };
    Ok((valeur.to_string(), d))
}
