//! Noyau exact Q-pur : exercices d’arithmétique
//!
//! Organisation interne :
//! - rationnel.rs  : rationnel exact borné (i64, arithmétique vérifiée)
//! - expr.rs       : AST (Nombre, Fraction, Binaire) + évaluation
//! - format.rs     : affichage au format fichier (2’1/3, ×, ÷)
//! - canon.rs      : forme canonique (déduplication)
//! - jetons.rs     : tokenisation
//! - descente.rs   : descente récursive jetons -> Expr
//! - eval.rs       : pipeline texte -> réponse
//! - generateur.rs : tirage aléatoire sous contraintes
//! - serie.rs      : série d’exercices distincts
//! - correcteur.rs : correction + bilan
//! - erreur.rs     : erreurs du noyau

pub mod canon;
pub mod correcteur;
pub mod descente;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod generateur;
pub mod jetons;
pub mod rationnel;
pub mod serie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use correcteur::{corriger, Bilan};
pub use erreur::ErreurNoyau;
pub use generateur::Generateur;
pub use serie::{construire_serie, Serie};
