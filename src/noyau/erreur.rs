// src/noyau/erreur.rs
//
// Erreurs du noyau (sans I/O).
// Les erreurs fichiers vivent côté app (app.rs).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement arithmétique (i64)")]
    Depassement,

    #[error("expression malformée (position {position}) : {message}")]
    Lecture { position: usize, message: String },

    #[error("génération abandonnée après {tentatives} tentatives")]
    GenerationEchouee { tentatives: u32 },

    #[error("réponse manquante pour l’exercice {index}")]
    ReponseManquante { index: usize },

    #[error("ligne d’exercice {index} malformée : {ligne:?}")]
    LigneMalformee { index: usize, ligne: String },
}

impl ErreurNoyau {
    pub(crate) fn lecture(position: usize, message: impl Into<String>) -> Self {
        ErreurNoyau::Lecture {
            position,
            message: message.into(),
        }
    }
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
