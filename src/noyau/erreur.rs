// src/noyau/erreur.rs

use thiserror::Error;

/// Texte affiché quand un calcul est indéfini (division par zéro, valeur non finie).
pub const MARQUEUR_ERREUR: &str = "Error";

/// Erreurs du noyau.
///
/// Aucune n’est fatale : le moteur les convertit en `MARQUEUR_ERREUR`,
/// et la touche suivante efface tout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    ResultatNonFini,
}
