//! Noyau de la calculatrice (4 opérations, évaluation dans l’ordre de saisie)
//!
//! Organisation interne :
//! - erreur.rs    : erreurs + marqueur d’écran
//! - operateur.rs : les 4 opérations binaires
//! - format.rs    : f64 -> texte de l’écran (fixe / scientifique)
//! - moteur.rs    : état + automate des touches

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operateur;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use moteur::Moteur;
pub use operateur::Operateur;
