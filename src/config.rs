// src/config.rs
//
// Réglages (fichier TOML optionnel, natif seulement)
// --------------------------------------------------
// Recherche : $CALCULATRICE_CONFIG, sinon ./calculatrice.toml.
// Fichier absent => valeurs par défaut, sans bruit.
//
//   [fenetre]
//   largeur = 340.0
//   hauteur = 520.0
//
//   [journal]
//   niveau = "info"     # RUST_LOG reste prioritaire

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const FICHIER_DEFAUT: &str = "calculatrice.toml";
pub const VAR_ENV_CONFIG: &str = "CALCULATRICE_CONFIG";

/// Garde-fou : en dessous, la grille 4×5 devient illisible.
const LARGEUR_MIN: f32 = 240.0;
const HAUTEUR_MIN: f32 = 360.0;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {} impossible", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntaxe invalide dans {}", .chemin.display())]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("fenêtre trop petite ({largeur}×{hauteur}, minimum 240×360)")]
    Dimensions { largeur: f32, hauteur: f32 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 340.0,
            hauteur: 520.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Journal {
    /// Filtre `tracing` (ex: "info", "debug", "calculatrice_simple=trace").
    pub niveau: String,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            niveau: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fenetre: Fenetre,
    pub journal: Journal,
}

impl Config {
    /// Chemin du fichier : variable d’environnement, sinon répertoire courant.
    pub fn chemin_par_defaut() -> PathBuf {
        std::env::var_os(VAR_ENV_CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(FICHIER_DEFAUT))
    }

    /// Charge le fichier par défaut ; absent => `Config::default()`.
    pub fn charger_defaut() -> Result<Self, ErreurConfig> {
        let chemin = Self::chemin_par_defaut();
        match Self::charger(&chemin) {
            Err(ErreurConfig::Lecture { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            r => r,
        }
    }

    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&texte).map_err(|source| ErreurConfig::Syntaxe {
            chemin: chemin.to_path_buf(),
            source,
        })?;

        config.valider()?;
        Ok(config)
    }

    fn valider(&self) -> Result<(), ErreurConfig> {
        let (largeur, hauteur) = (self.fenetre.largeur, self.fenetre.hauteur);
        // NaN échoue aussi les deux comparaisons
        if !(largeur >= LARGEUR_MIN && hauteur >= HAUTEUR_MIN) {
            return Err(ErreurConfig::Dimensions { largeur, hauteur });
        }
        Ok(())
    }
}
