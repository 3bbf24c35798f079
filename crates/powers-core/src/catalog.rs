//! Static layer names and their translations.
//!
//! The English table doubles as the canonical, language-neutral index space:
//! every other table is aligned to it by position.

use crate::error::CoreError;
use crate::morse;

pub const LAYER_COUNT: usize = 32;
pub const HOME_LAYER: &str = "Human";

pub const ENGLISH: [&str; LAYER_COUNT] = [
    "Quark",
    "Electron",
    "Proton",
    "Neutron",
    "Atom",
    "Molecule",
    "Macromolecule",
    "Organelle",
    "Cell",
    "Tissue",
    "Organ",
    "Organ System",
    "Human",
    "Group",
    "Dwelling",
    "Neighborhood",
    "City",
    "Region",
    "Nation State",
    "Continent",
    "Planet",
    "Moon",
    "Solar System",
    "Star Cluster",
    "Galaxy",
    "Galactic Cluster",
    "Supercluster",
    "Cosmic Web",
    "Observable Universe",
    "Entire Universe",
    "Adjacent Universe",
    "Mathematical Substrate",
];

pub const GERMAN: [&str; LAYER_COUNT] = [
    "Quark",
    "Elektron",
    "Proton",
    "Neutron",
    "Atom",
    "Molekül",
    "Makromolekül",
    "Organell",
    "Zelle",
    "Gewebe",
    "Organ",
    "Organsystem",
    "Mensch",
    "Gruppe",
    "Behausung",
    "Nachbarschaft",
    "Stadt",
    "Region",
    "Nationalstaat",
    "Kontinent",
    "Planet",
    "Mond",
    "Sonnensystem",
    "Sternhaufen",
    "Galaxie",
    "Galaxienhaufen",
    "Superhaufen",
    "Kosmisches Netz",
    "Beobachtbares Universum",
    "Gesamtes Universum",
    "Angrenzendes Universum",
    "Mathematisches Substrat",
];

pub const FRENCH: [&str; LAYER_COUNT] = [
    "Quark",
    "Électron",
    "Proton",
    "Neutron",
    "Atome",
    "Molécule",
    "Macromolécule",
    "Organite",
    "Cellule",
    "Tissu",
    "Organe",
    "Système d'organes",
    "Humain",
    "Groupe",
    "Habitation",
    "Quartier",
    "Ville",
    "Région",
    "État-nation",
    "Continent",
    "Planète",
    "Lune",
    "Système solaire",
    "Amas d'étoiles",
    "Galaxie",
    "Amas galactique",
    "Superamas",
    "Toile cosmique",
    "Univers observable",
    "Univers entier",
    "Univers adjacent",
    "Substrat mathématique",
];

pub const SPANISH: [&str; LAYER_COUNT] = [
    "Quark",
    "Electrón",
    "Protón",
    "Neutrón",
    "Átomo",
    "Molécula",
    "Macromolécula",
    "Orgánulo",
    "Célula",
    "Tejido",
    "Órgano",
    "Sistema de órganos",
    "Humano",
    "Grupo",
    "Vivienda",
    "Vecindario",
    "Ciudad",
    "Región",
    "Estado nación",
    "Continente",
    "Planeta",
    "Luna",
    "Sistema solar",
    "Cúmulo estelar",
    "Galaxia",
    "Cúmulo galáctico",
    "Supercúmulo",
    "Red cósmica",
    "Universo observable",
    "Universo completo",
    "Universo adyacente",
    "Sustrato matemático",
];

/// Language or encoding used to render layer names, in click-cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Morse,
    English,
    German,
    French,
    Spanish,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 5] = [
        DisplayMode::Morse,
        DisplayMode::English,
        DisplayMode::German,
        DisplayMode::French,
        DisplayMode::Spanish,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps modulo [`DisplayMode::COUNT`].
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DisplayMode::Morse => "Morse Code",
            DisplayMode::English => "English",
            DisplayMode::German => "Deutsch",
            DisplayMode::French => "Français",
            DisplayMode::Spanish => "Español",
        }
    }

    /// Direct translation table; `None` for Morse, which is derived from English.
    pub fn table(self) -> Option<&'static [&'static str; LAYER_COUNT]> {
        match self {
            DisplayMode::Morse => None,
            DisplayMode::English => Some(&ENGLISH),
            DisplayMode::German => Some(&GERMAN),
            DisplayMode::French => Some(&FRENCH),
            DisplayMode::Spanish => Some(&SPANISH),
        }
    }
}

/// Captions of the two auxiliary help buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiLabel {
    About,
    Navigate,
}

impl UiLabel {
    /// Caption in `mode`; Morse encodes the English caption.
    pub fn caption(self, mode: DisplayMode) -> String {
        let (about, navigate) = match mode {
            DisplayMode::Morse | DisplayMode::English => ("About", "Navigate"),
            DisplayMode::German => ("Über", "Navigieren"),
            DisplayMode::French => ("À propos", "Naviguer"),
            DisplayMode::Spanish => ("Acerca de", "Navegar"),
        };
        let text = match self {
            UiLabel::About => about,
            UiLabel::Navigate => navigate,
        };
        if mode == DisplayMode::Morse {
            morse::encode(text)
        } else {
            text.to_string()
        }
    }
}

/// Canonical index of the start-up layer.
pub fn home_index() -> Option<usize> {
    ENGLISH.iter().position(|name| *name == HOME_LAYER)
}

/// Name of layer `index` in `mode`. Indices wrap modulo [`LAYER_COUNT`].
pub fn translate(index: usize, mode: DisplayMode) -> String {
    let index = index % LAYER_COUNT;
    match mode.table() {
        Some(table) => table[index].to_string(),
        None => morse::encode(ENGLISH[index]),
    }
}

/// `[<mode name>] <layer name>` as shown in the object display.
pub fn object_label(index: usize, mode: DisplayMode) -> String {
    format!("[{}] {}", mode.display_name(), translate(index, mode))
}

fn check_table(name: &'static str, table: &[&str]) -> Result<(), CoreError> {
    if table.len() != LAYER_COUNT {
        return Err(CoreError::TableLength {
            table: name,
            expected: LAYER_COUNT,
            actual: table.len(),
        });
    }
    if let Some(index) = table.iter().position(|entry| entry.trim().is_empty()) {
        return Err(CoreError::EmptyEntry { table: name, index });
    }
    Ok(())
}

/// Data-integrity check over every translation table.
pub fn validate_catalog() -> Result<(), CoreError> {
    check_table("english", &ENGLISH)?;
    check_table("german", &GERMAN)?;
    check_table("french", &FRENCH)?;
    check_table("spanish", &SPANISH)?;
    home_index().ok_or(CoreError::MissingHomeLayer(HOME_LAYER))?;
    Ok(())
}
