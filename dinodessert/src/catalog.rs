//! Letter-keyed name tables
//!
//! The catalog is loaded once and never mutated. Every letter of its
//! alphabet maps to a non-empty ordered list of dinosaur names and a
//! non-empty ordered list of dessert names; construction refuses anything
//! else, so index lookups on a built catalog never go out of range.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Deserialize;

/// Name tables shipped with the binary.
const BUILTIN_NAMES: &str = include_str!("../data/names.json");

/// One uppercase ASCII letter from a catalog alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Create a letter, normalizing to uppercase.
    pub fn new(c: char) -> Result<Self, CatalogError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            Err(CatalogError::InvalidLetter(c.to_string()))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self('A')
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = CatalogError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl TryFrom<&str> for Letter {
    type Error = CatalogError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(CatalogError::InvalidLetter(s.to_string())),
        }
    }
}

/// Which of the two name tables to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    Dinosaur,
    Dessert,
}

impl NameKind {
    pub fn label(self) -> &'static str {
        match self {
            NameKind::Dinosaur => "Dinosaur",
            NameKind::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog construction failures
#[derive(Debug)]
pub enum CatalogError {
    /// The embedded or supplied JSON could not be parsed
    Parse(serde_json::Error),
    /// The alphabet has no letters
    EmptyAlphabet,
    /// A key is not a single ASCII letter
    InvalidLetter(String),
    /// The alphabet lists a letter twice
    DuplicateLetter(Letter),
    /// A letter of the alphabet has no list in one of the tables
    MissingLetter { letter: Letter, kind: NameKind },
    /// A table has a list for a letter the alphabet does not contain
    UnlistedLetter { letter: Letter, kind: NameKind },
    /// A letter's list is empty
    EmptyList { letter: Letter, kind: NameKind },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "Name tables could not be parsed: {}", e),
            CatalogError::EmptyAlphabet => write!(f, "Name catalog has no letters"),
            CatalogError::InvalidLetter(s) => write!(f, "Not a single letter: {:?}", s),
            CatalogError::DuplicateLetter(l) => write!(f, "Letter {} is listed twice", l),
            CatalogError::MissingLetter { letter, kind } => {
                write!(f, "No {} names for letter {}", kind, letter)
            }
            CatalogError::UnlistedLetter { letter, kind } => {
                write!(f, "{} names given for letter {} outside the alphabet", kind, letter)
            }
            CatalogError::EmptyList { letter, kind } => {
                write!(f, "{} list for letter {} is empty", kind, letter)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Serialized shape of the name tables
#[derive(Debug, Deserialize)]
struct RawCatalog {
    letters: Vec<String>,
    dinosaurs: BTreeMap<String, Vec<String>>,
    desserts: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
struct LetterEntry {
    letter: Letter,
    dinosaurs: Vec<String>,
    desserts: Vec<String>,
}

/// Read-only mapping from letter to dinosaur and dessert names.
///
/// Letters keep the order they were declared in; that order is the one the
/// letter wheel cycles through.
#[derive(Clone, Debug, PartialEq)]
pub struct NameCatalog {
    entries: Vec<LetterEntry>,
}

impl NameCatalog {
    /// The tables compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_NAMES)
    }

    /// Parse and validate tables in the `names.json` layout.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::from_raw(raw)
    }

    /// One letter, one dinosaur, one dessert.
    pub fn minimal() -> Self {
        Self {
            entries: vec![LetterEntry {
                letter: Letter::default(),
                dinosaurs: vec!["Allosaurus".to_string()],
                desserts: vec!["Apple Pie".to_string()],
            }],
        }
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let mut dinosaurs = parse_table(raw.dinosaurs)?;
        let mut desserts = parse_table(raw.desserts)?;

        let mut builder = Self::builder();
        let mut seen = HashSet::new();
        for key in &raw.letters {
            let letter = Letter::try_from(key.as_str())?;
            if !seen.insert(letter) {
                return Err(CatalogError::DuplicateLetter(letter));
            }
            let dinos = dinosaurs.remove(&letter).ok_or(CatalogError::MissingLetter {
                letter,
                kind: NameKind::Dinosaur,
            })?;
            let treats = desserts.remove(&letter).ok_or(CatalogError::MissingLetter {
                letter,
                kind: NameKind::Dessert,
            })?;
            builder = builder.letter(letter.as_char(), dinos, treats);
        }

        if let Some(&letter) = dinosaurs.keys().next() {
            return Err(CatalogError::UnlistedLetter {
                letter,
                kind: NameKind::Dinosaur,
            });
        }
        if let Some(&letter) = desserts.keys().next() {
            return Err(CatalogError::UnlistedLetter {
                letter,
                kind: NameKind::Dessert,
            });
        }

        builder.build()
    }

    /// Number of letters in the alphabet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letters in wheel order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.entries.iter().map(|entry| entry.letter)
    }

    pub fn letter_at(&self, index: usize) -> Option<Letter> {
        self.entries.get(index).map(|entry| entry.letter)
    }

    pub fn index_of(&self, letter: Letter) -> Option<usize> {
        self.entries.iter().position(|entry| entry.letter == letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.index_of(letter).is_some()
    }

    /// Names of one kind for a letter.
    ///
    /// Letters outside the alphabet yield an empty slice.
    pub fn names_for(&self, letter: Letter, kind: NameKind) -> &[String] {
        self.index_of(letter)
            .map(|index| self.names_at(index, kind))
            .unwrap_or(&[])
    }

    /// Names of one kind for the letter at `index` in wheel order.
    pub fn names_at(&self, index: usize, kind: NameKind) -> &[String] {
        match self.entries.get(index) {
            Some(entry) => match kind {
                NameKind::Dinosaur => &entry.dinosaurs,
                NameKind::Dessert => &entry.desserts,
            },
            None => &[],
        }
    }

    /// First dinosaur and first dessert for a letter.
    pub fn first_pair(&self, letter: Letter) -> Option<(&str, &str)> {
        let dinosaur = self.names_for(letter, NameKind::Dinosaur).first()?;
        let dessert = self.names_for(letter, NameKind::Dessert).first()?;
        Some((dinosaur, dessert))
    }
}

fn parse_table(
    table: BTreeMap<String, Vec<String>>,
) -> Result<BTreeMap<Letter, Vec<String>>, CatalogError> {
    table
        .into_iter()
        .map(|(key, names)| Ok((Letter::try_from(key.as_str())?, names)))
        .collect()
}

/// Incremental catalog construction; `build` enforces the invariants.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<(char, Vec<String>, Vec<String>)>,
}

impl CatalogBuilder {
    /// Append a letter with its dinosaur and dessert lists.
    pub fn letter<D, T>(mut self, letter: char, dinosaurs: D, desserts: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        self.entries.push((
            letter,
            dinosaurs.into_iter().map(Into::into).collect(),
            desserts.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn build(self) -> Result<NameCatalog, CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len());
        for (c, dinosaurs, desserts) in self.entries {
            let letter = Letter::new(c)?;
            if !seen.insert(letter) {
                return Err(CatalogError::DuplicateLetter(letter));
            }
            if dinosaurs.is_empty() {
                return Err(CatalogError::EmptyList {
                    letter,
                    kind: NameKind::Dinosaur,
                });
            }
            if desserts.is_empty() {
                return Err(CatalogError::EmptyList {
                    letter,
                    kind: NameKind::Dessert,
                });
            }
            entries.push(LetterEntry {
                letter,
                dinosaurs,
                desserts,
            });
        }

        Ok(NameCatalog { entries })
    }
}
