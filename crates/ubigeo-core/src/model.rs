// crates/ubigeo-core/src/model.rs
use crate::error::{Result, UbigeoError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The three coding authorities. Each keeps its own code space for the same
/// places and occasionally its own spelling of the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Institution {
    /// Instituto Nacional de Estadística e Informática (statistics).
    #[default]
    Inei,
    /// Registro Nacional de Identificación y Estado Civil (civil registry).
    Reniec,
    /// Superintendencia Nacional de Aduanas y de Administración Tributaria (tax).
    Sunat,
}

impl Institution {
    pub const ALL: [Institution; 3] = [Institution::Inei, Institution::Reniec, Institution::Sunat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Institution::Inei => "inei",
            Institution::Reniec => "reniec",
            Institution::Sunat => "sunat",
        }
    }
}

impl FromStr for Institution {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        Institution::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                UbigeoError::InvalidOption(format!(
                    "institution '{s}': expected \"inei\", \"reniec\" or \"sunat\""
                ))
            })
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative level. Serialized in the plural form used as resource keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Departamentos,
    Provincias,
    Distritos,
}

impl Level {
    /// Coarsest first.
    pub const ALL: [Level; 3] = [Level::Departamentos, Level::Provincias, Level::Distritos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Departamentos => "departamentos",
            Level::Provincias => "provincias",
            Level::Distritos => "distritos",
        }
    }
}

impl FromStr for Level {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        crate::code::validate_level(s)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macroregion grouping schemes. They do not agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroregionScheme {
    #[default]
    Inei,
    /// Ministerio de Salud.
    Minsa,
    /// Centro Nacional de Planeamiento Estratégico.
    Ceplan,
}

impl MacroregionScheme {
    pub const ALL: [MacroregionScheme; 3] = [
        MacroregionScheme::Inei,
        MacroregionScheme::Minsa,
        MacroregionScheme::Ceplan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroregionScheme::Inei => "inei",
            MacroregionScheme::Minsa => "minsa",
            MacroregionScheme::Ceplan => "ceplan",
        }
    }
}

impl FromStr for MacroregionScheme {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        MacroregionScheme::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                UbigeoError::InvalidOption(format!(
                    "macroregion scheme '{s}': expected \"inei\", \"minsa\" or \"ceplan\""
                ))
            })
    }
}

impl fmt::Display for MacroregionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of per-location metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    Capital,
    Superficie,
    Altitud,
    Latitud,
    Longitud,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 5] = [
        MetadataKey::Altitud,
        MetadataKey::Capital,
        MetadataKey::Latitud,
        MetadataKey::Longitud,
        MetadataKey::Superficie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKey::Capital => "capital",
            MetadataKey::Superficie => "superficie",
            MetadataKey::Altitud => "altitud",
            MetadataKey::Latitud => "latitud",
            MetadataKey::Longitud => "longitud",
        }
    }
}

impl FromStr for MetadataKey {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        MetadataKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UbigeoError::InvalidKey(s.to_string()))
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metadata scalar as stored by the construction pipeline.
///
/// JSON carries bare strings or numbers; binary formats (the bincode
/// snapshot) cannot drive an untagged enum, so they get the tagged layout.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
}

#[derive(Serialize, Deserialize)]
enum TaggedValue {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BareValue {
    Number(f64),
    Text(String),
}

impl Serialize for MetadataValue {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match (self, s.is_human_readable()) {
            (MetadataValue::Number(n), true) => s.serialize_f64(*n),
            (MetadataValue::Text(t), true) => s.serialize_str(t),
            (MetadataValue::Number(n), false) => TaggedValue::Number(*n).serialize(s),
            (MetadataValue::Text(t), false) => TaggedValue::Text(t.clone()).serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for MetadataValue {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        if d.is_human_readable() {
            Ok(match BareValue::deserialize(d)? {
                BareValue::Number(n) => MetadataValue::Number(n),
                BareValue::Text(t) => MetadataValue::Text(t),
            })
        } else {
            Ok(match TaggedValue::deserialize(d)? {
                TaggedValue::Number(n) => MetadataValue::Number(n),
                TaggedValue::Text(t) => MetadataValue::Text(t),
            })
        }
    }
}

impl MetadataValue {
    /// Numeric view; text values are parsed when they hold a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            MetadataValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Number(n) => write!(f, "{n}"),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

/// Metadata for one location. Absent fields stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default)]
    pub capital: Option<MetadataValue>,
    #[serde(default)]
    pub superficie: Option<MetadataValue>,
    #[serde(default)]
    pub altitud: Option<MetadataValue>,
    #[serde(default)]
    pub latitud: Option<MetadataValue>,
    #[serde(default)]
    pub longitud: Option<MetadataValue>,
}

impl MetadataRecord {
    pub fn get(&self, key: MetadataKey) -> Option<&MetadataValue> {
        match key {
            MetadataKey::Capital => self.capital.as_ref(),
            MetadataKey::Superficie => self.superficie.as_ref(),
            MetadataKey::Altitud => self.altitud.as_ref(),
            MetadataKey::Latitud => self.latitud.as_ref(),
            MetadataKey::Longitud => self.longitud.as_ref(),
        }
    }
}

/// `code -> canonical name`
pub type NameByCode = HashMap<String, String>;
/// `departamentos.json`, `provincias.json`, `distritos.json`
pub type LocationTable = HashMap<Institution, NameByCode>;
/// `macrorregiones.json`: scheme -> department canonical name -> label
pub type MacroregionTable = HashMap<MacroregionScheme, HashMap<String, String>>;
/// `equivalencias.json`: level -> folded alias -> canonical name
pub type EquivalenceTable = HashMap<Level, HashMap<String, String>>;
/// `inverted.json`: level -> institution -> folded canonical name -> code
pub type InvertedTable = HashMap<Level, HashMap<Institution, HashMap<String, String>>>;
/// `otros.json`: level -> folded canonical name -> metadata
pub type MetadataTable = HashMap<Level, HashMap<String, MetadataRecord>>;

/// Simple aggregate statistics for one institution's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub departamentos: usize,
    pub provincias: usize,
    pub distritos: usize,
}
