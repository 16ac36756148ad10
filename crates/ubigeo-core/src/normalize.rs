// crates/ubigeo-core/src/normalize.rs

//! # Name Normalizer
//!
//! Maps free-text place names (any accents, casing, historical spellings or
//! abbreviations) to the official name through the equivalence table, with
//! an optional fuzzy fallback and a caller-selected error policy.

use crate::error::{Result, UbigeoError};
use crate::fuzzy::FuzzyMatcher;
use crate::model::{EquivalenceTable, Level};
use crate::store::ResourceStore;
use crate::text::{capitalize, fold_key};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Lookup order for [`Normalizer::validate_ubicacion`]: the first level
/// holding the name wins, so a name shared by a department and a district
/// resolves to the department.
pub const LOCATION_SCOPES: [Level; 3] = [Level::Departamentos, Level::Provincias, Level::Distritos];

/// What to do when a name is not in the equivalence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Fail with [`UbigeoError::NotFound`].
    #[default]
    Raise,
    /// Log a warning and keep the input.
    Warn,
    /// Keep the input silently.
    Ignore,
    /// Keep the input with its first letter upper-cased.
    Capitalize,
    /// Log a warning and return the closest known name, even when
    /// `fuzzy_match` is off. Keeps the input if nothing qualifies.
    Coerce,
}

impl OnError {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnError::Raise => "raise",
            OnError::Warn => "warn",
            OnError::Ignore => "ignore",
            OnError::Capitalize => "capitalize",
            OnError::Coerce => "coerce",
        }
    }
}

impl FromStr for OnError {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(OnError::Raise),
            "warn" => Ok(OnError::Warn),
            "ignore" => Ok(OnError::Ignore),
            "capitalize" => Ok(OnError::Capitalize),
            "coerce" => Ok(OnError::Coerce),
            other => Err(UbigeoError::InvalidOption(format!(
                "on_error '{other}': expected \"raise\", \"warn\", \"ignore\", \"capitalize\" or \"coerce\""
            ))),
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Options for name validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOptions {
    /// Return the folded form (`JUNIN`) instead of the official one (`Junín`).
    pub normalize: bool,
    /// Fall back to the fuzzy matcher when the exact lookup misses.
    pub fuzzy_match: bool,
    pub on_error: OnError,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            normalize: false,
            fuzzy_match: true,
            on_error: OnError::Raise,
        }
    }
}

impl NameOptions {
    /// Exact lookups only, failing on a miss.
    pub fn strict() -> Self {
        Self {
            normalize: false,
            fuzzy_match: false,
            on_error: OnError::Raise,
        }
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = fuzzy_match;
        self
    }

    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }
}

/// Validates place names against the equivalence table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    store: Arc<ResourceStore>,
    matcher: FuzzyMatcher,
}

impl Normalizer {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self {
            store,
            matcher: FuzzyMatcher::default(),
        }
    }

    pub fn with_matcher(store: Arc<ResourceStore>, matcher: FuzzyMatcher) -> Self {
        Self { store, matcher }
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Official name of a department.
    ///
    /// ```no_run
    /// use ubigeo_core::normalize::{NameOptions, Normalizer};
    /// use ubigeo_core::store::ResourceStore;
    ///
    /// let n = Normalizer::new(ResourceStore::shared());
    /// assert_eq!(n.validate_departamento("HUANUCO", &NameOptions::default()).unwrap(), "Huánuco");
    /// assert_eq!(
    ///     n.validate_departamento("HUÁNUCO", &NameOptions::default().normalize(true)).unwrap(),
    ///     "HUANUCO"
    /// );
    /// ```
    pub fn validate_departamento(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.validate_in(name, &[Level::Departamentos], opts)
    }

    pub fn validate_provincia(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.validate_in(name, &[Level::Provincias], opts)
    }

    pub fn validate_distrito(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.validate_in(name, &[Level::Distritos], opts)
    }

    /// Official name of a department, province or district, probing the
    /// levels in [`LOCATION_SCOPES`] order.
    pub fn validate_ubicacion(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.validate_in(name, &LOCATION_SCOPES, opts)
    }

    /// Official name for `level` only.
    pub fn validate_level(&self, name: &str, level: Level, opts: &NameOptions) -> Result<String> {
        self.validate_in(name, &[level], opts)
    }

    pub fn validate_departamento_many<I, C>(&self, names: I, opts: &NameOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        self.validate_many(names, &[Level::Departamentos], opts)
    }

    pub fn validate_provincia_many<I, C>(&self, names: I, opts: &NameOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        self.validate_many(names, &[Level::Provincias], opts)
    }

    pub fn validate_distrito_many<I, C>(&self, names: I, opts: &NameOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        self.validate_many(names, &[Level::Distritos], opts)
    }

    pub fn validate_ubicacion_many<I, C>(&self, names: I, opts: &NameOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        self.validate_many(names, &LOCATION_SCOPES, opts)
    }

    /// Element-wise validation in input order; the first hard failure
    /// aborts the whole batch.
    pub fn validate_many<I, C>(&self, names: I, scopes: &[Level], opts: &NameOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        names
            .into_iter()
            .map(|name| self.validate_in(name.as_ref(), scopes, opts))
            .collect()
    }

    /// Validates `name` against the given levels, in order.
    pub fn validate_in(&self, name: &str, scopes: &[Level], opts: &NameOptions) -> Result<String> {
        let table = self.store.equivalencias()?;
        let key = fold_key(name);

        let resolved = match exact_lookup(table, &key, scopes) {
            Some(official) => official.to_string(),
            None => self.resolve_miss(table, name, &key, scopes, opts)?,
        };

        Ok(if opts.normalize {
            fold_key(&resolved)
        } else {
            resolved
        })
    }

    fn resolve_miss(
        &self,
        table: &EquivalenceTable,
        name: &str,
        key: &str,
        scopes: &[Level],
        opts: &NameOptions,
    ) -> Result<String> {
        let wants_candidate = opts.fuzzy_match || opts.on_error == OnError::Coerce;
        let candidate = if wants_candidate {
            self.closest(table, key, scopes)
        } else {
            None
        };

        if opts.fuzzy_match {
            if let Some(official) = candidate {
                tracing::debug!(input = name, matched = %official, "fuzzy match");
                return Ok(official);
            }
        }

        match opts.on_error {
            OnError::Raise => Err(UbigeoError::NotFound(format!(
                "'{name}' is not a known {}",
                describe(scopes)
            ))),
            OnError::Ignore => Ok(name.to_string()),
            OnError::Capitalize => Ok(capitalize(name)),
            OnError::Warn => {
                tracing::warn!(input = name, levels = describe(scopes), "location not found, keeping input");
                Ok(name.to_string())
            }
            OnError::Coerce => match candidate {
                Some(official) => {
                    tracing::warn!(input = name, coerced = %official, "location not found, coerced to closest name");
                    Ok(official)
                }
                None => {
                    tracing::warn!(input = name, levels = describe(scopes), "location not found and nothing to coerce to, keeping input");
                    Ok(name.to_string())
                }
            },
        }
    }

    /// Closest alias across `scopes` (earlier scopes win ties), mapped to its
    /// official name. Blank keys never match.
    fn closest(&self, table: &EquivalenceTable, key: &str, scopes: &[Level]) -> Option<String> {
        if key.is_empty() {
            return None;
        }

        let mut candidates: Vec<&str> = Vec::new();
        for level in scopes {
            if let Some(aliases) = table.get(level) {
                let mut keys: Vec<&str> = aliases.keys().map(String::as_str).collect();
                keys.sort_unstable();
                candidates.extend(keys);
            }
        }

        let hit = self.matcher.best_match(key, candidates)?;
        exact_lookup(table, hit.candidate, scopes).map(str::to_string)
    }
}

fn exact_lookup<'t>(table: &'t EquivalenceTable, key: &str, scopes: &[Level]) -> Option<&'t str> {
    scopes
        .iter()
        .filter_map(|level| table.get(level))
        .find_map(|aliases| aliases.get(key))
        .map(String::as_str)
}

fn describe(scopes: &[Level]) -> &'static str {
    match scopes {
        [Level::Departamentos] => "departamento",
        [Level::Provincias] => "provincia",
        [Level::Distritos] => "distrito",
        _ => "departamento, provincia or distrito",
    }
}
