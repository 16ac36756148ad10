// crates/ubigeo-core/src/resolver.rs

//! # Geocode Resolver
//!
//! The public query surface: code → name at each level, macroregion lookup,
//! name → code and per-location metadata. Every operation has a scalar
//! entry point and a `*_many` batch form that keeps input order and length
//! and stops at the first failure.

use crate::code::{validate_code, GeoCode, Query};
use crate::error::{Result, UbigeoError};
use crate::fuzzy::FuzzyMatcher;
use crate::model::{DbStats, Institution, Level, MacroregionScheme, MetadataKey, MetadataValue};
use crate::normalize::{NameOptions, Normalizer};
use crate::store::ResourceStore;
use crate::text::{equals_folded, fold_key};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Department name shared by the capital province and the rest of the region.
pub const LIMA: &str = "Lima";
pub const LIMA_METROPOLITANA: &str = "Lima Metropolitana";
pub const LIMA_REGION: &str = "Lima Región";

/// Options for [`Ubigeo::get_departamento`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentOptions {
    pub institucion: Institution,
    /// Report the Lima province as `Lima Metropolitana`.
    pub with_lima_metro: bool,
    /// Report the other Lima provinces as `Lima Región`.
    pub with_lima_region: bool,
    /// Return the folded form of the name.
    pub normalize: bool,
}

impl DepartmentOptions {
    pub fn institucion(mut self, institucion: Institution) -> Self {
        self.institucion = institucion;
        self
    }

    pub fn with_lima_metro(mut self, on: bool) -> Self {
        self.with_lima_metro = on;
        self
    }

    pub fn with_lima_region(mut self, on: bool) -> Self {
        self.with_lima_region = on;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// Options for province and district lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub institucion: Institution,
    pub normalize: bool,
}

impl LookupOptions {
    pub fn institucion(mut self, institucion: Institution) -> Self {
        self.institucion = institucion;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// Resolves ubigeo codes, names, macroregions and metadata.
///
/// `Ubigeo` is a thin handle over a shared [`ResourceStore`]; cloning it is
/// cheap and every clone sees the same loaded tables.
///
/// # Example
///
/// ```no_run
/// use ubigeo_core::{DepartmentOptions, LookupOptions, Ubigeo};
///
/// let ubigeo = Ubigeo::new();
/// assert_eq!(ubigeo.get_departamento("1", &DepartmentOptions::default()).unwrap(), "Amazonas");
/// assert_eq!(ubigeo.get_provincia(1506, &LookupOptions::default()).unwrap(), "Huaral");
///
/// let names: Vec<String> = ubigeo
///     .get_departamento_many(["010101", "150101"], &DepartmentOptions::default())
///     .unwrap();
/// assert_eq!(names, ["Amazonas", "Lima"]);
/// ```
#[derive(Debug, Clone)]
pub struct Ubigeo {
    store: Arc<ResourceStore>,
    normalizer: Normalizer,
}

impl Default for Ubigeo {
    fn default() -> Self {
        Self::new()
    }
}

impl Ubigeo {
    /// A resolver over the process-wide [`ResourceStore::shared`] store.
    pub fn new() -> Self {
        Self::with_store(ResourceStore::shared())
    }

    pub fn with_store(store: Arc<ResourceStore>) -> Self {
        Self::with_matcher(store, FuzzyMatcher::default())
    }

    /// Uses `matcher` for the fuzzy fallback of the name validators.
    pub fn with_matcher(store: Arc<ResourceStore>, matcher: FuzzyMatcher) -> Self {
        let normalizer = Normalizer::with_matcher(Arc::clone(&store), matcher);
        Self { store, normalizer }
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn validate_departamento(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.normalizer.validate_departamento(name, opts)
    }

    pub fn validate_provincia(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.normalizer.validate_provincia(name, opts)
    }

    pub fn validate_distrito(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.normalizer.validate_distrito(name, opts)
    }

    pub fn validate_ubicacion(&self, name: &str, opts: &NameOptions) -> Result<String> {
        self.normalizer.validate_ubicacion(name, opts)
    }

    // ------------------------------------------------------------------
    // code -> name
    // ------------------------------------------------------------------

    /// Department name for any code (only the first two digits are read).
    ///
    /// With either Lima flag set the code must carry province digits:
    /// `150101` under `with_lima_metro` is `Lima Metropolitana`, `150601`
    /// under `with_lima_region` is `Lima Región`. Codes outside Lima are
    /// unaffected.
    pub fn get_departamento<'a>(
        &self,
        code: impl Into<Query<'a>>,
        opts: &DepartmentOptions,
    ) -> Result<String> {
        let code = validate_code(code)?;
        let lima_rules = opts.with_lima_metro || opts.with_lima_region;
        if lima_rules && code.province().is_none() {
            return Err(UbigeoError::Value(format!(
                "code '{code}' has no province digits; they are needed to tell Lima \
                 Metropolitana from Lima Región"
            )));
        }

        let mut name = self.lookup(Level::Departamentos, opts.institucion, code.department())?;

        if let (true, Some(province_code)) = (lima_rules, code.province()) {
            let province = self.lookup(Level::Provincias, opts.institucion, province_code)?;
            if equals_folded(name, LIMA) {
                let capital = equals_folded(province, LIMA);
                if opts.with_lima_metro && capital {
                    name = LIMA_METROPOLITANA;
                } else if opts.with_lima_region && !capital {
                    name = LIMA_REGION;
                }
            }
        }

        Ok(output(name, opts.normalize))
    }

    /// Province name; the code needs at least four digits (three are padded).
    pub fn get_provincia<'a>(
        &self,
        code: impl Into<Query<'a>>,
        opts: &LookupOptions,
    ) -> Result<String> {
        let code = validate_code(code)?;
        let province = code.province().ok_or_else(|| {
            UbigeoError::Range(format!(
                "code '{code}' is a department code; provinces need 3 or 4 digits or more"
            ))
        })?;
        let name = self.lookup(Level::Provincias, opts.institucion, province)?;
        Ok(output(name, opts.normalize))
    }

    /// District name; only 5- or 6-digit codes are accepted.
    pub fn get_distrito<'a>(
        &self,
        code: impl Into<Query<'a>>,
        opts: &LookupOptions,
    ) -> Result<String> {
        let code = validate_code(code)?;
        let district = code.district().ok_or_else(|| {
            UbigeoError::Range(format!("district codes need 5 or 6 digits, got '{code}'"))
        })?;
        let name = self.lookup(Level::Distritos, opts.institucion, district)?;
        Ok(output(name, opts.normalize))
    }

    pub fn get_departamento_many<'a, I, C>(&self, codes: I, opts: &DepartmentOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: Into<Query<'a>>,
        C: FromIterator<String>,
    {
        codes
            .into_iter()
            .map(|code| self.get_departamento(code, opts))
            .collect()
    }

    pub fn get_provincia_many<'a, I, C>(&self, codes: I, opts: &LookupOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: Into<Query<'a>>,
        C: FromIterator<String>,
    {
        codes
            .into_iter()
            .map(|code| self.get_provincia(code, opts))
            .collect()
    }

    pub fn get_distrito_many<'a, I, C>(&self, codes: I, opts: &LookupOptions) -> Result<C>
    where
        I: IntoIterator,
        I::Item: Into<Query<'a>>,
        C: FromIterator<String>,
    {
        codes
            .into_iter()
            .map(|code| self.get_distrito(code, opts))
            .collect()
    }

    // ------------------------------------------------------------------
    // macroregions
    // ------------------------------------------------------------------

    /// Macroregion of a department, given by name or by any code inside it.
    ///
    /// Text starting with a digit and integers are read as codes (INEI code
    /// space); other text is validated strictly as a department name.
    pub fn get_macrorregion<'a>(
        &self,
        name_or_code: impl Into<Query<'a>>,
        scheme: MacroregionScheme,
        normalize: bool,
    ) -> Result<String> {
        let department = self.department_of(name_or_code.into())?;
        let label = self
            .store
            .macrorregiones()?
            .get(&scheme)
            .and_then(|by_dept| by_dept.get(&department))
            .ok_or_else(|| {
                UbigeoError::NotFound(format!(
                    "department '{department}' has no {scheme} macroregion"
                ))
            })?;
        Ok(output(label, normalize))
    }

    pub fn get_macrorregion_many<'a, I, C>(
        &self,
        inputs: I,
        scheme: MacroregionScheme,
        normalize: bool,
    ) -> Result<C>
    where
        I: IntoIterator,
        I::Item: Into<Query<'a>>,
        C: FromIterator<String>,
    {
        inputs
            .into_iter()
            .map(|input| self.get_macrorregion(input, scheme, normalize))
            .collect()
    }

    /// Macroregion label → department names (sorted) for one scheme.
    pub fn macrorregion_map(&self, scheme: MacroregionScheme) -> Result<BTreeMap<String, Vec<String>>> {
        let by_dept = self.store.macrorregiones()?.get(&scheme).ok_or_else(|| {
            UbigeoError::NotFound(format!("no macroregions for scheme {scheme}"))
        })?;

        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (department, label) in by_dept {
            map.entry(label.clone()).or_default().push(department.clone());
        }
        for departments in map.values_mut() {
            departments.sort();
        }
        Ok(map)
    }

    fn department_of(&self, input: Query<'_>) -> Result<String> {
        if let Query::Float(_) = input {
            return Err(UbigeoError::Type(format!(
                "expected a department name or code, got {} '{input}'",
                input.kind()
            )));
        }

        if input.looks_like_code() {
            self.get_departamento(input, &DepartmentOptions::default())
        } else {
            self.normalizer
                .validate_departamento(&input.to_string(), &NameOptions::strict())
        }
    }

    // ------------------------------------------------------------------
    // name -> code
    // ------------------------------------------------------------------

    /// Code of a named place at `level` in the institution's code space.
    ///
    /// The name is validated strictly against `level` first; names only one
    /// institution spells a given way are then tried as typed.
    ///
    /// ```no_run
    /// use ubigeo_core::{Institution, Level, Ubigeo};
    ///
    /// let ubigeo = Ubigeo::new();
    /// assert_eq!(ubigeo.get_ubigeo("Lince", Level::Distritos, Institution::Inei).unwrap(), "150116");
    /// ```
    pub fn get_ubigeo(&self, name: &str, level: Level, institution: Institution) -> Result<String> {
        let index = self
            .store
            .inverted()?
            .get(&level)
            .and_then(|by_inst| by_inst.get(&institution));

        let official = self
            .normalizer
            .validate_level(name, level, &NameOptions::strict())
            .ok();

        let code = index.and_then(|codes| {
            official
                .iter()
                .map(|n| fold_key(n))
                .chain(std::iter::once(fold_key(name)))
                .find_map(|key| codes.get(&key))
        });

        code.cloned().ok_or_else(|| {
            UbigeoError::NotFound(format!(
                "'{name}' not found among {institution} {level}"
            ))
        })
    }

    pub fn get_ubigeo_many<I, C>(&self, names: I, level: Level, institution: Institution) -> Result<C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: FromIterator<String>,
    {
        names
            .into_iter()
            .map(|name| self.get_ubigeo(name.as_ref(), level, institution))
            .collect()
    }

    // ------------------------------------------------------------------
    // metadata
    // ------------------------------------------------------------------

    /// One metadata field of a place at `level`, given by name or INEI code.
    ///
    /// ```no_run
    /// use ubigeo_core::{Level, MetadataKey, Ubigeo};
    ///
    /// let ubigeo = Ubigeo::new();
    /// let capital = ubigeo.get_metadato("La Libertad", Level::Departamentos, MetadataKey::Capital).unwrap();
    /// assert_eq!(capital.to_string(), "Trujillo");
    /// ```
    pub fn get_metadato<'a>(
        &self,
        code_or_name: impl Into<Query<'a>>,
        level: Level,
        key: MetadataKey,
    ) -> Result<MetadataValue> {
        let input = code_or_name.into();
        let name = match &input {
            Query::Float(_) => {
                return Err(UbigeoError::Type(format!(
                    "expected a place name or code, got {} '{input}'",
                    input.kind()
                )))
            }
            q if q.looks_like_code() => self.name_at(validate_code(input.clone())?, level)?,
            _ => self
                .normalizer
                .validate_level(&input.to_string(), level, &NameOptions::strict())?,
        };

        let folded = fold_key(&name);
        let record = self
            .store
            .otros()?
            .get(&level)
            .and_then(|records| records.get(&folded))
            .ok_or_else(|| UbigeoError::NotFound(format!("no metadata for {level} '{name}'")))?;

        record.get(key).cloned().ok_or_else(|| {
            UbigeoError::NotFound(format!("{level} '{name}' has no '{key}' value"))
        })
    }

    pub fn get_metadato_many<'a, I, C>(&self, inputs: I, level: Level, key: MetadataKey) -> Result<C>
    where
        I: IntoIterator,
        I::Item: Into<Query<'a>>,
        C: FromIterator<MetadataValue>,
    {
        inputs
            .into_iter()
            .map(|input| self.get_metadato(input, level, key))
            .collect()
    }

    fn name_at(&self, code: GeoCode, level: Level) -> Result<String> {
        match level {
            Level::Departamentos => self.get_departamento(&code, &DepartmentOptions::default()),
            Level::Provincias => self.get_provincia(&code, &LookupOptions::default()),
            Level::Distritos => self.get_distrito(&code, &LookupOptions::default()),
        }
    }

    // ------------------------------------------------------------------
    // stats
    // ------------------------------------------------------------------

    /// Number of places each level holds in `institution`'s code space.
    pub fn stats(&self, institution: Institution) -> Result<DbStats> {
        let count = |level: Level| -> Result<usize> {
            Ok(self
                .store
                .level(level)?
                .get(&institution)
                .map_or(0, |codes| codes.len()))
        };
        Ok(DbStats {
            departamentos: count(Level::Departamentos)?,
            provincias: count(Level::Provincias)?,
            distritos: count(Level::Distritos)?,
        })
    }

    fn lookup(&self, level: Level, institution: Institution, code: &str) -> Result<&str> {
        self.store
            .level(level)?
            .get(&institution)
            .and_then(|codes| codes.get(code))
            .map(String::as_str)
            .ok_or_else(|| {
                UbigeoError::NotFound(format!(
                    "code '{code}' not found among {institution} {level}"
                ))
            })
    }
}

fn output(name: &str, normalize: bool) -> String {
    if normalize {
        fold_key(name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::path::Path;

    fn write(dir: &Path, file: &str, body: &str) {
        std::fs::write(dir.join(file), body).unwrap();
    }

    fn fixture() -> (tempfile::TempDir, Ubigeo) {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path();
        write(p, "departamentos.json", r#"{
            "inei": {"01": "Amazonas", "08": "Cusco", "15": "Lima"},
            "reniec": {"01": "Amazonas", "07": "Cusco", "14": "Lima"},
            "sunat": {"01": "Amazonas", "08": "Cusco", "15": "Lima"}
        }"#);
        write(p, "provincias.json", r#"{
            "inei": {"0101": "Chachapoyas", "1501": "Lima", "1506": "Huaral"},
            "reniec": {"0101": "Chachapoyas", "1401": "Lima", "1406": "Huaral"},
            "sunat": {}
        }"#);
        write(p, "distritos.json", r#"{
            "inei": {"010101": "Chachapoyas", "150101": "Lima", "150116": "Lince"},
            "reniec": {"140101": "Lima"},
            "sunat": {}
        }"#);
        write(p, "macrorregiones.json", r#"{
            "inei": {"Amazonas": "Oriente", "Cusco": "Sur", "Lima": "Lima Metropolitana"},
            "minsa": {"Amazonas": "Norte"},
            "ceplan": {"Amazonas": "Norte", "Cusco": "Sur"}
        }"#);
        write(p, "equivalencias.json", r#"{
            "departamentos": {"AMAZONAS": "Amazonas", "CUSCO": "Cusco", "CUZCO": "Cusco", "LIMA": "Lima"},
            "provincias": {"CHACHAPOYAS": "Chachapoyas", "HUARAL": "Huaral", "LIMA": "Lima"},
            "distritos": {"CHACHAPOYAS": "Chachapoyas", "LIMA": "Lima", "LINCE": "Lince"}
        }"#);
        write(p, "inverted.json", r#"{
            "departamentos": {"inei": {"AMAZONAS": "01", "CUSCO": "08"}, "reniec": {"CUSCO": "07"}},
            "provincias": {"inei": {"HUARAL": "1506"}},
            "distritos": {"inei": {"LINCE": "150116", "SANTA MARIA DEL VALLE": "100106"}}
        }"#);
        write(p, "otros.json", r#"{
            "departamentos": {"CUSCO": {"capital": "Cusco", "altitud": "3439"}},
            "distritos": {"LINCE": {"capital": "Lince", "superficie": "3.03"}}
        }"#);
        let ubigeo = Ubigeo::with_store(Arc::new(ResourceStore::new(p)));
        (dir, ubigeo)
    }

    #[test]
    fn codes_resolve_at_every_level() {
        let (_dir, u) = fixture();
        let dep = DepartmentOptions::default();
        let look = LookupOptions::default();
        assert_eq!(u.get_departamento("1", &dep).unwrap(), "Amazonas");
        assert_eq!(u.get_departamento(10101, &dep).unwrap(), "Amazonas");
        assert_eq!(u.get_provincia("101", &look).unwrap(), "Chachapoyas");
        assert_eq!(u.get_distrito("10101", &look).unwrap(), "Chachapoyas");
    }

    #[test]
    fn institutions_have_their_own_code_space() {
        let (_dir, u) = fixture();
        let reniec = DepartmentOptions::default().institucion(Institution::Reniec);
        assert_eq!(u.get_departamento("07", &reniec).unwrap(), "Cusco");
        assert_eq!(u.get_departamento("08", &DepartmentOptions::default()).unwrap(), "Cusco");
        assert!(u.get_departamento("08", &reniec).unwrap_err().is_not_found());
    }

    #[test]
    fn short_codes_are_rejected_for_finer_levels() {
        let (_dir, u) = fixture();
        let look = LookupOptions::default();
        assert!(matches!(u.get_provincia("15", &look), Err(UbigeoError::Range(_))));
        assert!(matches!(u.get_distrito("1501", &look), Err(UbigeoError::Range(_))));
        assert!(matches!(u.get_distrito(2.5, &look), Err(UbigeoError::Type(_))));
    }

    #[test]
    fn lima_flags() {
        let (_dir, u) = fixture();
        let metro = DepartmentOptions::default().with_lima_metro(true);
        let region = DepartmentOptions::default().with_lima_region(true);
        let both = metro.with_lima_region(true);

        assert_eq!(u.get_departamento("150101", &metro).unwrap(), "Lima Metropolitana");
        assert_eq!(u.get_departamento("1506", &metro).unwrap(), "Lima");
        assert_eq!(u.get_departamento("150601", &region).unwrap(), "Lima Región");
        assert_eq!(u.get_departamento("150101", &region).unwrap(), "Lima");
        assert_eq!(u.get_departamento("1501", &both).unwrap(), "Lima Metropolitana");
        assert_eq!(u.get_departamento("0101", &both).unwrap(), "Amazonas");
        assert_eq!(
            u.get_departamento("150101", &metro.normalize(true)).unwrap(),
            "LIMA METROPOLITANA"
        );
        assert!(matches!(u.get_departamento("15", &metro), Err(UbigeoError::Value(_))));
    }

    #[test]
    fn lima_flags_follow_the_institution() {
        let (_dir, u) = fixture();
        let opts = DepartmentOptions::default()
            .institucion(Institution::Reniec)
            .with_lima_metro(true);
        assert_eq!(u.get_departamento("140101", &opts).unwrap(), "Lima Metropolitana");
    }

    #[test]
    fn lima_flags_check_the_province_everywhere() {
        let (_dir, u) = fixture();
        let metro = DepartmentOptions::default().with_lima_metro(true);
        // 0801 is not among the fixture's provinces
        assert!(u.get_departamento("0801", &metro).unwrap_err().is_not_found());
        assert!(u.get_departamento("1599", &metro).unwrap_err().is_not_found());
        assert_eq!(u.get_departamento("0801", &DepartmentOptions::default()).unwrap(), "Cusco");
    }

    #[test]
    fn macroregions_by_name_or_code() {
        let (_dir, u) = fixture();
        assert_eq!(u.get_macrorregion("Amazonas", MacroregionScheme::Inei, false).unwrap(), "Oriente");
        assert_eq!(u.get_macrorregion("cuzco", MacroregionScheme::Ceplan, false).unwrap(), "Sur");
        assert_eq!(u.get_macrorregion("010101", MacroregionScheme::Minsa, false).unwrap(), "Norte");
        assert_eq!(u.get_macrorregion(8, MacroregionScheme::Inei, true).unwrap(), "SUR");
        assert!(matches!(
            u.get_macrorregion(1.0, MacroregionScheme::Inei, false),
            Err(UbigeoError::Type(_))
        ));
        assert!(u
            .get_macrorregion("Cusco", MacroregionScheme::Minsa, false)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn macroregion_map_groups_departments() {
        let (_dir, u) = fixture();
        let map = u.macrorregion_map(MacroregionScheme::Ceplan).unwrap();
        assert_eq!(map["Norte"], ["Amazonas"]);
        assert_eq!(map["Sur"], ["Cusco"]);
    }

    #[test]
    fn names_resolve_to_codes() {
        let (_dir, u) = fixture();
        assert_eq!(u.get_ubigeo("Cuzco", Level::Departamentos, Institution::Inei).unwrap(), "08");
        assert_eq!(u.get_ubigeo("Cuzco", Level::Departamentos, Institution::Reniec).unwrap(), "07");
        assert_eq!(u.get_ubigeo("huaral", Level::Provincias, Institution::Inei).unwrap(), "1506");
        // not in the equivalence table, found as typed
        assert_eq!(
            u.get_ubigeo("Santa María del Valle", Level::Distritos, Institution::Inei).unwrap(),
            "100106"
        );
        assert!(u
            .get_ubigeo("Lince", Level::Provincias, Institution::Inei)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn metadata_by_name_or_code() {
        let (_dir, u) = fixture();
        let v = u.get_metadato("cuzco", Level::Departamentos, MetadataKey::Altitud).unwrap();
        assert_eq!(v, MetadataValue::Text("3439".into()));
        let v = u.get_metadato("08", Level::Departamentos, MetadataKey::Capital).unwrap();
        assert_eq!(v.to_string(), "Cusco");
        let v = u.get_metadato(150116, Level::Distritos, MetadataKey::Superficie).unwrap();
        assert_eq!(v.as_f64(), Some(3.03));

        assert!(u
            .get_metadato("Lince", Level::Distritos, MetadataKey::Latitud)
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            u.get_metadato(0.5, Level::Distritos, MetadataKey::Capital),
            Err(UbigeoError::Type(_))
        ));
    }

    #[test]
    fn batches_keep_order_and_container() {
        let (_dir, u) = fixture();
        let names: VecDeque<String> = u
            .get_departamento_many(["010101", "150101"], &DepartmentOptions::default())
            .unwrap();
        assert_eq!(names, VecDeque::from(vec!["Amazonas".to_string(), "Lima".to_string()]));

        let codes: Vec<String> = u
            .get_ubigeo_many(["Amazonas", "Cusco"], Level::Departamentos, Institution::Inei)
            .unwrap();
        assert_eq!(codes, ["01", "08"]);

        let err = u
            .get_provincia_many::<_, Vec<String>>(["0101", "9999"], &LookupOptions::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn stats_count_each_level() {
        let (_dir, u) = fixture();
        let stats = u.stats(Institution::Inei).unwrap();
        assert_eq!(
            stats,
            DbStats { departamentos: 3, provincias: 3, distritos: 3 }
        );
        assert_eq!(u.stats(Institution::Sunat).unwrap().provincias, 0);
    }
}
