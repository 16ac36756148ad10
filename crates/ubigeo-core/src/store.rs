// crates/ubigeo-core/src/store.rs

//! # Resource Store
//!
//! Owns every reference table. Each table is parsed on first use and kept
//! for the lifetime of the store; afterwards all reads are plain shared
//! references.

use crate::error::Result;
use crate::loader;
use crate::model::{
    EquivalenceTable, InvertedTable, Level, LocationTable, MacroregionTable, MetadataTable,
};
use once_cell::sync::{Lazy, OnceCell};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The logical resources, one JSON document each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Departamentos,
    Provincias,
    Distritos,
    Macrorregiones,
    Equivalencias,
    Inverted,
    Otros,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Departamentos,
        Resource::Provincias,
        Resource::Distritos,
        Resource::Macrorregiones,
        Resource::Equivalencias,
        Resource::Inverted,
        Resource::Otros,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Departamentos => "departamentos",
            Resource::Provincias => "provincias",
            Resource::Distritos => "distritos",
            Resource::Macrorregiones => "macrorregiones",
            Resource::Equivalencias => "equivalencias",
            Resource::Inverted => "inverted",
            Resource::Otros => "otros",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Departamentos => "departamentos.json",
            Resource::Provincias => "provincias.json",
            Resource::Distritos => "distritos.json",
            Resource::Macrorregiones => "macrorregiones.json",
            Resource::Equivalencias => "equivalencias.json",
            Resource::Inverted => "inverted.json",
            Resource::Otros => "otros.json",
        }
    }
}

impl From<Level> for Resource {
    fn from(level: Level) -> Self {
        match level {
            Level::Departamentos => Resource::Departamentos,
            Level::Provincias => Resource::Provincias,
            Level::Distritos => Resource::Distritos,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SHARED_STORE: Lazy<Arc<ResourceStore>> =
    Lazy::new(|| Arc::new(ResourceStore::new(loader::default_data_dir())));

/// Lazily-loaded, read-only reference tables.
///
/// Every resource sits in its own [`OnceCell`]: the first caller runs the
/// load, concurrent first callers block until it finishes, and a failed load
/// leaves the cell empty so the next call tries again. Callers only ever see
/// fully parsed tables.
///
/// # Example
///
/// ```no_run
/// use ubigeo_core::store::{Resource, ResourceStore};
/// use ubigeo_core::Institution;
///
/// let store = ResourceStore::shared();
/// store.load(Resource::Departamentos).unwrap();
/// let deps = store.departamentos().unwrap();
/// assert_eq!(deps[&Institution::Inei]["01"], "Amazonas");
/// ```
pub struct ResourceStore {
    data_dir: PathBuf,
    departamentos: OnceCell<LocationTable>,
    provincias: OnceCell<LocationTable>,
    distritos: OnceCell<LocationTable>,
    macrorregiones: OnceCell<MacroregionTable>,
    equivalencias: OnceCell<EquivalenceTable>,
    inverted: OnceCell<InvertedTable>,
    otros: OnceCell<MetadataTable>,
}

impl ResourceStore {
    /// A store reading from `data_dir`. Nothing is read until first use.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            departamentos: OnceCell::new(),
            provincias: OnceCell::new(),
            distritos: OnceCell::new(),
            macrorregiones: OnceCell::new(),
            equivalencias: OnceCell::new(),
            inverted: OnceCell::new(),
            otros: OnceCell::new(),
        }
    }

    /// The process-wide store over [`default_data_dir`](Self::default_data_dir).
    pub fn shared() -> Arc<ResourceStore> {
        Arc::clone(&SHARED_STORE)
    }

    pub fn default_data_dir() -> PathBuf {
        loader::default_data_dir()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Loads `resource` if it is not cached yet.
    pub fn load(&self, resource: Resource) -> Result<()> {
        match resource {
            Resource::Departamentos => self.departamentos().map(drop),
            Resource::Provincias => self.provincias().map(drop),
            Resource::Distritos => self.distritos().map(drop),
            Resource::Macrorregiones => self.macrorregiones().map(drop),
            Resource::Equivalencias => self.equivalencias().map(drop),
            Resource::Inverted => self.inverted().map(drop),
            Resource::Otros => self.otros().map(drop),
        }
    }

    /// Loads every resource, stopping at the first failure.
    pub fn load_all(&self) -> Result<()> {
        Resource::ALL.into_iter().try_for_each(|r| self.load(r))
    }

    pub fn is_loaded(&self, resource: Resource) -> bool {
        match resource {
            Resource::Departamentos => self.departamentos.get().is_some(),
            Resource::Provincias => self.provincias.get().is_some(),
            Resource::Distritos => self.distritos.get().is_some(),
            Resource::Macrorregiones => self.macrorregiones.get().is_some(),
            Resource::Equivalencias => self.equivalencias.get().is_some(),
            Resource::Inverted => self.inverted.get().is_some(),
            Resource::Otros => self.otros.get().is_some(),
        }
    }

    pub fn departamentos(&self) -> Result<&LocationTable> {
        self.get_or_load(&self.departamentos, Resource::Departamentos)
    }

    pub fn provincias(&self) -> Result<&LocationTable> {
        self.get_or_load(&self.provincias, Resource::Provincias)
    }

    pub fn distritos(&self) -> Result<&LocationTable> {
        self.get_or_load(&self.distritos, Resource::Distritos)
    }

    /// The code -> name table for `level`.
    pub fn level(&self, level: Level) -> Result<&LocationTable> {
        match level {
            Level::Departamentos => self.departamentos(),
            Level::Provincias => self.provincias(),
            Level::Distritos => self.distritos(),
        }
    }

    pub fn macrorregiones(&self) -> Result<&MacroregionTable> {
        self.get_or_load(&self.macrorregiones, Resource::Macrorregiones)
    }

    pub fn equivalencias(&self) -> Result<&EquivalenceTable> {
        self.get_or_load(&self.equivalencias, Resource::Equivalencias)
    }

    pub fn inverted(&self) -> Result<&InvertedTable> {
        self.get_or_load(&self.inverted, Resource::Inverted)
    }

    pub fn otros(&self) -> Result<&MetadataTable> {
        self.get_or_load(&self.otros, Resource::Otros)
    }

    fn get_or_load<'a, T>(&'a self, cell: &'a OnceCell<T>, resource: Resource) -> Result<&'a T>
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        cell.get_or_try_init(|| {
            tracing::debug!(resource = resource.name(), dir = %self.data_dir.display(), "loading resource");
            loader::read_resource(&self.data_dir, resource)
        })
    }
}

impl fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded: Vec<&str> = Resource::ALL
            .into_iter()
            .filter(|r| self.is_loaded(*r))
            .map(|r| r.name())
            .collect();
        f.debug_struct("ResourceStore")
            .field("data_dir", &self.data_dir)
            .field("loaded", &loaded)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UbigeoError;
    use crate::model::Institution;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn write(dir: &Path, resource: Resource, body: &str) {
        std::fs::write(dir.join(resource.file_name()), body).unwrap();
    }

    #[test]
    fn loads_lazily_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), Resource::Departamentos, r#"{"inei": {"01": "Amazonas"}}"#);

        let store = ResourceStore::new(dir.path());
        assert!(!store.is_loaded(Resource::Departamentos));

        let first = store.departamentos().unwrap() as *const LocationTable;
        assert!(store.is_loaded(Resource::Departamentos));

        // Later edits on disk are not observed: the table is read once.
        write(dir.path(), Resource::Departamentos, r#"{"inei": {"01": "Otro"}}"#);
        let second = store.departamentos().unwrap();
        assert_eq!(first, second as *const LocationTable);
        assert_eq!(second[&Institution::Inei]["01"], "Amazonas");
    }

    #[test]
    fn missing_file_is_fatal_and_retried() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResourceStore::new(dir.path());

        let err = store.load(Resource::Equivalencias).unwrap_err();
        assert!(matches!(err, UbigeoError::Resource { name: "equivalencias", .. }));
        assert!(!store.is_loaded(Resource::Equivalencias));

        write(dir.path(), Resource::Equivalencias, r#"{"departamentos": {"CUZCO": "Cusco"}}"#);
        let eq = store.equivalencias().unwrap();
        assert_eq!(eq[&Level::Departamentos]["CUZCO"], "Cusco");
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), Resource::Provincias, r#"{"inei": {"0101": "Chachapoyas"}}"#);
        let store = Arc::new(ResourceStore::new(dir.path()));
        let seen = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let seen = Arc::clone(&seen);
                std::thread::spawn(move || {
                    let table = store.provincias().unwrap();
                    assert_eq!(table[&Institution::Inei]["0101"], "Chachapoyas");
                    seen.fetch_add(1, Ordering::SeqCst);
                    table as *const LocationTable as usize
                })
            })
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(seen.load(Ordering::SeqCst), 8);
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn level_maps_to_its_table() {
        assert_eq!(Resource::from(Level::Distritos), Resource::Distritos);
        assert_eq!(Resource::Inverted.file_name(), "inverted.json");
    }
}
