use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ubigeo_core::{Institution, Level, MacroregionScheme, MetadataKey, OnError};

/// CLI arguments for ubigeo
#[derive(Debug, Parser)]
#[command(
    name = "ubigeo",
    version,
    about = "Resolve Peruvian ubigeo codes and place names (INEI, RENIEC, SUNAT)"
)]
pub struct CliArgs {
    /// Directory holding the resource tables (default: $UBIGEO_DATA_DIR or the bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Code space to read codes in: inei, reniec or sunat
    #[arg(short = 'i', long = "institucion", global = true, default_value = "inei")]
    pub institucion: Institution,

    /// Print names in folded form (no accents, upper case)
    #[arg(short = 'n', long = "normalize", global = true)]
    pub normalize: bool,

    /// Log lookups and fuzzy matches (same as RUST_LOG=debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many places each level holds
    Stats,

    /// Department name for one or more codes
    Departamento {
        /// Codes of any level (e.g. 1, 01, 150101)
        #[arg(required = true)]
        codes: Vec<String>,

        /// Report the Lima province as "Lima Metropolitana"
        #[arg(long)]
        lima_metro: bool,

        /// Report the other Lima provinces as "Lima Región"
        #[arg(long)]
        lima_region: bool,
    },

    /// Province name for one or more codes (3 digits or more)
    Provincia {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// District name for one or more codes (5 or 6 digits)
    Distrito {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Macroregion of departments given by name or code
    Macrorregion {
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Grouping scheme: inei, minsa or ceplan
        #[arg(short, long, default_value = "inei")]
        esquema: MacroregionScheme,
    },

    /// List every macroregion with its departments
    Macrorregiones {
        #[arg(short, long, default_value = "inei")]
        esquema: MacroregionScheme,
    },

    /// Code of one or more place names
    Ubigeo {
        #[arg(required = true)]
        names: Vec<String>,

        /// departamento(s), provincia(s) or distrito(s)
        #[arg(short = 'l', long, default_value = "departamentos")]
        nivel: Level,
    },

    /// Official spelling of free-text place names
    Validar {
        #[arg(required = true)]
        names: Vec<String>,

        /// Restrict to one level (default: department, then province, then district)
        #[arg(short = 'l', long)]
        nivel: Option<Level>,

        /// raise, warn, ignore, capitalize or coerce
        #[arg(short = 'e', long, default_value = "raise")]
        on_error: OnError,

        /// Disable the fuzzy fallback
        #[arg(long)]
        no_fuzzy: bool,
    },

    /// One metadata field of places given by name or code
    Metadato {
        #[arg(required = true)]
        inputs: Vec<String>,

        #[arg(short = 'l', long, default_value = "departamentos")]
        nivel: Level,

        /// altitud, capital, latitud, longitud or superficie
        #[arg(short = 'k', long, default_value = "capital")]
        clave: MetadataKey,
    },
}
