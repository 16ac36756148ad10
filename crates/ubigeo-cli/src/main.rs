//! ubigeo — Command-line interface for ubigeo-core
//!
//! Resolves Peruvian ubigeo codes and place names from the terminal. Every
//! lookup command takes several inputs and prints one result per line, in
//! input order; the first failing input aborts the command.
//!
//! Usage examples
//! --------------
//!
//! - Show table sizes
//!   $ ubigeo stats
//!
//! - Names for codes (3 digits are read as 4, 5 as 6)
//!   $ ubigeo departamento 1 150101
//!   $ ubigeo departamento --lima-metro 150101
//!   $ ubigeo provincia 1506
//!   $ ubigeo --institucion reniec distrito 140101
//!
//! - Macroregions
//!   $ ubigeo macrorregion Ucayali 25 --esquema ceplan
//!   $ ubigeo macrorregiones --esquema minsa
//!
//! - Codes for names, spelling cleanup and metadata
//!   $ ubigeo ubigeo --nivel distrito Lince Miraflores
//!   $ ubigeo validar CUZCO "san martin" --on-error warn
//!   $ ubigeo metadato --nivel provincia --clave altitud Huarochiri
//!
//! Data source
//! -----------
//!
//! The tables bundled with `ubigeo-core` are used unless `--data-dir` or
//! `UBIGEO_DATA_DIR` points elsewhere. Set `RUST_LOG` (or pass `-v`) to see
//! resource loads and fuzzy matches.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use ubigeo_core::{
    DepartmentOptions, LookupOptions, MetadataValue, NameOptions, ResourceStore, Ubigeo,
};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_all<T: std::fmt::Display>(items: Vec<T>) {
    for item in items {
        println!("{item}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(ResourceStore::default_data_dir);
    tracing::debug!(dir = %data_dir.display(), "using data directory");
    let ubigeo = Ubigeo::with_store(Arc::new(ResourceStore::new(data_dir)));

    let lookup = LookupOptions::default()
        .institucion(args.institucion)
        .normalize(args.normalize);

    match args.command {
        Commands::Stats => {
            let stats = ubigeo
                .stats(args.institucion)
                .context("could not read the location tables")?;
            println!("Ubigeo statistics ({}):", args.institucion);
            println!("  Departamentos: {}", stats.departamentos);
            println!("  Provincias: {}", stats.provincias);
            println!("  Distritos: {}", stats.distritos);
        }

        Commands::Departamento {
            codes,
            lima_metro,
            lima_region,
        } => {
            let opts = DepartmentOptions::default()
                .institucion(args.institucion)
                .with_lima_metro(lima_metro)
                .with_lima_region(lima_region)
                .normalize(args.normalize);
            let names: Vec<String> = ubigeo.get_departamento_many(&codes, &opts)?;
            print_all(names);
        }

        Commands::Provincia { codes } => {
            let names: Vec<String> = ubigeo.get_provincia_many(&codes, &lookup)?;
            print_all(names);
        }

        Commands::Distrito { codes } => {
            let names: Vec<String> = ubigeo.get_distrito_many(&codes, &lookup)?;
            print_all(names);
        }

        Commands::Macrorregion { inputs, esquema } => {
            let labels: Vec<String> =
                ubigeo.get_macrorregion_many(&inputs, esquema, args.normalize)?;
            print_all(labels);
        }

        Commands::Macrorregiones { esquema } => {
            for (label, departments) in ubigeo.macrorregion_map(esquema)? {
                println!("{label}: {}", departments.join(", "));
            }
        }

        Commands::Ubigeo { names, nivel } => {
            let codes: Vec<String> = ubigeo.get_ubigeo_many(&names, nivel, args.institucion)?;
            print_all(codes);
        }

        Commands::Validar {
            names,
            nivel,
            on_error,
            no_fuzzy,
        } => {
            let opts = NameOptions::default()
                .normalize(args.normalize)
                .fuzzy_match(!no_fuzzy)
                .on_error(on_error);
            let normalizer = ubigeo.normalizer();
            let official: Vec<String> = match nivel {
                Some(level) => normalizer.validate_many(&names, &[level], &opts)?,
                None => normalizer.validate_ubicacion_many(&names, &opts)?,
            };
            print_all(official);
        }

        Commands::Metadato {
            inputs,
            nivel,
            clave,
        } => {
            let values: Vec<MetadataValue> = ubigeo.get_metadato_many(&inputs, nivel, clave)?;
            print_all(values);
        }
    }

    Ok(())
}
