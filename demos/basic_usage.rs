//! Basic usage example for ubigeo-rs
//!
//! This example demonstrates how to:
//! - Resolve codes to department, province and district names
//! - Switch between the INEI, RENIEC and SUNAT code spaces
//! - Look up macroregions, codes by name and location metadata

use ubigeo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== ubigeo-rs Basic Usage Example ===\n");

    let ubigeo = Ubigeo::new();
    let dep = DepartmentOptions::default();
    let look = LookupOptions::default();

    // Example 1: codes to names (short codes get their leading zero back)
    println!("--- Example 1: Codes to names ---");
    println!("  1      -> {}", ubigeo.get_departamento("1", &dep)?);
    println!("  101    -> {}", ubigeo.get_provincia("101", &look)?);
    println!("  150110 -> {}", ubigeo.get_distrito(150110, &look)?);
    println!();

    // Example 2: Lima Metropolitana vs Lima Región
    println!("--- Example 2: Lima ---");
    let lima = dep.with_lima_metro(true).with_lima_region(true);
    for code in ["150101", "150601"] {
        println!("  {code} -> {}", ubigeo.get_departamento(code, &lima)?);
    }
    println!();

    // Example 3: RENIEC numbers departments differently
    println!("--- Example 3: Institutions ---");
    for institution in [Institution::Inei, Institution::Reniec] {
        let code = ubigeo.get_ubigeo("Cusco", Level::Departamentos, institution)?;
        println!("  Cusco in {institution}: {code}");
    }
    println!();

    // Example 4: macroregions under each scheme
    println!("--- Example 4: Macroregions of Ucayali ---");
    for scheme in [MacroregionScheme::Inei, MacroregionScheme::Minsa, MacroregionScheme::Ceplan] {
        println!("  {scheme}: {}", ubigeo.get_macrorregion("Ucayali", scheme, false)?);
    }
    println!();

    // Example 5: metadata
    println!("--- Example 5: Metadata ---");
    let capital = ubigeo.get_metadato("La Libertad", Level::Departamentos, MetadataKey::Capital)?;
    let area = ubigeo.get_metadato("Lince", Level::Distritos, MetadataKey::Superficie)?;
    println!("  Capital of La Libertad: {capital}");
    println!("  Area of Lince: {area} km²");

    let stats = ubigeo.stats(Institution::Inei)?;
    println!(
        "\nBundled tables: {} departamentos, {} provincias, {} distritos",
        stats.departamentos, stats.provincias, stats.distritos
    );

    Ok(())
}
