//! Error handling example for ubigeo-rs
//!
//! This example demonstrates the error kinds and the on_error policies

use ubigeo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== ubigeo-rs Error Handling Example ===\n");

    let ubigeo = Ubigeo::new();

    // Example 1: loading the tables up front
    println!("--- Example 1: Loading resources ---");
    match ubigeo.store().load_all() {
        Ok(()) => println!("✓ Resources loaded from {}", ubigeo.store().data_dir().display()),
        Err(e) => {
            eprintln!("✗ Failed to load resources: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: malformed codes
    println!("--- Example 2: Invalid codes ---");
    let look = LookupOptions::default();
    for code in ["", "15a1", "1234567", "15", "999999"] {
        match ubigeo.get_distrito(code, &look) {
            Ok(name) => println!("  {code:?}: {name}"),
            Err(e @ UbigeoError::Format(_)) => println!("  {code:?}: bad format ({e})"),
            Err(e @ UbigeoError::Range(_)) => println!("  {code:?}: wrong length ({e})"),
            Err(e) if e.is_not_found() => println!("  {code:?}: unknown ({e})"),
            Err(e) => return Err(e),
        }
    }
    match ubigeo.get_departamento(1.5, &DepartmentOptions::default()) {
        Ok(name) => println!("  1.5: {name}"),
        Err(e) => println!("  1.5: {e}"),
    }
    println!();

    // Example 3: the Lima flags need a province code
    println!("--- Example 3: Lima flags on a department code ---");
    let opts = DepartmentOptions::default().with_lima_metro(true);
    if let Err(e) = ubigeo.get_departamento("15", &opts) {
        println!("  {e}");
    }
    println!();

    // Example 4: on_error policies for an unknown name
    println!("--- Example 4: on_error policies ---");
    for policy in [OnError::Raise, OnError::Ignore, OnError::Capitalize, OnError::Warn] {
        let opts = NameOptions::strict().on_error(policy);
        match ubigeo.validate_ubicacion("villa imaginaria", &opts) {
            Ok(name) => println!("  {policy:<10} -> {name:?}"),
            Err(e) => println!("  {policy:<10} -> error: {e}"),
        }
    }

    // Example 5: invalid options parsed from text
    println!("\n--- Example 5: Invalid options ---");
    for (what, result) in [
        ("level", "region".parse::<Level>().map(|_| ())),
        ("key", "poblacion".parse::<MetadataKey>().map(|_| ())),
        ("institution", "minsa".parse::<Institution>().map(|_| ())),
    ] {
        if let Err(e) = result {
            println!("  {what}: {e}");
        }
    }

    Ok(())
}
