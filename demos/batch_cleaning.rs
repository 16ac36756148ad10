//! Batch cleaning example for ubigeo-rs
//!
//! Cleans a column of hand-typed department names and converts a column of
//! codes, keeping whatever container the caller uses.

use std::collections::VecDeque;
use ubigeo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== ubigeo-rs Batch Cleaning Example ===\n");

    let ubigeo = Ubigeo::new();

    // Example 1: messy survey answers
    println!("--- Example 1: Free-text department names ---");
    let answers = ["CUZCO", "huanuco", "Madre de dios", "SAN MARTIN", "Arequipaa", "region lima"];
    let cleaned: Vec<String> = ubigeo
        .normalizer()
        .validate_departamento_many(answers, &NameOptions::default())?;
    for (raw, clean) in answers.iter().zip(&cleaned) {
        println!("  {raw:<15} -> {clean}");
    }
    println!();

    // Example 2: folded output for joins against other datasets
    println!("--- Example 2: Normalized keys ---");
    let keys: Vec<String> = ubigeo
        .normalizer()
        .validate_departamento_many(answers, &NameOptions::default().normalize(true))?;
    println!("  {}", keys.join(" | "));
    println!();

    // Example 3: codes in a VecDeque come back in a VecDeque
    println!("--- Example 3: Codes to names ---");
    let codes: VecDeque<&str> = VecDeque::from(vec!["010101", "150101", "080101", "250101"]);
    let names: VecDeque<String> =
        ubigeo.get_departamento_many(codes.iter().copied(), &DepartmentOptions::default())?;
    for (code, name) in codes.iter().zip(&names) {
        println!("  {code} -> {name}");
    }
    println!();

    // Example 4: unknown entries kept as typed instead of failing the batch
    println!("--- Example 4: Keeping unknown names ---");
    let mixed = ["Lima", "Lince", "Nowhere"];
    let kept: Vec<String> = ubigeo.normalizer().validate_ubicacion_many(
        mixed,
        &NameOptions::strict().on_error(OnError::Ignore),
    )?;
    println!("  {kept:?}");

    Ok(())
}
