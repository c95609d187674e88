use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: inspect_catalog <catalog.csv>")?;
    let path = Path::new(&path);

    println!("Inspecting catalog file: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();

    println!("\n=== COLUMNS ===");
    for (i, name) in headers.iter().enumerate() {
        println!("  [{:>2}] {}", i, name);
    }

    // Per-column min/max over finite values, plus missing-value counts
    let n = headers.len();
    let mut mins = vec![f64::INFINITY; n];
    let mut maxs = vec![f64::NEG_INFINITY; n];
    let mut missing = vec![0u64; n];
    let mut rows = 0u64;

    for record in reader.records() {
        let record = record?;
        rows += 1;

        for i in 0..n {
            match record.get(i).and_then(|v| v.trim().parse::<f64>().ok()) {
                Some(v) if v.is_finite() => {
                    mins[i] = mins[i].min(v);
                    maxs[i] = maxs[i].max(v);
                }
                _ => missing[i] += 1,
            }
        }
    }

    println!("\n=== VALUE RANGES ({} rows) ===", rows);
    for (i, name) in headers.iter().enumerate() {
        if mins[i].is_finite() {
            println!(
                "  {:<32} min = {:<16} max = {:<16} missing = {}",
                name, mins[i], maxs[i], missing[i]
            );
        } else {
            println!("  {:<32} (no numeric values)", name);
        }
    }

    Ok(())
}
