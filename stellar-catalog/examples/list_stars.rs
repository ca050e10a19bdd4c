use std::path::Path;
use stellar_catalog::{CatalogPaths, CatalogReader, StarNames};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args()
        .nth(1)
        .expect("Usage: list_stars <data-dir>");

    let reader = CatalogReader::new(CatalogPaths::from_dir(Path::new(&dir)));
    let stars = reader.read_stars(&StarNames::new())?;
    println!("{} stars loaded", stars.len());

    let mut brightest: Vec<_> = stars.iter().collect();
    brightest.sort_by(|a, b| a.mag.total_cmp(&b.mag));

    for star in brightest.iter().take(10) {
        println!(
            "  HR {:>5}  {:10}  RA {:10.6}°  Dec {:+10.6}°  mag {:5.2}",
            star.number, star.name, star.ra, star.dec, star.mag,
        );
    }

    Ok(())
}
