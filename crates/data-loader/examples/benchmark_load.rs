use data_loader::MovieTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("imdb_top_1000.csv");

    println!("Loading IMDB top 1000 dataset...\n");

    let start = Instant::now();
    let table = MovieTable::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let rated = table.movies().iter().filter(|m| m.rating.is_some()).count();
    let with_overview = table.movies().iter().filter(|m| m.overview.is_some()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", table.len());
    println!("Rated: {}", rated);
    println!("With overview: {}", with_overview);
    println!("Genres: {}", table.genres().join(", "));
}
