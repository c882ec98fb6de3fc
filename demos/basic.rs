use genre_recommender::{CatalogData, RecommendConfig};
use tracing_subscriber::EnvFilter;

const MOVIES: &str = r#"{
    "genreNames": ["Action", "Adventure", "Comedy", "Drama", "Sci-Fi", "Thriller"],
    "movies": [
        {"id": 1, "title": "The Matrix", "genres": ["Action", "Sci-Fi"]},
        {"id": 2, "title": "Inception", "genres": ["Action", "Sci-Fi", "Thriller"]},
        {"id": 3, "title": "The Grand Budapest Hotel", "genres": ["Adventure", "Comedy", "Drama"]},
        {"id": 4, "title": "Heat", "genres": ["Action", "Drama", "Thriller"], "genreVector": [1, 0, 0, 1, 0, 1]},
        {"id": 5, "title": "Arrival", "genres": ["Drama", "Sci-Fi"]},
        {"id": 6, "title": "Paddington 2", "genres": ["Comedy"]},
        {"id": 7, "title": "Koyaanisqatsi", "genres": ["Documentary"]}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // load -> ready: requests are only served once the catalog exists
    let catalog = CatalogData::<u64, f32>::from_json_str(MOVIES)?.into_catalog()?;
    let config = RecommendConfig::from_env()?;

    println!("Movies:");
    for (id, title) in catalog.selection_list() {
        println!("  [{id}] {title}");
    }

    for query in [Some(1u64), Some(6), Some(7), Some(42), None] {
        match catalog.recommend(query.as_ref(), &config) {
            Ok(result) => {
                println!("{result}");
                if let Some(hits) = result.hits() {
                    print!("{hits}");
                }
            }
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
