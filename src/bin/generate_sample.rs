use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;

/// Write a synthetic movie catalogue for trying out flixlens.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Number of records
    #[arg(short, long, default_value = "500")]
    count: usize,

    /// PRNG seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output CSV path
    #[arg(short, long, default_value = "sample_movies.csv")]
    output: PathBuf,

    /// Also write the same rows as Parquet to this path
    #[arg(long, value_name = "FILE")]
    parquet: Option<PathBuf>,
}

const ADJECTIVES: [&str; 12] = [
    "Silent", "Crimson", "Lost", "Broken", "Endless", "Golden", "Hidden", "Savage", "Frozen",
    "Last", "Electric", "Wild",
];
const NOUNS: [&str; 12] = [
    "Man", "Kingdom", "Horizon", "Tape", "Island", "Protocol", "Garden", "Empire", "Witness",
    "River", "Machine", "Summer",
];
const GENRES: [&str; 14] = [
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Documentary", "Drama", "Family",
    "Fantasy", "Horror", "Mystery", "Romance", "Science Fiction", "Thriller",
];
const LANGUAGES: [&str; 5] = ["en", "es", "fr", "ja", "ko"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One generated record; `None` fields are written as empty cells.
struct Movie {
    release_date: Option<String>,
    title: Option<String>,
    popularity: f64,
    vote_count: i64,
    vote_average: Option<f64>,
    language: String,
    genre: Option<String>,
}

fn generate(rng: &mut SimpleRng, i: usize) -> Movie {
    let base = format!("The {} {}", rng.pick(&ADJECTIVES), rng.pick(&NOUNS));
    // Later records reuse names as sequels.
    let title = match i / 40 {
        0 => base,
        n => format!("{base} {}", n + 1),
    };
    let year = 1960 + rng.below(64);
    let release_date = format!("{year}-{:02}-{:02}", 1 + rng.below(12), 1 + rng.below(28));

    let n_genres = 1 + rng.below(3);
    let mut genres: Vec<&str> = Vec::with_capacity(n_genres);
    while genres.len() < n_genres {
        let g = rng.pick(&GENRES);
        if !genres.contains(&g) {
            genres.push(g);
        }
    }

    // Heavy-tailed popularity, votes clustered around 6.5.
    let popularity = ((13.0 + rng.gauss(0.0, 1.2).exp() * 40.0) * 100.0).round() / 100.0;
    let vote_average = (rng.gauss(6.5, 1.1).clamp(0.0, 10.0) * 10.0).round() / 10.0;

    // Sprinkle the gaps real exports have.
    let roll = rng.below(50);
    Movie {
        release_date: match roll {
            0 => None,
            1 => Some("TBA".to_string()),
            _ => Some(release_date),
        },
        title: (roll != 2).then_some(title),
        popularity,
        vote_count: rng.below(20_000) as i64,
        vote_average: (roll != 3).then_some(vote_average),
        language: rng.pick(&LANGUAGES).to_string(),
        genre: (roll != 4).then(|| genres.join(", ")),
    }
}

fn write_csv(path: &Path, movies: &[Movie]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV output")?;
    writer.write_record([
        "Release_Date",
        "Title",
        "Popularity",
        "Vote_Count",
        "Vote_Average",
        "Original_Language",
        "Genre",
    ])?;
    for m in movies {
        writer.write_record([
            m.release_date.clone().unwrap_or_default(),
            m.title.clone().unwrap_or_default(),
            m.popularity.to_string(),
            m.vote_count.to_string(),
            m.vote_average.map(|v| v.to_string()).unwrap_or_default(),
            m.language.clone(),
            m.genre.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &Path, movies: &[Movie]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Release_Date", DataType::Utf8, true),
        Field::new("Title", DataType::Utf8, true),
        Field::new("Popularity", DataType::Float64, false),
        Field::new("Vote_Count", DataType::Int64, false),
        Field::new("Vote_Average", DataType::Float64, true),
        Field::new("Original_Language", DataType::Utf8, false),
        Field::new("Genre", DataType::Utf8, true),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter(movies.iter().map(|m| m.release_date.as_deref()))),
        Arc::new(StringArray::from_iter(movies.iter().map(|m| m.title.as_deref()))),
        Arc::new(Float64Array::from_iter_values(movies.iter().map(|m| m.popularity))),
        Arc::new(Int64Array::from_iter_values(movies.iter().map(|m| m.vote_count))),
        Arc::new(Float64Array::from_iter(movies.iter().map(|m| m.vote_average))),
        Arc::new(StringArray::from_iter_values(movies.iter().map(|m| m.language.as_str()))),
        Arc::new(StringArray::from_iter(movies.iter().map(|m| m.genre.as_deref()))),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let movies: Vec<Movie> = (0..args.count).map(|i| generate(&mut rng, i)).collect();

    write_csv(&args.output, &movies)?;
    println!("Wrote {} movies to {}", movies.len(), args.output.display());

    if let Some(path) = &args.parquet {
        write_parquet(path, &movies)?;
        println!("Wrote {} movies to {}", movies.len(), path.display());
    }
    Ok(())
}
