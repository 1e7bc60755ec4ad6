//! Writes a synthetic `./Data/Nobel_laureates.json` so the viewer can run
//! without downloading the real dataset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct SampleLaureate {
    born_in: Option<String>,
    category: String,
    date_of_birth: String,
    gender: Option<&'static str>,
    name: String,
    place_of_birth: Option<String>,
    year: i64,
}

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

const CATEGORIES: [&str; 6] = [
    "physics",
    "chemistry",
    "medicine",
    "literature",
    "peace",
    "economics",
];

/// Country spellings as they appear in the source data, synonyms included.
const COUNTRIES: [(&str, u64); 9] = [
    ("USA", 30),
    ("United States", 8),
    ("US", 4),
    ("UK", 12),
    ("United Kingdom", 6),
    ("Germany", 14),
    ("France", 10),
    ("Sweden", 5),
    ("Japan", 4),
];

const CITIES: [&str; 4] = ["Springfield", "Lyon", "Uppsala", "Kyoto"];
const MONTHS: [&str; 6] = ["January", "March", "May", "July", "September", "November"];

fn pick_country(rng: &mut SimpleRng) -> &'static str {
    let total: u64 = COUNTRIES.iter().map(|(_, w)| w).sum();
    let mut roll = rng.below(total);
    for (country, weight) in COUNTRIES {
        if roll < weight {
            return country;
        }
        roll -= weight;
    }
    COUNTRIES[0].0
}

fn birth_date(rng: &mut SimpleRng, year: i64) -> String {
    match rng.below(3) {
        0 => format!("{} {}, {year}", rng.pick(&MONTHS), 1 + rng.below(28)),
        1 => format!("{year}-{:02}-{:02}", 1 + rng.below(12), 1 + rng.below(28)),
        _ => format!("c. {year}"),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut rows = Vec::new();

    for i in 0..600 {
        let year = 1901 + rng.below(120) as i64;
        let age = 30 + rng.below(55) as i64;
        let country = pick_country(&mut rng);
        let city = *rng.pick(&CITIES);

        // Blank born_in: recoverable from the place text about half the time.
        let (born_in, place_of_birth) = match rng.below(20) {
            0 => (Some(String::new()), Some(format!("{city}, {country}"))),
            1 => (Some(String::new()), Some(city.to_string())),
            _ => (Some(country.to_string()), Some(format!("{city}, {country}"))),
        };

        // Organisations carry no gender.
        let gender = match rng.below(25) {
            0 => None,
            n if n < 5 => Some("female"),
            _ => Some("male"),
        };

        let category = if rng.below(50) == 0 {
            String::new()
        } else {
            rng.pick(&CATEGORIES).to_string()
        };

        rows.push(SampleLaureate {
            born_in,
            category,
            date_of_birth: birth_date(&mut rng, year - age),
            gender,
            name: format!("Laureate {i}"),
            place_of_birth,
            year,
        });
    }

    let dir = Path::new("./Data");
    fs::create_dir_all(dir).context("creating ./Data")?;
    let output_path = dir.join("Nobel_laureates.json");
    let json = serde_json::to_string_pretty(&rows).context("serialising sample rows")?;
    fs::write(&output_path, json)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Wrote {} laureates to {}", rows.len(), output_path.display());
    Ok(())
}
