//! Writes `sample_volcanoes.csv`: a deterministic, windows-1252 encoded
//! dataset with the quirks real exports have (padded header labels, the
//! legacy "Elevation (m)" label, an extra column and missing cells).

use encoding_rs::WINDOWS_1252;

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Country, centre latitude, centre longitude, name stems.
const REGIONS: &[(&str, f64, f64, &[&str])] = &[
    ("Iceland", 64.5, -19.0, &["Hekla", "Katla", "Askja", "Eyjafjallajökull", "Grímsvötn"]),
    ("Mexico", 19.2, -98.6, &["Popocatépetl", "Colima", "Parícutin", "Citlaltépetl"]),
    ("Colombia", 4.8, -75.3, &["Nevado del Ruíz", "Galeras", "Puracé", "Doña Juana"]),
    ("Japan", 35.4, 138.7, &["Fuji", "Aso", "Sakurajima", "Asama", "Unzen"]),
    ("Italy", 40.8, 14.4, &["Etna", "Vesuvius", "Stromboli", "Campi Flegrei"]),
    ("Chile", -37.5, -71.5, &["Villarrica", "Llaima", "Calbuco", "Osorno"]),
];

const TYPES: &[&str] = &[
    "Stratovolcano",
    "Stratovolcano",
    "Stratovolcano",
    "Shield",
    "Caldera",
    "Caldera",
    "Volcanic field",
    "Lava dome",
    "Submarine",
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Volcano Number",
            " Volcano Name",
            "Country ",
            " Primary Volcano Type ",
            "Latitude",
            "Longitude",
            "Elevation (m) ",
        ])
        .expect("Failed to write header");

    let mut number = 210_010u64;
    let mut rows = 0usize;
    for &(country, lat, lon, stems) in REGIONS {
        for (i, stem) in stems.iter().enumerate() {
            for suffix in ["", " II", " III"] {
                let ty = rng.pick(TYPES);
                let elevation = if ty == "Submarine" {
                    rng.uniform(-1500.0, -10.0).round()
                } else {
                    rng.uniform(200.0, 6500.0).round()
                };

                // Every seventh row loses a required cell, every fifth a type.
                let roll = rows % 7;
                let name = format!("{stem}{suffix}");
                let record = [
                    number.to_string(),
                    name,
                    if roll == 3 {
                        String::new()
                    } else {
                        country.to_string()
                    },
                    if rows % 5 == 4 {
                        String::new()
                    } else {
                        ty.to_string()
                    },
                    if roll == 5 {
                        String::new()
                    } else {
                        format!("{:.3}", lat + rng.uniform(-2.0, 2.0))
                    },
                    format!("{:.3}", lon + rng.uniform(-2.0, 2.0) + i as f64 * 0.1),
                    if roll == 6 {
                        "NaN".to_string()
                    } else {
                        format!("{elevation}")
                    },
                ];
                writer.write_record(&record).expect("Failed to write row");
                number += 1;
                rows += 1;
            }
        }
    }

    let bytes = writer.into_inner().expect("Failed to flush CSV");
    let text = String::from_utf8(bytes).expect("CSV output is UTF-8");
    let (encoded, _, had_errors) = WINDOWS_1252.encode(&text);
    assert!(!had_errors, "sample text must be representable in windows-1252");

    let output_path = "sample_volcanoes.csv";
    std::fs::write(output_path, &encoded).expect("Failed to write output file");

    println!("Wrote {rows} volcano rows (windows-1252) to {output_path}");
}
