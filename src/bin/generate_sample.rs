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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "energeetika.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Aasta",
            "Koguheide maakasutusega (kt CO2 ekv)",
            "Koguheide maakasutuseta (kt CO2 ekv)",
            "Transport (kt CO2 ekv)",
            "Energeetika (kt CO2 ekv)",
            "Põllumajandus (kt CO2 ekv)",
        ])
        .expect("Failed to write header");

    let years: Vec<i32> = (1990..=2020).collect();

    for (i, &year) in years.iter().enumerate() {
        // Declining totals, roughly matching the national inventory scale.
        let trend = 40_000.0 - 950.0 * i as f64;
        let total = (trend + rng.gauss(0.0, 600.0)).max(6_000.0);

        let energy_share = (0.87 + rng.gauss(0.0, 0.015)).clamp(0.80, 0.92);
        let energy = total * energy_share;

        let with_land_use = total + rng.gauss(300.0, 150.0);
        let transport = total * (0.10 + rng.gauss(0.0, 0.01)).max(0.05);
        let agriculture = total * (0.07 + rng.gauss(0.0, 0.008)).max(0.03);

        writer
            .write_record([
                year.to_string(),
                format!("{with_land_use:.1}"),
                format!("{total:.1}"),
                format!("{transport:.1}"),
                format!("{energy:.1}"),
                format!("{agriculture:.1}"),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} emission years ({}..{}) to {output_path}",
        years.len(),
        years.first().unwrap(),
        years.last().unwrap()
    );
}
