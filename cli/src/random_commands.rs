use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// Emits a pseudo-random command stream: every round adds a batch of streets, generates the
/// graph, then removes the batch again. Useful for fuzzing the interactive loop (pipe the output
/// into `run`).
pub fn emit(
    rng_seed: u64,
    max_streets: usize,
    max_points: usize,
    coord_range: i64,
    rounds: usize,
) -> Result<()> {
    let mut rng = XorShiftRng::seed_from_u64(rng_seed);
    for line in generate_stream(&mut rng, max_streets, max_points, coord_range, rounds) {
        println!("{}", line);
    }
    Ok(())
}

fn generate_stream(
    rng: &mut XorShiftRng,
    max_streets: usize,
    max_points: usize,
    coord_range: i64,
    rounds: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..rounds {
        let num_streets = rng.gen_range(2..=max_streets.max(2));
        let mut names: Vec<String> = Vec::new();
        while names.len() < num_streets {
            let name = random_name(rng);
            if names.contains(&name) {
                continue;
            }
            lines.push(format!(
                "add \"{}\" {}",
                name,
                random_points(rng, max_points, coord_range)
            ));
            names.push(name);
        }
        lines.push("gg".to_string());
        for name in names {
            lines.push(format!("rm \"{}\"", name));
        }
    }
    lines
}

fn random_name(rng: &mut XorShiftRng) -> String {
    (0..10)
        .map(|_| char::from(b'A' + rng.gen_range(0..26)))
        .collect()
}

fn random_points(rng: &mut XorShiftRng, max_points: usize, coord_range: i64) -> String {
    let num_points = rng.gen_range(2..=max_points.max(2));
    let mut pts: Vec<(i64, i64)> = Vec::new();
    while pts.len() < num_points {
        let pt = (
            rng.gen_range(-coord_range..=coord_range),
            rng.gen_range(-coord_range..=coord_range),
        );
        // Consecutive duplicates would be rejected by the street model
        if pts.last() == Some(&pt) {
            continue;
        }
        pts.push(pt);
    }
    pts.iter()
        .map(|(x, y)| format!("({},{})", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}
