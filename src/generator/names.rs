//! Employee name generation
//!
//! Draws full names from fixed first/last name pools.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amir", "Anna", "Carlos", "Chloe", "Daniel", "Elena", "Emma", "Felix", "Grace",
    "Hannah", "Ivan", "Jack", "Julia", "Kenji", "Laura", "Liam", "Maria", "Marcus", "Mei",
    "Nadia", "Noah", "Olivia", "Omar", "Priya", "Ryan", "Sofia", "Thomas", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Bauer", "Becker", "Chen", "Clark", "Davies", "Fischer", "Garcia", "Hall", "Hansen",
    "Ito", "Jensen", "Khan", "Kowalski", "Lewis", "Lopez", "Martin", "Morgan", "Nguyen", "Okafor",
    "Park", "Patel", "Rossi", "Schmidt", "Silva", "Singh", "Tanaka", "Walker", "Weber", "Wright",
];

/// Full-name generator backed by fixed pools
#[derive(Debug, Clone, Default)]
pub struct NameGenerator;

impl NameGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a full name; first name before last name
    pub fn full_name(&self, rng: &mut impl Rng) -> String {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        format!("{} {}", first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_shape() {
        let names = NameGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let name = names.full_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(FIRST_NAMES.contains(&parts[0]));
            assert!(LAST_NAMES.contains(&parts[1]));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let names = NameGenerator::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(names.full_name(&mut a), names.full_name(&mut b));
        }
    }
}
