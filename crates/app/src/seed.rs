//! Run seed selection: an explicit `--seed` wins, otherwise a mixed
//! time/pid/counter value keeps separate launches distinct.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);
    mix_seed(entropy)
}

pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut selected_seed = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        let raw_value = if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            index += 2;
            Some(value.as_str())
        } else {
            index += 1;
            argument.strip_prefix("--seed=")
        };

        if let Some(raw_value) = raw_value {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            let seed = raw_value
                .parse::<u64>()
                .map_err(|_| format!("seed value '{raw_value}' must be a number"))?;
            selected_seed = Some(seed);
        }
    }

    Ok(match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_flag_is_absent() {
        let choice = resolve_seed_from_args(&as_args(&["wayside"]), 321).expect("resolve");
        assert_eq!(choice, SeedChoice::Generated(321));
    }

    #[test]
    fn parses_separate_and_inline_seed_values() {
        let separate =
            resolve_seed_from_args(&as_args(&["wayside", "--seed", "4242"]), 1).expect("resolve");
        assert_eq!(separate, SeedChoice::Cli(4242));

        let inline =
            resolve_seed_from_args(&as_args(&["wayside", "--seed=2026"]), 1).expect("resolve");
        assert_eq!(inline, SeedChoice::Cli(2026));
    }

    #[test]
    fn rejects_missing_and_non_numeric_values() {
        assert!(resolve_seed_from_args(&as_args(&["wayside", "--seed"]), 1).is_err());
        assert!(resolve_seed_from_args(&as_args(&["wayside", "--seed=abc"]), 1).is_err());
    }

    #[test]
    fn rejects_duplicate_seed_flags() {
        let err = resolve_seed_from_args(&as_args(&["wayside", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate flags");
        assert!(err.contains("more than once"), "unexpected message: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
