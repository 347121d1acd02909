use std::num::NonZeroU32;

/// Hardware concurrency as reported by the OS, falling back to 1.
#[must_use]
pub fn available_workers() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

/// Resolves a configured worker count, treating `None` as "use all cores".
#[must_use]
pub fn calculate_worker_count(configured: Option<NonZeroU32>) -> NonZeroU32 {
    configured.unwrap_or_else(available_workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_count_is_kept() {
        let four = NonZeroU32::new(4).unwrap();

        assert_eq!(calculate_worker_count(Some(four)), four);
    }

    #[test]
    fn test_default_matches_available_parallelism() {
        let num_avail_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1) as u32;

        assert_eq!(calculate_worker_count(None).get(), num_avail_threads);
    }

    #[test]
    fn test_default_is_at_least_one() {
        assert!(available_workers().get() >= 1);
    }
}
