//! Id generation seam.
//!
//! Record ids are unique within one pipeline run. The generator is a trait so
//! tests can substitute a deterministic sequence for the uuid default.

use uuid::Uuid;

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 uuids; collision-resistant across runs, unique within one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based ids for tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("row-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_stable() {
        let mut ids = SequentialIdGenerator::default();
        assert_eq!(ids.next_id(), "row-1");
        assert_eq!(ids.next_id(), "row-2");
    }

    #[test]
    fn uuid_ids_are_distinct_within_a_run() {
        let mut ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
