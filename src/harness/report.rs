use std::fmt;
use std::time::Duration;

/// Average cost of each benchmarked operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    /// Nanoseconds per modular multiplication.
    pub mul_ns_per_op: u128,
    /// Nanoseconds per exponentiation workload.
    pub exp_ns_per_op: u128,
}

impl Report {
    /// Builds a report from batch totals using integer division.
    pub fn from_totals(
        mul_total: Duration,
        mul_ops: usize,
        exp_total: Duration,
        exp_ops: usize,
    ) -> Self {
        Self {
            mul_ns_per_op: per_op(mul_total, mul_ops),
            exp_ns_per_op: per_op(exp_total, exp_ops),
        }
    }

    /// How many multiplications cost as much as one exponentiation workload.
    pub fn ratio(&self) -> f32 {
        self.exp_ns_per_op as f32 / self.mul_ns_per_op as f32
    }
}

fn per_op(total: Duration, ops: usize) -> u128 {
    total.as_nanos() / ops.max(1) as u128
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "multiplication: {} ns/op ", self.mul_ns_per_op)?;
        writeln!(f, "exponentiation: {} ns/op ", self.exp_ns_per_op)?;
        writeln!(f, "diferential factor: {} ", self.ratio())
    }
}
