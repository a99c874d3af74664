mod proc_errors;
mod cfg;

use itertools::{EitherOrBoth, Itertools};
use serde::{Serialize, Deserialize};

use crate::geo::{Coordinates, Dimension, Tolerance, Vertex, VertexList};
use crate::io;

// Re-export errors
pub use proc_errors::{
    CompareError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    CompareCfg,
    CompareTarget,
};

/// Outcome of comparing the vertices at one index of two lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PairOutcome {
    Equal,
    /// Same dimensionality, but some axis is outside the tolerance.
    Differs {
        #[serde(with = "float_text")]
        max_delta: f64,
    },
    DimensionMismatch {
        a: Dimension,
        b: Dimension,
    },
    /// Index past the end of the first list.
    MissingInA,
    /// Index past the end of the second list.
    MissingInB,
}
impl PairOutcome {
    /// Compare two vertices.
    pub fn of(a: &Vertex, b: &Vertex, tolerance: Tolerance) -> Self {
        if a.equals(Some(b), tolerance) {
            return PairOutcome::Equal;
        }
        match a.max_delta(b) {
            Some(max_delta) => PairOutcome::Differs{max_delta},
            None => PairOutcome::DimensionMismatch{a: a.dimension(), b: b.dimension()},
        }
    }
}

/// Serialize non-finite floats as text ("NaN", "inf", "-inf"),
/// since JSON has no literal for them.
mod float_text {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FloatOrText {
        Num(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match FloatOrText::deserialize(deserializer)? {
            FloatOrText::Num(value) => Ok(value),
            FloatOrText::Text(text) => text.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("Invalid number: {}", text))),
        }
    }
}

/// A non-equal pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

/// Comparison report.
/// Only pairs that are not equal are listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    pub tolerance: Tolerance,
    pub len_a: usize,
    pub len_b: usize,
    pub equal: usize,
    pub mismatches: Vec<PairReport>,
}
impl CompareReport {
    /// Check whether the lists match element by element.
    pub fn all_equal(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Number of index pairs looked at.
    pub fn compared(&self) -> usize {
        self.len_a.max(self.len_b)
    }
}
impl std::fmt::Display for CompareReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Compared {} vertex pairs (tolerance: {})", self.compared(), self.tolerance)?;
        writeln!(f, "- Equal: {}", self.equal)?;
        write!(f, "- Not equal: {}", self.mismatches.len())?;
        for pair in self.mismatches.iter() {
            write!(f, "\n  [{}] ", pair.index)?;
            match pair.outcome {
                PairOutcome::Equal => write!(f, "equal")?,
                PairOutcome::Differs{max_delta} => write!(f, "differs by up to {:e}", max_delta)?,
                PairOutcome::DimensionMismatch{a, b} => write!(f, "dimension mismatch ({} vs {})", a, b)?,
                PairOutcome::MissingInA => write!(f, "missing from the first list")?,
                PairOutcome::MissingInB => write!(f, "missing from the second list")?,
            }
        }
        Ok(())
    }
}

/// Check every vertex of a list against the numeric policy.
pub fn validate(list: &VertexList, name: &str, cfg: &CompareCfg) -> ProcResult<()> {
    match list.first_invalid(cfg.policy) {
        Some((index, error)) => Err(CompareError::GeoError{list: name.to_string(), index, error}),
        None => Ok(()),
    }
}

/// Compare two vertex lists index by index.
/// Returns a `ProcResult` with the `CompareReport` or an `Err` if the policy rejects a vertex.
pub fn compare_vertices(a: &VertexList, b: &VertexList, cfg: &CompareCfg) -> ProcResult<CompareReport> {
    validate(a, "the first list", cfg)?;
    validate(b, "the second list", cfg)?;

    let mut equal = 0;
    let mut mismatches = Vec::<PairReport>::new();
    for (index, pair) in a.vertices.iter().zip_longest(b.vertices.iter()).enumerate() {
        let outcome = match pair {
            EitherOrBoth::Both(va, vb) => PairOutcome::of(va, vb, cfg.tolerance),
            EitherOrBoth::Left(_) => PairOutcome::MissingInB,
            EitherOrBoth::Right(_) => PairOutcome::MissingInA,
        };
        if outcome == PairOutcome::Equal {
            equal += 1;
        } else {
            log::debug!("Pair {}: {:?}", index, outcome);
            mismatches.push(PairReport{index, outcome});
        }
    }

    Ok(CompareReport{
        tolerance: cfg.tolerance,
        len_a: a.len(),
        len_b: b.len(),
        equal,
        mismatches,
    })
}

/// Run the comparison process.
/// Loads both lists, compares them and saves the report if asked.
pub fn do_compare(target: &CompareTarget) -> ProcResult<CompareReport> {
    println!("Loading vertices from {}...", target.input_a);
    let list_a: VertexList = io::read_data(&target.input_a, target.format)?;
    println!("Loading vertices from {}...", target.input_b);
    let list_b: VertexList = io::read_data(&target.input_b, target.format)?;
    log::info!("Loaded {} and {} vertices", list_a.len(), list_b.len());

    let report = compare_vertices(&list_a, &list_b, &target.cfg)?;

    if let Some(output_path) = target.output_path.as_ref() {
        println!("Saving report to {}...", output_path);
        io::write_data(output_path, &report)?;
    }
    Ok(report)
}
