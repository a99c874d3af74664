pub mod args;
pub mod compare;
pub mod geo;
pub mod io;
pub mod logging;
mod crate_errors;

use strum::IntoEnumIterator;

pub use crate_errors::{
    WlzvtxError,
    WlzvtxResult,
    err_str,
};

use geo::{Vertex, Vertex2, Vertex3, VertexList};

/// Run the parsed command.
/// Returns a `WlzvtxResult` with `()` or an `Err`.
pub fn run(cli: args::WlzvtxCli) -> WlzvtxResult<()> {
    match cli.command {
        args::Command::Compare(compare_args) => run_compare(compare_args),
        args::Command::Check(check_args) => run_check(check_args),
        args::Command::Example(example_args) => run_example(example_args),
    }
}

/// Compare two vertex lists and print the summary.
/// Any pair that is not equal makes this an `Err`.
pub fn run_compare(compare_args: args::CompareArgs) -> WlzvtxResult<()> {
    let target = compare_args.build_target()?;
    let report = compare::do_compare(&target)?;
    println!("{}", report);

    if !report.all_equal() {
        return Err(WlzvtxError::NotEqual{
            mismatches: report.mismatches.len(),
            compared: report.compared(),
        });
    }
    Ok(())
}

/// Load a vertex list, check it against the policy and print counts per dimension.
pub fn run_check(check_args: args::CheckArgs) -> WlzvtxResult<()> {
    println!("Loading vertices from {}...", check_args.input);
    let list: VertexList = io::read_data(&check_args.input, check_args.format)?;
    if list.is_empty() {
        return err_str(&format!("No vertices found in {}", check_args.input));
    }

    if let Some((index, error)) = list.first_invalid(check_args.policy) {
        log::debug!("Vertex {} rejected: {}", index, list.vertices[index]);
        return Err(compare::CompareError::GeoError{list: check_args.input, index, error}.into());
    }

    println!("Checked {} vertices:", list.len());
    for dimension in geo::Dimension::iter() {
        println!("- {}: {}", dimension, list.count(dimension));
    }
    Ok(())
}

/// Print an example file in the requested format.
pub fn run_example(example_args: args::ExampleArgs) -> WlzvtxResult<()> {
    let text = match example_args.kind {
        args::ExampleKind::Vertices => io::to_string(&example_vertices(), example_args.format)?,
        args::ExampleKind::Cfg => {
            let cfg = compare::CompareCfg{
                tolerance: geo::Tolerance::absolute(1e-9)?,
                policy: geo::NumericPolicy::Finite,
            };
            io::to_string(&cfg, example_args.format)?
        },
    };
    println!("{}", text);
    Ok(())
}

/// Example vertex list, one vertex of each dimensionality.
pub fn example_vertices() -> VertexList {
    VertexList::new(vec![
        Vertex::from(Vertex2::new(1.0, 2.0)),
        Vertex::from(Vertex3::new(1.0, 2.0, 3.0)),
    ])
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_vertices_parse_back() {
        for format in io::Format::iter() {
            let text = io::to_string(&example_vertices(), format).unwrap();
            let back: VertexList = io::from_str("example", &text, format).unwrap();
            assert_eq!(back, example_vertices());
        }
    }

    #[test]
    fn example_cfg_parses_back() {
        for format in io::Format::iter() {
            let cfg = compare::CompareCfg{
                tolerance: geo::Tolerance::absolute(0.125).unwrap(),
                policy: geo::NumericPolicy::Finite,
            };
            let text = io::to_string(&cfg, format).unwrap();
            let back: compare::CompareCfg = io::from_str("example", &text, format).unwrap();
            assert_eq!(back, cfg);
        }
    }

    #[test]
    fn not_equal_message() {
        let error = WlzvtxError::NotEqual{mismatches: 2, compared: 5};
        assert_eq!(error.to_string(), "! NOT EQUAL:\n- 2 of 5 vertex pairs differ");
    }
}
