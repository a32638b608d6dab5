use std::path::Path;

use anyhow::{Context, Result, bail};
use spantree::{Graph, write_matrix, write_matrix_string};

use crate::cli::{Cli, MstArgs, delimiter_byte};

pub fn run(cli: &Cli, args: &MstArgs) -> Result<()> {
    let delimiter = delimiter_byte(args.delimiter)?;
    if args.output.as_deref() == Some(Path::new("-")) { bail!("use no --output to write to stdout.") }

    if cli.verbose > 0 {
        eprintln!("[mst] matrix={} frontier={:?}", args.matrix.display(), args.frontier);
    }

    let mut graph = Graph::from_delimited(&args.matrix, delimiter)?;
    if args.validate { graph.validate()?; }
    graph.construct_mst_with(args.frontier.into())?;

    let tree = graph.spanning_tree().context("[mst] spanning tree missing after construction")?;
    let summary = graph.summary().context("[mst] spanning tree missing after construction")?;

    match &args.output {
        Some(path) => {
            write_matrix(tree, path, delimiter)?;
            println!("{}", serde_json::to_string(&summary)?);
            if cli.verbose > 0 { eprintln!("[mst] wrote tree -> {}", path.display()); }
        }
        None => {
            print!("{}", write_matrix_string(tree, delimiter)?);
            if cli.verbose > 0 { eprintln!("[mst] {}", serde_json::to_string(&summary)?); }
        }
    }

    Ok(())
}
