use anyhow::{Result, bail};
use spantree::Graph;

use crate::cli::{CheckArgs, Cli, delimiter_byte};

pub fn run(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let graph = Graph::from_delimited(&args.matrix, delimiter)?;

    if cli.verbose > 0 {
        eprintln!("[check] matrix={} nodes={} edges={}", args.matrix.display(), graph.node_count(), graph.edge_count());
    }

    graph.validate()?;
    if !graph.is_connected() { bail!("[check] graph is disconnected") }

    println!("[check] ok: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    Ok(())
}
