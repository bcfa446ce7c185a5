use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

use street_model::{Graph, Street, StreetRegistry};

use crate::parser::{parse_command, StreetCommand};

/// The interactive loop: one command per line, errors reported to STDERR without stopping the
/// loop, graph output on STDOUT. A blank line or EOF ends the session.
pub fn run(input: Option<String>, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            fs_err::File::open(&path).with_context(|| format!("can't read commands from {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut registry = StreetRegistry::new();
    let mut last_graph: Option<Graph> = None;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        if let Err(err) = handle_line(&line, &mut registry, &mut last_graph, json) {
            eprintln!("Error: {}", err);
        }
    }

    info!("done; {} streets registered at exit", registry.len());
    Ok(())
}

fn handle_line(
    line: &str,
    registry: &mut StreetRegistry,
    last_graph: &mut Option<Graph>,
    json: bool,
) -> Result<()> {
    match parse_command(line)? {
        StreetCommand::Add { name, points } => registry.add_street(Street::new(&name, points)?),
        StreetCommand::Modify { name, points } => {
            registry.modify_street(Street::new(&name, points)?)
        }
        StreetCommand::Remove { name } => registry.remove_street(&name),
        StreetCommand::Generate => {
            let streets = registry.streets();
            let graph = Graph::generate(&streets);
            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                println!("{}", graph);
            }
            *last_graph = Some(graph);
            Ok(())
        }
        StreetCommand::ShortestPath { from, to } => {
            let graph = last_graph
                .as_ref()
                .context("no graph generated yet; run gg first")?;
            let path = graph.shortest_path(from, to)?;
            println!(
                "{}",
                path.iter()
                    .map(|label| label.to_string())
                    .collect::<Vec<_>>()
                    .join("-")
            );
            Ok(())
        }
    }
}
