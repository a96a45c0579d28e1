use anyhow::{Context, Result};

use crate::command::{Command, ConnectionForm, Controller, Outcome, parse_weight};
use crate::graph::Position;

/// Parse `X,Y` into a normalized position.
fn parse_position(raw: &str) -> Result<Position> {
    let (x, y) = raw
        .split_once(',')
        .with_context(|| format!("Invalid node '{raw}'. Expected X,Y"))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("Invalid x coordinate in '{raw}'"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("Invalid y coordinate in '{raw}'"))?;
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        anyhow::bail!("Node '{raw}' is outside the canvas. Coordinates must be in [0, 1].");
    }
    Ok(Position::new(x, y))
}

/// Parse `U-V:W` into the raw fields of a connection form.
fn parse_edge(raw: &str) -> Result<ConnectionForm> {
    let (pair, weight) = raw
        .rsplit_once(':')
        .with_context(|| format!("Invalid edge '{raw}'. Expected U-V:WEIGHT"))?;
    let (source, target) = pair
        .split_once('-')
        .with_context(|| format!("Invalid edge '{raw}'. Expected U-V:WEIGHT"))?;
    // Fail early on a bad weight so the message names the whole edge.
    parse_weight(weight).with_context(|| format!("Invalid edge '{raw}'"))?;
    Ok(ConnectionForm {
        source: source.to_string(),
        target: target.to_string(),
        weight: weight.to_string(),
    })
}

/// Build the graph from the arguments, run one search and return the result text.
pub fn solve(nodes: &[String], edges: &[String], from: &str, to: &str) -> Result<String> {
    let mut controller = Controller::default();

    for raw in nodes {
        controller.dispatch(Command::PlaceNode(parse_position(raw)?))?;
    }
    for raw in edges {
        let command = parse_edge(raw)?.add_edge_command()?;
        controller
            .dispatch(command)
            .with_context(|| format!("Could not add edge '{raw}'"))?;
    }

    let query = ConnectionForm {
        source: from.to_string(),
        target: to.to_string(),
        weight: String::new(),
    };
    match controller.dispatch(query.find_path_command()?)? {
        Outcome::PathFound(_) => Ok(controller.result_text()),
        other => anyhow::bail!("Unexpected outcome {other:?}"),
    }
}

pub fn run(nodes: &[String], edges: &[String], from: &str, to: &str) -> Result<()> {
    println!("{}", solve(nodes, edges, from, to)?);
    Ok(())
}
