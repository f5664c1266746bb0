use rand::Rng;
use serde::Serialize;

use super::paper::{Paper, Position};

/// Upper bound on synthesized outgoing edges per paper.
pub const MAX_EDGES_PER_PAPER: u32 = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_id: String,
    pub from: Position,
    pub to_id: String,
    pub to: Position,
    pub strength: f32,
}

impl Connection {
    pub fn touches(&self, id: &str) -> bool {
        self.from_id == id || self.to_id == id
    }
}

/// Samples mock citation edges among the filtered papers.
///
/// Each paper gets `min(connections, 5)` trials. A trial picks a target
/// uniformly from the whole input and keeps the edge only when the target
/// is a different paper published no later than the source. Rejected
/// trials are not retried.
pub fn synthesize_connections<R: Rng + ?Sized>(papers: &[&Paper], rng: &mut R) -> Vec<Connection> {
    let mut connections = Vec::new();
    if papers.is_empty() {
        return connections;
    }

    for source in papers {
        let trials = source.connections.min(MAX_EDGES_PER_PAPER);
        for _ in 0..trials {
            let target = papers[rng.gen_range(0..papers.len())];
            if target.id == source.id || target.year > source.year {
                continue;
            }

            connections.push(Connection {
                from_id: source.id.clone(),
                from: source.position,
                to_id: target.id.clone(),
                to: target.position,
                strength: rng.r#gen::<f32>(),
            });
        }
    }

    connections
}
