use serde::Serialize;

use super::paper::{Paper, Position};

pub const MIN_CLUSTER_MEMBERS: usize = 3;
pub const CLUSTER_PREVIEW_MEMBERS: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub cluster: u32,
    /// Mean position over every member, not only the preview.
    pub centroid: Position,
    pub member_count: usize,
    pub preview: Vec<ClusterMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClusterMember {
    pub id: String,
    pub position: Position,
}

/// Groups papers by cluster id in order of first appearance. Clusters
/// with fewer than three members are dropped.
pub fn aggregate_clusters(papers: &[&Paper]) -> Vec<ClusterSummary> {
    let mut groups: Vec<(u32, Vec<&Paper>)> = Vec::new();
    for &paper in papers {
        match groups
            .iter()
            .position(|(cluster, _)| *cluster == paper.cluster)
        {
            Some(slot) => groups[slot].1.push(paper),
            None => groups.push((paper.cluster, vec![paper])),
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_CLUSTER_MEMBERS)
        .map(|(cluster, members)| ClusterSummary {
            cluster,
            centroid: centroid(&members),
            member_count: members.len(),
            preview: members
                .iter()
                .take(CLUSTER_PREVIEW_MEMBERS)
                .map(|paper| ClusterMember {
                    id: paper.id.clone(),
                    position: paper.position,
                })
                .collect(),
        })
        .collect()
}

fn centroid(members: &[&Paper]) -> Position {
    if members.is_empty() {
        return Position::ORIGIN;
    }

    let count = members.len() as f64;
    let (x, y, z) = members.iter().fold((0.0, 0.0, 0.0), |(x, y, z), paper| {
        (
            x + paper.position.x as f64,
            y + paper.position.y as f64,
            z + paper.position.z as f64,
        )
    });

    Position::new((x / count) as f32, (y / count) as f32, (z / count) as f32)
}
