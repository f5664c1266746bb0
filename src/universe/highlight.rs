use std::collections::HashSet;

use super::connections::Connection;

/// Highlight state derived from the current selection and edge set.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
    selected: Option<String>,
    related: Vec<String>,
    related_set: HashSet<String>,
    touching: usize,
}

impl HighlightState {
    pub fn new(selected: Option<&str>, connections: &[Connection]) -> Self {
        let Some(selected) = selected else {
            return Self::default();
        };

        let mut related = Vec::new();
        let mut related_set = HashSet::new();
        let mut touching = 0usize;

        for connection in connections {
            let other = if connection.from_id == selected {
                &connection.to_id
            } else if connection.to_id == selected {
                &connection.from_id
            } else {
                continue;
            };

            touching += 1;
            if related_set.insert(other.clone()) {
                related.push(other.clone());
            }
        }

        Self {
            selected: Some(selected.to_owned()),
            related,
            related_set,
            touching,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// True when a connection joins `id` and the selection in either
    /// direction.
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.related_set.contains(id)
    }

    pub fn is_connection_visible(&self, connection: &Connection) -> bool {
        match &self.selected {
            None => true,
            Some(selected) => connection.touches(selected),
        }
    }

    /// Related papers in first-seen order.
    pub fn related_ids(&self) -> &[String] {
        &self.related
    }

    pub fn touching_count(&self) -> usize {
        self.touching
    }
}

#[cfg(test)]
mod tests {
    use super::super::paper::Position;
    use super::*;

    fn edge(from: &str, to: &str) -> Connection {
        Connection {
            from_id: from.to_owned(),
            from: Position::ORIGIN,
            to_id: to.to_owned(),
            to: Position::ORIGIN,
            strength: 0.25,
        }
    }

    fn sample() -> Vec<Connection> {
        vec![
            edge("paper-1", "paper-2"),
            edge("paper-3", "paper-1"),
            edge("paper-2", "paper-4"),
            edge("paper-1", "paper-2"),
        ]
    }

    #[test]
    fn nothing_highlighted_without_selection() {
        let connections = sample();
        let state = HighlightState::new(None, &connections);
        assert!(state.selected().is_none());
        assert!(!state.is_highlighted("paper-2"));
        assert!(
            connections
                .iter()
                .all(|connection| state.is_connection_visible(connection))
        );
        assert_eq!(state.touching_count(), 0);
    }

    #[test]
    fn highlights_both_directions() {
        let connections = sample();
        let state = HighlightState::new(Some("paper-1"), &connections);
        assert!(state.is_selected("paper-1"));
        assert!(state.is_highlighted("paper-2"));
        assert!(state.is_highlighted("paper-3"));
        assert!(!state.is_highlighted("paper-4"));
        assert_eq!(state.related_ids(), ["paper-2", "paper-3"]);
        assert_eq!(state.touching_count(), 3);
    }

    #[test]
    fn only_touching_connections_are_visible() {
        let connections = sample();
        let state = HighlightState::new(Some("paper-4"), &connections);
        let visible = connections
            .iter()
            .filter(|connection| state.is_connection_visible(connection))
            .count();
        assert_eq!(visible, 1);
        assert_eq!(state.related_ids(), ["paper-2"]);
    }

    #[test]
    fn isolated_selection_has_no_highlights() {
        let connections = sample();
        let state = HighlightState::new(Some("paper-99"), &connections);
        assert!(state.related_ids().is_empty());
        assert!(
            connections
                .iter()
                .all(|connection| !state.is_connection_visible(connection))
        );
    }
}
