//! Text rendering of a session for the terminal.

use strictly_river::{Bank, Edge, EntityId, Location, Role, SessionSnapshot, StateGraph};
use tracing::instrument;

fn names(snapshot: &SessionSnapshot, role: Role, location: Location) -> String {
    let ids: Vec<String> = snapshot
        .entities
        .iter()
        .filter(|e| e.role == role && e.location == location)
        .map(|e| e.id.to_string())
        .collect();
    if ids.is_empty() { "-".to_string() } else { ids.join(" ") }
}

fn boat(snapshot: &SessionSnapshot) -> String {
    let aboard: Vec<String> = snapshot.boarded.iter().map(EntityId::to_string).collect();
    format!("[{:^7}]", aboard.join(" "))
}

/// Draws both banks, the boat and a status line.
#[instrument(skip(snapshot))]
pub fn render_scene(snapshot: &SessionSnapshot) -> String {
    let water = "~~~~~~~~~~";
    let river = match snapshot.configuration.boat() {
        Bank::Left => format!("{}{}", boat(snapshot), water),
        Bank::Right => format!("{}{}", water, boat(snapshot)),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{:<14}{:^22}{:>14}\n",
        "left bank", "river", "right bank"
    ));
    for role in [Role::Missionary, Role::Cannibal] {
        let middle = match role {
            Role::Missionary => river.as_str(),
            Role::Cannibal => water,
        };
        out.push_str(&format!(
            "{:<14}{:^22}{:>14}\n",
            names(snapshot, role, Location::Bank(Bank::Left)),
            middle,
            names(snapshot, role, Location::Bank(Bank::Right)),
        ));
    }
    out.push_str(&snapshot.status_string());
    out.push('\n');
    out
}

/// Renders a snapshot as text or pretty JSON.
pub fn render_snapshot(snapshot: &SessionSnapshot, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(snapshot.to_json()? + "\n")
    } else {
        Ok(render_scene(snapshot))
    }
}

fn edge_line(edge: &Edge, fatal: bool) -> String {
    let marker = if fatal { " (lost)" } else { "" };
    format!("    {} -> {}{}\n", edge.load, edge.to, marker)
}

/// Lists every safe configuration with its outgoing transitions.
#[instrument(skip(graph))]
pub fn render_graph(graph: &StateGraph) -> String {
    let mut out = String::new();
    for config in graph.configurations() {
        out.push_str(&format!("{}\n", config));
        for edge in graph.edges_from(&config) {
            out.push_str(&edge_line(edge, false));
        }
        for edge in graph.fatal_edges_from(&config) {
            out.push_str(&edge_line(edge, true));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_river::{Load, Session};

    #[test]
    fn test_scene_lists_travellers_by_bank() {
        let session = Session::replay(StateGraph::shared(), &[Load::TwoCannibals]).unwrap();
        let scene = render_scene(&SessionSnapshot::from(&session));
        assert!(scene.contains("m0 m1 m2"));
        assert!(scene.contains("c0 c1"));
        assert!(scene.ends_with("Move 1. Boat on the right bank with 0 aboard.\n"));
    }

    #[test]
    fn test_json_snapshot_parses() {
        let session = Session::new(StateGraph::shared());
        let text = render_snapshot(&SessionSnapshot::from(&session), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["move_count"], 0);
        assert_eq!(value["state"], "Playing");
    }

    #[test]
    fn test_graph_marks_fatal_edges() {
        let text = render_graph(StateGraph::shared());
        assert!(text.starts_with("(0M 0C | 3M 3C, boat left)\n"));
        assert!(text.contains("(lost)"));
    }
}
