//! Collection tree assembly and rendering.
//!
//! The Zotero API returns collections as a flat list with parent pointers;
//! this module turns that snapshot into a rooted forest. The tree is a
//! transient view, rebuilt on every query.

use crate::models::{CollectionNode, CollectionRecord};
use std::collections::HashMap;
use tracing::warn;

/// Build a forest from a flat collection snapshot.
///
/// A collection with no parent, or whose parent key is absent from the
/// snapshot, becomes a root. Roots and sibling lists keep input order.
/// Collections a malformed snapshot leaves unreachable (a parent cycle) are
/// promoted to roots rather than looping; every input record appears in the
/// output exactly once.
pub fn build_tree(records: &[CollectionRecord]) -> Vec<CollectionNode> {
    let mut nodes: HashMap<&str, CollectionNode> = records
        .iter()
        .map(|r| (r.key.as_str(), CollectionNode::from_record(r)))
        .collect();

    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut root_keys: Vec<&str> = Vec::new();

    for record in records {
        match record.data.parent_collection.as_deref() {
            Some(parent) if parent != record.key && nodes.contains_key(parent) => {
                children_of.entry(parent).or_default().push(&record.key);
            }
            _ => root_keys.push(&record.key),
        }
    }

    let mut roots = Vec::new();
    for key in root_keys {
        if let Some(node) = assemble(key, &mut nodes, &children_of) {
            roots.push(node);
        }
    }

    // Anything still unassembled sits on a parent cycle; break it by
    // promoting the first member (in input order) to a root.
    for record in records {
        if nodes.contains_key(record.key.as_str()) {
            warn!(
                "collection '{}' [{}] is part of a parent cycle; promoting to root",
                record.data.name, record.key
            );
            if let Some(node) = assemble(&record.key, &mut nodes, &children_of) {
                roots.push(node);
            }
        }
    }

    roots
}

/// Move a node out of the lookup and attach its children. Removal doubles as
/// the visited set: a key is assembled at most once.
fn assemble(
    key: &str,
    nodes: &mut HashMap<&str, CollectionNode>,
    children_of: &HashMap<&str, Vec<&str>>,
) -> Option<CollectionNode> {
    let mut node = nodes.remove(key)?;
    if let Some(child_keys) = children_of.get(key) {
        for child_key in child_keys {
            if let Some(child) = assemble(child_key, nodes, children_of) {
                node.children.push(child);
            }
        }
    }
    Some(node)
}

/// Render the forest for the console, siblings sorted by name.
pub fn render_text(roots: &[CollectionNode]) -> String {
    let mut out = String::new();
    render_text_level(roots, 0, &mut out);
    out
}

fn render_text_level(nodes: &[CollectionNode], indent: usize, out: &mut String) {
    let mut sorted: Vec<&CollectionNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for node in sorted {
        let branch = if indent > 0 { "├── " } else { "" };
        out.push_str(&format!(
            "{}{}{} ({} items) [{}]\n",
            "  ".repeat(indent),
            branch,
            node.name,
            node.item_count,
            node.key
        ));
        render_text_level(&node.children, indent + 1, out);
    }
}

/// Render the forest as a Markdown nested bullet list, siblings sorted by name.
pub fn render_markdown(roots: &[CollectionNode]) -> String {
    let mut lines = Vec::new();
    markdown_level(roots, 0, &mut lines);
    format!("# Zotero Collections\n\n{}", lines.join("\n"))
}

fn markdown_level(nodes: &[CollectionNode], level: usize, lines: &mut Vec<String>) {
    let mut sorted: Vec<&CollectionNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for node in sorted {
        lines.push(format!(
            "{}- **{}** ({} items)",
            "  ".repeat(level),
            node.name,
            node.item_count
        ));
        markdown_level(&node.children, level + 1, lines);
    }
}

/// Render the forest as pretty-printed JSON, preserving builder insertion
/// order (unlike the sorted text and Markdown renderings).
pub fn render_json(roots: &[CollectionNode]) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(roots)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CollectionData, CollectionMeta};

    fn record(key: &str, name: &str, parent: Option<&str>) -> CollectionRecord {
        CollectionRecord {
            key: key.to_string(),
            version: 0,
            data: CollectionData {
                name: name.to_string(),
                parent_collection: parent.map(|p| p.to_string()),
            },
            meta: CollectionMeta { num_items: 0 },
        }
    }

    fn count_nodes(nodes: &[CollectionNode]) -> usize {
        nodes
            .iter()
            .map(|n| 1 + count_nodes(&n.children))
            .sum()
    }

    #[test]
    fn test_simple_forest() {
        let records = vec![
            record("A", "Alpha", None),
            record("B", "Beta", Some("A")),
            record("C", "Gamma", None),
        ];
        let roots = build_tree(&records);

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].key, "A");
        assert_eq!(roots[1].key, "C");
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].key, "B");
        assert!(roots[1].children.is_empty());
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let records = vec![record("B", "Orphan", Some("GONE"))];
        let roots = build_tree(&records);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].key, "B");
    }

    #[test]
    fn test_every_node_appears_exactly_once() {
        let records = vec![
            record("A", "a", None),
            record("B", "b", Some("A")),
            record("C", "c", Some("A")),
            record("D", "d", Some("C")),
            record("E", "e", None),
        ];
        let roots = build_tree(&records);
        assert_eq!(count_nodes(&roots), records.len());
    }

    #[test]
    fn test_cycle_is_broken_not_looped() {
        let records = vec![
            record("A", "a", Some("B")),
            record("B", "b", Some("A")),
            record("X", "x", Some("A")),
        ];
        let roots = build_tree(&records);
        // All three nodes survive; the first cycle member is promoted.
        assert_eq!(count_nodes(&roots), 3);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].key, "A");
    }

    #[test]
    fn test_self_parent_is_root() {
        let records = vec![record("A", "a", Some("A"))];
        let roots = build_tree(&records);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_text_rendering_sorted() {
        let records = vec![
            record("Z", "Zoology", None),
            record("A", "Astronomy", None),
            record("Z1", "Birds", Some("Z")),
        ];
        let text = render_text(&build_tree(&records));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Astronomy (0 items) [A]");
        assert_eq!(lines[1], "Zoology (0 items) [Z]");
        assert_eq!(lines[2], "  ├── Birds (0 items) [Z1]");
    }

    #[test]
    fn test_markdown_rendering() {
        let records = vec![
            record("A", "Papers", None),
            record("B", "Drafts", Some("A")),
        ];
        let md = render_markdown(&build_tree(&records));
        assert!(md.starts_with("# Zotero Collections\n\n"));
        assert!(md.contains("- **Papers** (0 items)\n  - **Drafts** (0 items)"));
    }

    #[test]
    fn test_json_preserves_insertion_order() {
        let records = vec![
            record("Z", "Zoology", None),
            record("A", "Astronomy", None),
        ];
        let json = render_json(&build_tree(&records)).unwrap();
        let zoology = json.find("Zoology").unwrap();
        let astronomy = json.find("Astronomy").unwrap();
        assert!(zoology < astronomy);
    }
}
