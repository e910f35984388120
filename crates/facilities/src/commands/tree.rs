//! Navigation tree handler.

use facilities_core::{SidebarNode, Snapshot};

use crate::error::CliError;
use crate::output::{self, OutputOpts};

/// Box-drawn outline, one line per node.
fn outline(roots: &[SidebarNode]) -> String {
    let mut lines = Vec::new();
    for root in roots {
        lines.push(format!("{} ({})", root.name, root.kind));
        draw_children(root, "", &mut lines);
    }
    lines.join("\n")
}

fn draw_children(node: &SidebarNode, prefix: &str, lines: &mut Vec<String>) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        lines.push(format!("{prefix}{branch}{} ({})", child.name, child.kind));
        draw_children(child, &format!("{prefix}{indent}"), lines);
    }
}

/// Two spaces per level, names only.
fn indented(roots: &[SidebarNode]) -> String {
    fn walk(node: &SidebarNode, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", "  ".repeat(depth), node.name));
        for child in node.children() {
            walk(child, depth + 1, lines);
        }
    }
    let mut lines = Vec::new();
    for root in roots {
        walk(root, 0, &mut lines);
    }
    lines.join("\n")
}

pub fn handle(snapshot: &Snapshot, out: &OutputOpts) -> Result<(), CliError> {
    let rendered = output::render_single(out.format, snapshot.sidebar(), outline, indented)?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use facilities_core::{HierarchyNode, build_sidebar_tree};
    use pretty_assertions::assert_eq;

    use super::*;

    fn roots() -> Vec<SidebarNode> {
        build_sidebar_tree(&[HierarchyNode::new("b1", "HQ")
            .with_floors(vec![
                HierarchyNode::new("f1", "Floor 1")
                    .with_rooms(vec![HierarchyNode::new("r1", "Kitchen")]),
                HierarchyNode::new("f2", "Floor 2"),
            ])])
    }

    #[test]
    fn outline_draws_branches() {
        assert_eq!(
            outline(&roots()),
            "HQ (building)\n\
             ├── Floor 1 (floor)\n\
             │   └── Kitchen (room)\n\
             └── Floor 2 (floor)"
        );
    }

    #[test]
    fn plain_indents_by_depth() {
        assert_eq!(indented(&roots()), "HQ\n  Floor 1\n    Kitchen\n  Floor 2");
    }
}
