//! Render plan - what an external plotter needs to draw the graph
//!
//! Each element is placed by how many elements sit below and above it:
//! `x = (ancestors - descendants) / N` runs from worst (left) to best (right),
//! `y = (ancestors + descendants) / N` grows with how constrained it is.
//! Elements landing on the same spot are merged into one weighted point.

use crate::ancestry::AncestryIndex;
use crate::graph::{NodeIdx, PreferenceGraph};
use petgraph::algo::astar;
use prefgraph_domain::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placement of a single element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePlacement {
    /// The element
    pub element: ElementId,
    /// Number of elements known to be worse
    pub ancestors: usize,
    /// Number of elements known to be better
    pub descendants: usize,
    /// Horizontal position in `[-1, 1]`
    pub x: f64,
    /// Vertical position in `[0, 1]`
    pub y: f64,
}

/// A drawn point, possibly standing for several elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Horizontal position in `[-1, 1]`
    pub x: f64,
    /// Vertical position in `[0, 1]`
    pub y: f64,
    /// Number of elements at this position
    pub size: usize,
    /// Colour as `#RRGGBB`, red for worse, green for better
    pub color: String,
}

/// Everything needed to draw the current graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// One entry per element, in order of first appearance
    pub nodes: Vec<NodePlacement>,
    /// Distinct positions, in order of first appearance
    pub points: Vec<PlotPoint>,
    /// Shortest chain of judgments from the worst-placed to the best-placed element
    pub spine: Vec<ElementId>,
}

impl PreferenceGraph {
    /// Compute a render plan for the current graph
    pub fn render_plan(&self) -> RenderPlan {
        let total = self.node_count();
        if total == 0 {
            return RenderPlan::default();
        }

        let index = self.ancestry();
        let mut plan = RenderPlan::default();
        let mut point_at: HashMap<(i64, i64), usize> = HashMap::new();
        let mut lowest: Option<(NodeIdx, i64)> = None;
        let mut highest: Option<(NodeIdx, i64)> = None;

        for node in 0..total {
            let (anc, dec) = counts(index, node);
            let raw_x = anc as i64 - dec as i64;
            let raw_y = (anc + dec) as i64;
            let x = raw_x as f64 / total as f64;
            let y = raw_y as f64 / total as f64;

            if lowest.map_or(true, |(_, lx)| raw_x < lx) {
                lowest = Some((node, raw_x));
            }
            if highest.map_or(true, |(_, hx)| raw_x > hx) {
                highest = Some((node, raw_x));
            }

            plan.nodes.push(NodePlacement {
                element: self.id(node).clone(),
                ancestors: anc,
                descendants: dec,
                x,
                y,
            });

            match point_at.get(&(raw_x, raw_y)) {
                Some(&p) => plan.points[p].size += 1,
                None => {
                    point_at.insert((raw_x, raw_y), plan.points.len());
                    plan.points.push(PlotPoint {
                        x,
                        y,
                        size: 1,
                        color: color(raw_x, raw_y, total as i64),
                    });
                }
            }
        }

        if let (Some((start, _)), Some((goal, _))) = (lowest, highest) {
            if let Some((_, path)) = astar(self.dag(), start, |n| n == goal, |_| 1usize, |_| 0) {
                plan.spine = path.into_iter().map(|n| self.id(n).clone()).collect();
            }
        }

        plan
    }
}

fn counts(index: &AncestryIndex, node: NodeIdx) -> (usize, usize) {
    (index.ancestors(node).len(), index.descendants(node).len())
}

/// Red fades into green from worst to best, blue fades with constraint
fn color(x: i64, y: i64, total: i64) -> String {
    let channel = |numerator: f64| -> u8 { (256.0 * numerator / total as f64).clamp(0.0, 255.0) as u8 };
    let r = channel((total - x) as f64 / 2.0);
    let g = channel((total + x) as f64 / 2.0);
    let b = channel((total - y) as f64);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
