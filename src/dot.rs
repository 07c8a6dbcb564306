//! Diagram to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! - **Terminal nodes** (0 and 1) are rendered as squares at the bottom (sink rank)
//! - **Variable nodes** are circles labelled with the ring's variable name,
//!   grouped by variable
//! - **Edges**:
//!   - Solid lines are `mul` edges (the variable is in the monomial)
//!   - Dashed lines are `add` edges (the variable is not)
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use polyzdd::ring::Ring;
//! use polyzdd::zdd::Zdd;
//!
//! let ring = Rc::new(Ring::with_size(3));
//! let f = Zdd::from_monomials(&ring, [&ring.monomial([0, 1]), &ring.var(2)]);
//! let dot = f.to_dot().unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::zdd::Zdd;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for variable nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for terminal nodes (default: "square")
    pub terminal_shape: &'static str,
    /// Style for mul edges (default: "solid")
    pub mul_edge_style: &'static str,
    /// Style for add edges (default: "dashed")
    pub add_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            terminal_shape: "square",
            mul_edge_style: "solid",
            add_edge_style: "dashed",
        }
    }
}

impl Zdd {
    /// Converts the diagram to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the diagram to DOT format.
    ///
    /// Only nodes reachable from the root are emitted. Node identifiers are the
    /// table handles, so the output of two diagrams sharing a table lines up.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let nodes = self.nodes();

        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}, fixedsize=true];", config.node_shape)?;

        // Terminal nodes
        writeln!(dot, "{{ rank=sink")?;
        for node in nodes.iter().filter(|n| n.is_zero || n.is_one) {
            let label = if node.is_one { 1 } else { 0 };
            writeln!(dot, "{} [shape={}, label=\"{}\"];", node.id.raw(), config.terminal_shape, label)?;
        }
        writeln!(dot, "}}")?;

        // Group internal nodes by variable for proper ranking
        let mut levels = BTreeMap::<usize, Vec<u32>>::new();
        for node in &nodes {
            if let Some(var) = node.var {
                levels.entry(var.index()).or_default().push(node.id.raw());
            }
        }
        for (&var, ids) in &levels {
            writeln!(dot, "{{ rank=same")?;
            for id in ids {
                writeln!(dot, "{} [label=\"{}\"];", id, self.ring().name(var))?;
            }
            writeln!(dot, "}}")?;
        }

        for node in &nodes {
            if let (Some(mul), Some(add)) = (node.mul, node.add) {
                writeln!(dot, "{} -- {} [style={}];", node.id.raw(), mul.raw(), config.mul_edge_style)?;
                writeln!(dot, "{} -- {} [style={}];", node.id.raw(), add.raw(), config.add_edge_style)?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::ring::Ring;

    #[test]
    fn test_to_dot_basic() {
        let ring = Rc::new(Ring::new(["x", "y", "z"]).unwrap());
        let f = Zdd::from_monomials(&ring, [&ring.monomial([0, 2]), &ring.var(1)]);

        let dot = f.to_dot().unwrap();
        assert!(dot.starts_with("graph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("label=\"x\""));
        assert!(dot.contains("label=\"y\""));
        assert!(dot.contains("label=\"z\""));
        assert_eq!(dot.matches("style=solid").count(), 3);
        assert_eq!(dot.matches("style=dashed").count(), 3);
    }

    #[test]
    fn test_to_dot_constants() {
        let ring = Rc::new(Ring::with_size(2));
        let dot = Zdd::zero(&ring).to_dot().unwrap();
        assert!(dot.contains("0 [shape=square, label=\"0\"];"));
        assert!(!dot.contains("label=\"1\""));

        let dot = Zdd::one(&ring).to_dot().unwrap();
        assert!(dot.contains("1 [shape=square, label=\"1\"];"));
    }

    #[test]
    fn test_to_dot_with_config() {
        let ring = Rc::new(Ring::with_size(2));
        let config = DotConfig {
            add_edge_style: "dotted",
            ..DotConfig::default()
        };
        let dot = Zdd::from_var(&ring, 0).to_dot_with_config(&config).unwrap();
        assert!(dot.contains("style=dotted"));
        assert!(!dot.contains("style=dashed"));
    }
}
