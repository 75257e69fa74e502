// ABOUTME: Row/column grid tree and its resolution algorithm.
// ABOUTME: Distributes a parent's space to children by weight, then renders each leaf.

use std::fmt;

use grid_core::WeightPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, LayoutError, NodePath};
use crate::geometry::{Margins, Panel, Rect};

/// Number of grid units a parent's extent is divided into
pub const GRID_UNITS: f64 = 12.0;

const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// The document a design is drawn into
pub trait Surface {
    type Error: std::error::Error + Send + Sync + 'static;
}

/// A drawable leaf: chart, text box, table, image
pub trait Renderable<S: Surface + ?Sized> {
    fn panel(&self) -> &Panel;

    fn panel_mut(&mut self) -> &mut Panel;

    /// Called by the parent node right before rendering
    fn set_frame(&mut self, frame: Rect) {
        self.panel_mut().set_frame(frame);
    }

    /// Short name for logs
    fn kind(&self) -> &'static str;

    /// Reject leaf data that can never render. Runs over every leaf before
    /// anything is drawn.
    fn check(&self) -> Result<(), S::Error> {
        Ok(())
    }

    fn render_into(&self, surface: &mut S) -> Result<(), S::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Row: children laid out left to right
    Horizontal,
    /// Column: children laid out top to bottom
    Vertical,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Row",
            Orientation::Vertical => "Column",
        }
    }

    pub fn flipped(&self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Leading edge along the axis children are stacked on
    fn start(&self, rect: Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.left,
            Orientation::Vertical => rect.top,
        }
    }

    fn extent(&self, rect: Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Frame of a child starting at `offset` and taking `weight` twelfths of the parent
    fn slot(&self, parent: Rect, offset: f64, weight: f64) -> Rect {
        match self {
            Orientation::Horizontal => Rect {
                left: offset,
                top: parent.top,
                width: weight / GRID_UNITS * parent.width,
                height: parent.height,
            },
            Orientation::Vertical => Rect {
                left: parent.left,
                top: offset,
                width: parent.width,
                height: weight / GRID_UNITS * parent.height,
            },
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub enum NodeContent<S: Surface + ?Sized> {
    Container(Vec<GridNode<S>>),
    Leaf(Box<dyn Renderable<S>>),
}

impl<S: Surface + ?Sized> fmt::Debug for NodeContent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeContent::Container(children) => f.debug_tuple("Container").field(children).finish(),
            NodeContent::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("kind", &leaf.kind())
                .field("panel", leaf.panel())
                .finish(),
        }
    }
}

/// A row or column in a slide design
pub struct GridNode<S: Surface + ?Sized> {
    orientation: Orientation,
    weight: f64,
    panel: Panel,
    content: NodeContent<S>,
}

impl<S: Surface + ?Sized> fmt::Debug for GridNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridNode")
            .field("orientation", &self.orientation)
            .field("weight", &self.weight)
            .field("panel", &self.panel)
            .field("content", &self.content)
            .finish()
    }
}

impl<S: Surface + ?Sized> GridNode<S> {
    pub fn new(orientation: Orientation, weight: f64, content: NodeContent<S>) -> Self {
        Self {
            orientation,
            weight,
            panel: Panel::new(),
            content,
        }
    }

    /// Row holding columns
    pub fn row(weight: f64, children: Vec<GridNode<S>>) -> Self {
        Self::new(Orientation::Horizontal, weight, NodeContent::Container(children))
    }

    /// Column holding rows
    pub fn column(weight: f64, children: Vec<GridNode<S>>) -> Self {
        Self::new(Orientation::Vertical, weight, NodeContent::Container(children))
    }

    /// Row wrapping a single leaf
    pub fn row_leaf(weight: f64, leaf: impl Renderable<S> + 'static) -> Self {
        Self::new(Orientation::Horizontal, weight, NodeContent::Leaf(Box::new(leaf)))
    }

    /// Column wrapping a single leaf
    pub fn column_leaf(weight: f64, leaf: impl Renderable<S> + 'static) -> Self {
        Self::new(Orientation::Vertical, weight, NodeContent::Leaf(Box::new(leaf)))
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.panel = self.panel.with_margins(margins);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// True when this node wraps a leaf instead of further rows/columns
    pub fn is_terminal(&self) -> bool {
        matches!(self.content, NodeContent::Leaf(_))
    }

    pub fn children(&self) -> &[GridNode<S>] {
        match &self.content {
            NodeContent::Container(children) => children,
            NodeContent::Leaf(_) => &[],
        }
    }

    pub fn leaf(&self) -> Option<&dyn Renderable<S>> {
        match &self.content {
            NodeContent::Leaf(leaf) => Some(leaf.as_ref()),
            NodeContent::Container(_) => None,
        }
    }

    /// Check the whole tree's shape before anything is positioned
    pub fn validate(&self, policy: WeightPolicy) -> Result<(), LayoutError> {
        let mut path = Vec::new();
        self.validate_at(&mut path, policy)
    }

    fn validate_at(&self, path: &mut Vec<usize>, policy: WeightPolicy) -> Result<(), LayoutError> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(LayoutError::InvalidWeight {
                path: NodePath(path.clone()),
                orientation: self.orientation,
                weight: self.weight,
            });
        }

        let children = match &self.content {
            NodeContent::Leaf(_) => return Ok(()),
            NodeContent::Container(children) => children,
        };

        if children.is_empty() {
            return Err(LayoutError::EmptyContainer {
                path: NodePath(path.clone()),
                orientation: self.orientation,
            });
        }

        for (index, child) in children.iter().enumerate() {
            path.push(index);
            if child.orientation == self.orientation {
                return Err(LayoutError::OrientationMismatch {
                    path: NodePath(path.clone()),
                    orientation: child.orientation,
                });
            }
            child.validate_at(path, policy)?;
            path.pop();
        }

        let sum: f64 = children.iter().map(|c| c.weight).sum();
        if (sum - GRID_UNITS).abs() > WEIGHT_SUM_EPSILON {
            let mismatch = LayoutError::WeightSumMismatch {
                path: NodePath(path.clone()),
                orientation: self.orientation,
                sum,
            };
            match policy {
                WeightPolicy::Strict => return Err(mismatch),
                WeightPolicy::Warn => tracing::warn!("{}", mismatch),
                WeightPolicy::Permissive => {}
            }
        }

        Ok(())
    }

    /// Lay the design out inside `bounds` and render every leaf into `surface`.
    ///
    /// The tree is validated first, so a malformed design fails before any
    /// leaf is drawn. Building again re-renders every leaf.
    pub fn build(&mut self, bounds: Rect, surface: &mut S) -> Result<(), BuildError<S::Error>> {
        self.build_with_policy(bounds, surface, WeightPolicy::default())
    }

    pub fn build_with_policy(
        &mut self,
        bounds: Rect,
        surface: &mut S,
        policy: WeightPolicy,
    ) -> Result<(), BuildError<S::Error>> {
        self.validate(policy)?;
        self.check_leaves().map_err(BuildError::Render)?;
        self.place(bounds, &mut |leaf: &mut dyn Renderable<S>| {
            tracing::debug!("Rendering {} at {:?}", leaf.kind(), leaf.panel().frame().ok());
            leaf.render_into(surface)
        })
        .map_err(BuildError::Render)
    }

    /// Compute geometry for every node and leaf without rendering
    pub fn resolve(&mut self, bounds: Rect, policy: WeightPolicy) -> Result<(), LayoutError> {
        self.validate(policy)?;
        self.place(bounds, &mut |_: &mut dyn Renderable<S>| Ok::<(), LayoutError>(()))
    }

    /// Run every leaf's own data check, in render order
    pub fn check_leaves(&self) -> Result<(), S::Error> {
        match &self.content {
            NodeContent::Leaf(leaf) => leaf.check(),
            NodeContent::Container(children) => {
                children.iter().try_for_each(|child| child.check_leaves())
            }
        }
    }

    /// Resolved leaf frames in render order
    pub fn leaf_frames(&self) -> Vec<Rect> {
        let mut frames = Vec::new();
        self.collect_leaf_frames(&mut frames);
        frames
    }

    fn collect_leaf_frames(&self, out: &mut Vec<Rect>) {
        match &self.content {
            NodeContent::Leaf(leaf) => {
                if let Ok(frame) = leaf.panel().frame() {
                    out.push(frame);
                }
            }
            NodeContent::Container(children) => {
                for child in children {
                    child.collect_leaf_frames(out);
                }
            }
        }
    }

    fn place<E, F>(&mut self, frame: Rect, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut dyn Renderable<S>) -> Result<(), E>,
    {
        self.panel.set_frame(frame);

        match &mut self.content {
            NodeContent::Leaf(leaf) => {
                leaf.set_frame(frame);
                visit(leaf.as_mut())
            }
            NodeContent::Container(children) => {
                let axis = self.orientation;
                let mut tracker = axis.start(frame);
                for child in children.iter_mut() {
                    let child_frame = axis.slot(frame, tracker, child.weight);
                    tracker += axis.extent(child_frame);
                    child.place(child_frame, visit)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("surface rejected {0}")]
    struct Rejected(String);

    /// Records every leaf it is asked to draw
    #[derive(Default)]
    struct Recorder {
        drawn: Vec<(String, Rect)>,
        reject: Option<String>,
    }

    impl Surface for Recorder {
        type Error = Rejected;
    }

    struct Label {
        name: String,
        panel: Panel,
        malformed: bool,
    }

    fn label(name: &str) -> Label {
        Label {
            name: name.to_string(),
            panel: Panel::new(),
            malformed: false,
        }
    }

    impl Renderable<Recorder> for Label {
        fn panel(&self) -> &Panel {
            &self.panel
        }

        fn panel_mut(&mut self) -> &mut Panel {
            &mut self.panel
        }

        fn kind(&self) -> &'static str {
            "label"
        }

        fn check(&self) -> Result<(), Rejected> {
            if self.malformed {
                return Err(Rejected(format!("malformed {}", self.name)));
            }
            Ok(())
        }

        fn render_into(&self, surface: &mut Recorder) -> Result<(), Rejected> {
            if surface.reject.as_deref() == Some(self.name.as_str()) {
                return Err(Rejected(self.name.clone()));
            }
            let frame = self.panel.frame().map_err(|e| Rejected(e.to_string()))?;
            surface.drawn.push((self.name.clone(), frame));
            Ok(())
        }
    }

    type Node = GridNode<Recorder>;

    fn assert_rect(actual: Rect, expected: Rect) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.left, expected.left)
                && close(actual.top, expected.top)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn drawn_names(surface: &Recorder) -> Vec<&str> {
        surface.drawn.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn two_equal_columns_split_a_row() {
        let mut design = Node::row(
            12.0,
            vec![Node::column_leaf(6.0, label("a")), Node::column_leaf(6.0, label("b"))],
        );
        let mut surface = Recorder::default();
        design.build(Rect::new(0.0, 0.0, 10.0, 5.0), &mut surface).unwrap();

        assert_eq!(drawn_names(&surface), vec!["a", "b"]);
        assert_rect(surface.drawn[0].1, Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_rect(surface.drawn[1].1, Rect::new(5.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn nested_rows_inside_a_column() {
        let mut design = Node::row(
            12.0,
            vec![
                Node::column(
                    4.0,
                    vec![Node::row_leaf(6.0, label("a")), Node::row_leaf(6.0, label("b"))],
                ),
                Node::column_leaf(8.0, label("c")),
            ],
        );
        let mut surface = Recorder::default();
        design.build(Rect::new(0.0, 0.0, 12.0, 6.0), &mut surface).unwrap();

        let first_column = design.children()[0].panel().frame().unwrap();
        assert_rect(first_column, Rect::new(0.0, 0.0, 4.0, 6.0));

        assert_eq!(drawn_names(&surface), vec!["a", "b", "c"]);
        assert_rect(surface.drawn[0].1, Rect::new(0.0, 0.0, 4.0, 3.0));
        assert_rect(surface.drawn[1].1, Rect::new(0.0, 3.0, 4.0, 3.0));
        assert_rect(surface.drawn[2].1, Rect::new(4.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn overweight_row_overflows_when_permitted() {
        let mut design = Node::row(
            12.0,
            vec![Node::column_leaf(6.0, label("a")), Node::column_leaf(8.0, label("b"))],
        );
        let mut surface = Recorder::default();
        design
            .build_with_policy(Rect::new(0.0, 0.0, 10.0, 5.0), &mut surface, WeightPolicy::Permissive)
            .unwrap();

        let a = surface.drawn[0].1;
        let b = surface.drawn[1].1;
        assert!((a.width - 5.0).abs() < 1e-9);
        assert!((b.width - 6.667).abs() < 1e-3);
        assert!((a.width + b.width - 11.667).abs() < 1e-3);
        assert!((b.right() - 11.667).abs() < 1e-3);
    }

    #[test]
    fn overweight_row_still_builds_under_warn_policy() {
        let mut design = Node::row(
            12.0,
            vec![Node::column_leaf(6.0, label("a")), Node::column_leaf(8.0, label("b"))],
        );
        let mut surface = Recorder::default();
        design.build(Rect::new(0.0, 0.0, 10.0, 5.0), &mut surface).unwrap();
        assert_eq!(surface.drawn.len(), 2);
    }

    #[test]
    fn strict_policy_rejects_before_rendering() {
        let mut design = Node::row(
            12.0,
            vec![
                Node::column_leaf(6.0, label("a")),
                Node::column(
                    6.0,
                    vec![Node::row_leaf(6.0, label("b")), Node::row_leaf(4.0, label("c"))],
                ),
            ],
        );
        let mut surface = Recorder::default();
        let err = design
            .build_with_policy(Rect::new(0.0, 0.0, 10.0, 5.0), &mut surface, WeightPolicy::Strict)
            .unwrap_err();

        match err {
            BuildError::Layout(LayoutError::WeightSumMismatch { path, orientation, sum }) => {
                assert_eq!(path, NodePath(vec![1]));
                assert_eq!(orientation, Orientation::Vertical);
                assert_eq!(sum, 10.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(surface.drawn.is_empty());
        assert!(!design.children()[0].panel().is_resolved());
    }

    #[test]
    fn row_partition_is_complete_and_contiguous() {
        let weights = [3.0, 2.0, 5.0, 2.0];
        let children = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Node::column_leaf(*w, label(&i.to_string())))
            .collect();
        let mut design = Node::row(12.0, children);
        let bounds = Rect::new(0.25, 1.5, 9.5, 5.0);
        design.resolve(bounds, WeightPolicy::Strict).unwrap();

        let frames = design.leaf_frames();
        let mut expected_left = bounds.left;
        for frame in &frames {
            assert!((frame.left - expected_left).abs() < 1e-9);
            assert_eq!(frame.top, bounds.top);
            assert_eq!(frame.height, bounds.height);
            expected_left += frame.width;
        }
        let total: f64 = frames.iter().map(|f| f.width).sum();
        assert!((total - bounds.width).abs() < 1e-9);
    }

    #[test]
    fn column_children_inherit_left_and_width() {
        let mut design = Node::column(
            12.0,
            vec![
                Node::row_leaf(3.0, label("a")),
                Node::row_leaf(9.0, label("b")),
            ],
        );
        let bounds = Rect::new(2.0, 1.0, 4.0, 8.0);
        design.resolve(bounds, WeightPolicy::Strict).unwrap();

        let frames = design.leaf_frames();
        assert_rect(frames[0], Rect::new(2.0, 1.0, 4.0, 2.0));
        assert_rect(frames[1], Rect::new(2.0, 3.0, 4.0, 6.0));
        assert!((frames[1].bottom() - bounds.bottom()).abs() < 1e-9);
    }

    #[test]
    fn terminal_node_matches_wrapped_path() {
        let bounds = Rect::new(0.5, 0.5, 7.0, 3.0);

        let mut direct = Node::row_leaf(12.0, label("x"));
        direct.resolve(bounds, WeightPolicy::Strict).unwrap();

        let mut wrapped = Node::row(12.0, vec![Node::column_leaf(12.0, label("x"))]);
        wrapped.resolve(bounds, WeightPolicy::Strict).unwrap();

        assert!(direct.is_terminal());
        assert!(!wrapped.is_terminal());
        assert_eq!(direct.leaf_frames(), wrapped.leaf_frames());
        assert_eq!(direct.leaf_frames(), vec![bounds]);
    }

    #[test]
    fn leaves_render_in_declaration_order() {
        let mut design = Node::row(
            12.0,
            vec![
                Node::column(
                    6.0,
                    vec![
                        Node::row(
                            4.0,
                            vec![
                                Node::column_leaf(4.0, label("a")),
                                Node::column_leaf(4.0, label("b")),
                                Node::column_leaf(4.0, label("c")),
                            ],
                        ),
                        Node::row_leaf(4.0, label("d")),
                        Node::row_leaf(4.0, label("e")),
                    ],
                ),
                Node::column_leaf(3.0, label("f")),
                Node::column(
                    3.0,
                    vec![Node::row_leaf(6.0, label("g")), Node::row_leaf(6.0, label("h"))],
                ),
            ],
        );
        let mut surface = Recorder::default();
        design.build(Rect::new(0.0, 0.0, 12.0, 12.0), &mut surface).unwrap();

        assert_eq!(drawn_names(&surface), vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_rect(surface.drawn[2].1, Rect::new(4.0, 0.0, 2.0, 4.0));
        assert_rect(surface.drawn[7].1, Rect::new(9.0, 6.0, 3.0, 6.0));
    }

    #[test]
    fn building_twice_gives_identical_geometry() {
        let mut design = Node::row(
            12.0,
            vec![Node::column_leaf(5.0, label("a")), Node::column_leaf(7.0, label("b"))],
        );
        let bounds = Rect::new(0.0, 0.0, 13.333, 5.0);
        let mut surface = Recorder::default();

        design.build(bounds, &mut surface).unwrap();
        let first = design.leaf_frames();
        design.build(bounds, &mut surface).unwrap();
        let second = design.leaf_frames();

        assert_eq!(first, second);
        assert_eq!(surface.drawn.len(), 4);
    }

    #[test]
    fn empty_container_is_rejected() {
        let mut design = Node::row(12.0, vec![Node::column(12.0, Vec::new())]);
        let err = design.resolve(Rect::new(0.0, 0.0, 1.0, 1.0), WeightPolicy::Warn).unwrap_err();
        assert_eq!(
            err,
            LayoutError::EmptyContainer {
                path: NodePath(vec![0]),
                orientation: Orientation::Vertical,
            }
        );
        assert_eq!(err.to_string(), "Column at root/0 has no children");
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let design = Node::row(
            12.0,
            vec![Node::column_leaf(12.0, label("a")), Node::column_leaf(0.0, label("b"))],
        );
        assert!(matches!(
            design.validate(WeightPolicy::Permissive),
            Err(LayoutError::InvalidWeight { weight, .. }) if weight == 0.0
        ));

        let design = Node::row_leaf(f64::NAN, label("a"));
        assert!(matches!(
            design.validate(WeightPolicy::Permissive),
            Err(LayoutError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn same_orientation_nesting_is_rejected() {
        let design = Node::row(
            12.0,
            vec![Node::column(12.0, vec![Node::column_leaf(12.0, label("a"))])],
        );
        let err = design.validate(WeightPolicy::Warn).unwrap_err();
        assert_eq!(
            err,
            LayoutError::OrientationMismatch {
                path: NodePath(vec![0, 0]),
                orientation: Orientation::Vertical,
            }
        );
    }

    #[test]
    fn renderer_error_propagates_and_stops_the_walk() {
        let mut design = Node::row(
            12.0,
            vec![
                Node::column_leaf(4.0, label("a")),
                Node::column_leaf(4.0, label("b")),
                Node::column_leaf(4.0, label("c")),
            ],
        );
        let mut surface = Recorder {
            reject: Some("b".to_string()),
            ..Recorder::default()
        };
        let err = design.build(Rect::new(0.0, 0.0, 12.0, 1.0), &mut surface).unwrap_err();

        assert_eq!(err.to_string(), "surface rejected b");
        assert!(err.as_render().is_some());
        assert_eq!(drawn_names(&surface), vec!["a"]);
    }

    #[test]
    fn malformed_leaf_fails_before_any_leaf_renders() {
        let broken = Label {
            malformed: true,
            ..label("b")
        };
        let mut design = Node::row(
            12.0,
            vec![Node::column_leaf(6.0, label("a")), Node::column_leaf(6.0, broken)],
        );
        let mut surface = Recorder::default();
        let err = design.build(Rect::new(0.0, 0.0, 10.0, 5.0), &mut surface).unwrap_err();

        assert_eq!(err.to_string(), "surface rejected malformed b");
        assert!(surface.drawn.is_empty());
        assert!(design.leaf_frames().is_empty());
    }

    #[test]
    fn margins_do_not_change_resolved_frames() {
        let mut design = Node::row(
            12.0,
            vec![
                Node::column_leaf(6.0, label("a")).with_margins(Margins::uniform(0.5)),
                Node::column_leaf(6.0, label("b")),
            ],
        );
        design.resolve(Rect::new(0.0, 0.0, 10.0, 5.0), WeightPolicy::Strict).unwrap();

        let node = &design.children()[0];
        assert_eq!(node.panel().margins(), Margins::uniform(0.5));
        assert_rect(node.panel().frame().unwrap(), Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_rect(design.leaf_frames()[0], Rect::new(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn leaf_accessors() {
        let design = Node::column_leaf(12.0, label("solo"));
        assert!(design.children().is_empty());
        assert_eq!(design.leaf().map(|l| l.kind()), Some("label"));
        assert_eq!(design.orientation().flipped(), Orientation::Horizontal);
        assert_eq!(design.weight(), 12.0);

        let nested = Node::row(12.0, vec![design]);
        let printed = format!("{:?}", nested);
        assert!(printed.starts_with("GridNode { orientation: Horizontal"));
        assert!(printed.contains("kind: \"label\""));
    }
}
