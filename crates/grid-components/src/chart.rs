// ABOUTME: Chart component and chart type selection.
// ABOUTME: Maps chart families and their options to document chart types.

use grid_layout::{Margins, Panel, Renderable};
use serde::{Deserialize, Serialize};

use crate::shape::{ChartShape, ComponentError, Shape, ShapeFrame, ShapeSurface, TextBoxShape};
use crate::text::Alignment;

/// How multiple series share a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    /// Series side by side (bars) or overlaid (lines, areas)
    #[default]
    Standard,
    Stacked,
    /// Stacked and scaled to 100%
    Stacked100,
}

impl Stacking {
    fn suffix(&self) -> &'static str {
        match self {
            Stacking::Standard => "",
            Stacking::Stacked => "_STACKED",
            Stacking::Stacked100 => "_STACKED_100",
        }
    }
}

/// Bar and column body shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarStyle {
    #[default]
    Flat,
    ThreeD,
    Cone,
    Cylinder,
    Pyramid,
}

/// Secondary plot split out of a pie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieSplit {
    BarOfPie,
    PieOfPie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ChartKind {
    Area { three_d: bool, stacking: Stacking },
    Bar { style: BarStyle, stacking: Stacking },
    Column { style: BarStyle, stacking: Stacking },
    Line { three_d: bool, markers: bool, stacking: Stacking },
    Pie { three_d: bool, doughnut: bool, exploded: bool, split: Option<PieSplit> },
    Radar { filled: bool, markers: bool },
    Scatter { lines: bool, markers: bool, smooth: bool },
    Bubble { three_d: bool },
    Stock { open: bool, volume: bool },
    Surface { top_view: bool, wireframe: bool },
}

/// Data layout a chart family reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataShape {
    Category,
    Xy,
    Bubble,
}

impl DataShape {
    fn label(&self) -> &'static str {
        match self {
            DataShape::Category => "category",
            DataShape::Xy => "x/y",
            DataShape::Bubble => "bubble",
        }
    }
}

impl ChartKind {
    /// Chart type identifier in the document format, e.g. `COLUMN_STACKED_100`
    pub fn type_name(&self) -> String {
        match *self {
            ChartKind::Area { three_d, stacking } => {
                let base = if three_d { "THREE_D_AREA" } else { "AREA" };
                format!("{}{}", base, stacking.suffix())
            }
            ChartKind::Bar { style, stacking } => bar_type_name(style, stacking, "BAR", "BAR"),
            ChartKind::Column { style, stacking } => {
                bar_type_name(style, stacking, "COLUMN", "COL")
            }
            ChartKind::Line {
                three_d,
                markers,
                stacking,
            } => {
                if three_d {
                    "THREE_D_LINE".to_string()
                } else if markers {
                    format!("LINE_MARKERS{}", stacking.suffix())
                } else {
                    format!("LINE{}", stacking.suffix())
                }
            }
            ChartKind::Pie {
                three_d,
                doughnut,
                exploded,
                split,
            } => {
                let name = if three_d {
                    if exploded {
                        "THREE_D_PIE_EXPLODED"
                    } else {
                        "THREE_D_PIE"
                    }
                } else if doughnut {
                    if exploded {
                        "DOUGHNUT_EXPLODED"
                    } else {
                        "DOUGHNUT"
                    }
                } else {
                    match (split, exploded) {
                        (Some(PieSplit::BarOfPie), _) => "BAR_OF_PIE",
                        (Some(PieSplit::PieOfPie), _) => "PIE_OF_PIE",
                        (None, true) => "PIE_EXPLODED",
                        (None, false) => "PIE",
                    }
                };
                name.to_string()
            }
            ChartKind::Radar { filled, markers } => match (filled, markers) {
                (true, _) => "RADAR_FILLED",
                (false, true) => "RADAR_MARKERS",
                (false, false) => "RADAR",
            }
            .to_string(),
            ChartKind::Scatter {
                lines,
                markers,
                smooth,
            } => match (lines, markers, smooth) {
                (false, _, _) => "XY_SCATTER",
                (true, true, true) => "XY_SCATTER_SMOOTH",
                (true, true, false) => "XY_SCATTER_LINES",
                (true, false, true) => "XY_SCATTER_SMOOTH_NO_MARKERS",
                (true, false, false) => "XY_SCATTER_LINES_NO_MARKERS",
            }
            .to_string(),
            ChartKind::Bubble { three_d } => {
                if three_d {
                    "BUBBLE_THREE_D_EFFECT".to_string()
                } else {
                    "BUBBLE".to_string()
                }
            }
            ChartKind::Stock { open, volume } => match (open, volume) {
                (true, true) => "STOCK_VOHLC",
                (true, false) => "STOCK_OHLC",
                (false, true) => "STOCK_VHLC",
                (false, false) => "STOCK_HLC",
            }
            .to_string(),
            ChartKind::Surface {
                top_view,
                wireframe,
            } => match (top_view, wireframe) {
                (true, true) => "SURFACE_TOP_VIEW_WIREFRAME",
                (true, false) => "SURFACE_TOP_VIEW",
                (false, true) => "SURFACE_WIREFRAME",
                (false, false) => "SURFACE",
            }
            .to_string(),
        }
    }

    /// Whether the document writer can produce this chart type.
    ///
    /// Three-dimensional plots, compound pies, stock and surface charts have
    /// no writer and are drawn as a labelled placeholder instead.
    pub fn is_drawable(&self) -> bool {
        match *self {
            ChartKind::Area { three_d, .. } => !three_d,
            ChartKind::Bar { style, .. } | ChartKind::Column { style, .. } => {
                style == BarStyle::Flat
            }
            ChartKind::Line { three_d, .. } => !three_d,
            ChartKind::Pie { three_d, split, .. } => !three_d && split.is_none(),
            ChartKind::Radar { .. } | ChartKind::Scatter { .. } | ChartKind::Bubble { .. } => true,
            ChartKind::Stock { .. } | ChartKind::Surface { .. } => false,
        }
    }

    fn data_shape(&self) -> DataShape {
        match self {
            ChartKind::Scatter { .. } => DataShape::Xy,
            ChartKind::Bubble { .. } => DataShape::Bubble,
            _ => DataShape::Category,
        }
    }
}

fn bar_type_name(style: BarStyle, stacking: Stacking, flat: &str, shaped: &str) -> String {
    let prefix = match style {
        BarStyle::Flat => flat.to_string(),
        BarStyle::ThreeD => format!("THREE_D_{}", flat),
        BarStyle::Cone => format!("CONE_{}", shaped),
        BarStyle::Cylinder => format!("CYLINDER_{}", shaped),
        BarStyle::Pyramid => format!("PYRAMID_{}", shaped),
    };
    match stacking {
        Stacking::Standard => format!("{}_CLUSTERED", prefix),
        _ => format!("{}{}", prefix, stacking.suffix()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<P> {
    pub name: String,
    pub values: Vec<P>,
}

impl<P> Series<P> {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = P>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ChartData {
    /// One value per category per series
    Category {
        categories: Vec<String>,
        series: Vec<Series<f64>>,
    },
    /// (x, y) points
    Xy { series: Vec<Series<(f64, f64)>> },
    /// (x, y, size) points
    Bubble { series: Vec<Series<(f64, f64, f64)>> },
}

impl ChartData {
    pub fn category<C>(categories: C, series: Vec<Series<f64>>) -> Self
    where
        C: IntoIterator,
        C::Item: ToString,
    {
        ChartData::Category {
            categories: categories.into_iter().map(|c| c.to_string()).collect(),
            series,
        }
    }

    fn shape(&self) -> DataShape {
        match self {
            ChartData::Category { .. } => DataShape::Category,
            ChartData::Xy { .. } => DataShape::Xy,
            ChartData::Bubble { .. } => DataShape::Bubble,
        }
    }

    fn series_count(&self) -> usize {
        match self {
            ChartData::Category { series, .. } => series.len(),
            ChartData::Xy { series } => series.len(),
            ChartData::Bubble { series } => series.len(),
        }
    }

    fn check(&self) -> Result<(), ComponentError> {
        if self.series_count() == 0 {
            return Err(ComponentError::EmptyChart);
        }
        if let ChartData::Category { categories, series } = self {
            if let Some(bad) = series.iter().find(|s| s.values.len() != categories.len()) {
                return Err(ComponentError::SeriesLength {
                    series: bad.name.clone(),
                    expected: categories.len(),
                    found: bad.values.len(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickMark {
    None,
    Cross,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickLabelPosition {
    High,
    Low,
    NextToAxis,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFormat {
    pub minor_tick_marks: TickMark,
    pub major_tick_marks: TickMark,
    pub minor_gridlines: bool,
    pub major_gridlines: bool,
    pub label_position: TickLabelPosition,
    pub label_italic: bool,
    /// Tick label size in points
    pub label_font_size: f64,
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self {
            minor_tick_marks: TickMark::None,
            major_tick_marks: TickMark::Inside,
            minor_gridlines: false,
            major_gridlines: false,
            label_position: TickLabelPosition::NextToAxis,
            label_italic: false,
            label_font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFormat {
    pub has_title: bool,
    pub has_legend: bool,
    pub smooth_lines: bool,
    /// Category axis
    pub x_axis: AxisFormat,
    /// Value axis
    pub y_axis: AxisFormat,
}

impl Default for ChartFormat {
    fn default() -> Self {
        Self {
            has_title: false,
            has_legend: true,
            smooth_lines: false,
            x_axis: AxisFormat::default(),
            y_axis: AxisFormat::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chart {
    panel: Panel,
    pub kind: ChartKind,
    pub data: ChartData,
    pub format: ChartFormat,
}

impl Chart {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            panel: Panel::new(),
            kind,
            data,
            format: ChartFormat::default(),
        }
    }

    pub fn area(stacking: Stacking, data: ChartData) -> Self {
        Self::new(
            ChartKind::Area {
                three_d: false,
                stacking,
            },
            data,
        )
    }

    pub fn bar(stacking: Stacking, data: ChartData) -> Self {
        Self::new(
            ChartKind::Bar {
                style: BarStyle::Flat,
                stacking,
            },
            data,
        )
    }

    pub fn column(stacking: Stacking, data: ChartData) -> Self {
        Self::new(
            ChartKind::Column {
                style: BarStyle::Flat,
                stacking,
            },
            data,
        )
    }

    pub fn line(markers: bool, data: ChartData) -> Self {
        Self::new(
            ChartKind::Line {
                three_d: false,
                markers,
                stacking: Stacking::Standard,
            },
            data,
        )
    }

    pub fn pie(data: ChartData) -> Self {
        Self::new(
            ChartKind::Pie {
                three_d: false,
                doughnut: false,
                exploded: false,
                split: None,
            },
            data,
        )
    }

    pub fn with_format(mut self, format: ChartFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.panel = self.panel.with_margins(margins);
        self
    }

    /// Data must match the layout the chart family reads
    pub fn check(&self) -> Result<(), ComponentError> {
        let expected = self.kind.data_shape();
        if self.data.shape() != expected {
            return Err(ComponentError::ChartDataMismatch {
                chart_type: self.kind.type_name(),
                expected: expected.label(),
            });
        }
        self.data.check()
    }

    pub(crate) fn to_shape(&self) -> Result<Shape, ComponentError> {
        self.check()?;
        let frame = ShapeFrame::from_panel(&self.panel)?;
        let chart_type = self.kind.type_name();

        if !self.kind.is_drawable() {
            tracing::warn!("Chart type {} is not supported, drawing a placeholder", chart_type);
            return Ok(Shape::TextBox(TextBoxShape {
                frame,
                text: format!("{} charts are not supported by the document writer", chart_type),
                alignment: Alignment::Center,
                font_size: 10.0,
                bold: false,
                font_color: grid_core::Color::BLACK,
                fill_color: None,
                outline_color: None,
            }));
        }

        Ok(Shape::Chart(ChartShape {
            frame,
            chart_type,
            data: self.data.clone(),
            format: self.format,
        }))
    }
}

impl<S> Renderable<S> for Chart
where
    S: ShapeSurface + ?Sized,
    S::Error: From<ComponentError>,
{
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    fn kind(&self) -> &'static str {
        "chart"
    }

    fn check(&self) -> Result<(), S::Error> {
        Ok(Chart::check(self)?)
    }

    fn render_into(&self, surface: &mut S) -> Result<(), S::Error> {
        let shape = self.to_shape()?;
        surface.add_shape(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::testing::{ListError, ShapeList};
    use grid_layout::{BuildError, GridNode, Rect};

    fn abc() -> ChartData {
        ChartData::category(
            [0, 1, 2],
            vec![
                Series::new("a", [1.0, 2.0, 9.0]),
                Series::new("b", [4.0, 1.0, 6.0]),
                Series::new("c", [7.0, 8.0, 2.0]),
            ],
        )
    }

    fn render(chart: Chart) -> Result<Shape, BuildError<ListError>> {
        let mut design = GridNode::<ShapeList>::row_leaf(12.0, chart);
        let mut surface = ShapeList::default();
        design.build(Rect::new(0.0, 0.0, 6.0, 4.0), &mut surface)?;
        Ok(surface.shapes.remove(0))
    }

    #[test]
    fn type_names_follow_options() {
        let stacked_area = ChartKind::Area {
            three_d: false,
            stacking: Stacking::Stacked,
        };
        assert_eq!(stacked_area.type_name(), "AREA_STACKED");

        let cone_columns = ChartKind::Column {
            style: BarStyle::Cone,
            stacking: Stacking::Stacked100,
        };
        assert_eq!(cone_columns.type_name(), "CONE_COL_STACKED_100");

        let bars = ChartKind::Bar {
            style: BarStyle::Flat,
            stacking: Stacking::Standard,
        };
        assert_eq!(bars.type_name(), "BAR_CLUSTERED");

        let three_d_columns = ChartKind::Column {
            style: BarStyle::ThreeD,
            stacking: Stacking::Standard,
        };
        assert_eq!(three_d_columns.type_name(), "THREE_D_COLUMN_CLUSTERED");

        let scatter = ChartKind::Scatter {
            lines: true,
            markers: false,
            smooth: true,
        };
        assert_eq!(scatter.type_name(), "XY_SCATTER_SMOOTH_NO_MARKERS");

        let pie = ChartKind::Pie {
            three_d: false,
            doughnut: false,
            exploded: true,
            split: Some(PieSplit::PieOfPie),
        };
        assert_eq!(pie.type_name(), "PIE_OF_PIE");
        assert!(!pie.is_drawable());

        let stock = ChartKind::Stock {
            open: true,
            volume: false,
        };
        assert_eq!(stock.type_name(), "STOCK_OHLC");
    }

    #[test]
    fn stacked_area_renders_chart_shape() {
        let shape = render(Chart::area(Stacking::Stacked, abc())).unwrap();
        let Shape::Chart(chart) = shape else {
            panic!("expected chart, got {:?}", shape);
        };
        assert_eq!(chart.chart_type, "AREA_STACKED");
        assert!(chart.format.has_legend);
        assert_eq!(chart.frame.cx, grid_core::Emu::from_inches(6.0));
    }

    #[test]
    fn unsupported_kind_draws_placeholder() {
        let kind = ChartKind::Surface {
            top_view: false,
            wireframe: true,
        };
        let shape = render(Chart::new(kind, abc())).unwrap();
        let Shape::TextBox(placeholder) = shape else {
            panic!("expected placeholder text, got {:?}", shape);
        };
        assert!(placeholder.text.starts_with("SURFACE_WIREFRAME"));
        assert_eq!(placeholder.alignment, Alignment::Center);
        assert_eq!(placeholder.font_size, 10.0);
    }

    #[test]
    fn scatter_needs_xy_data() {
        let kind = ChartKind::Scatter {
            lines: false,
            markers: true,
            smooth: false,
        };
        let err = render(Chart::new(kind, abc())).unwrap_err();
        assert_eq!(err.to_string(), "XY_SCATTER charts need x/y data");

        let xy = ChartData::Xy {
            series: vec![Series::new("s", [(0.0, 1.0), (1.0, 3.0)])],
        };
        assert!(render(Chart::new(kind, xy)).is_ok());
    }

    #[test]
    fn short_series_is_rejected() {
        let data = ChartData::category(
            ["q1", "q2", "q3"],
            vec![Series::new("a", [1.0, 2.0, 3.0]), Series::new("b", [4.0])],
        );
        let err = render(Chart::column(Stacking::Standard, data)).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Render(ListError::Component(ComponentError::SeriesLength {
                expected: 3,
                found: 1,
                ..
            }))
        ));
    }

    #[test]
    fn chart_without_series_is_rejected() {
        let data = ChartData::category(["x"], Vec::new());
        let err = render(Chart::pie(data)).unwrap_err();
        assert_eq!(err.to_string(), "chart has no series");
    }

    #[test]
    fn chart_data_serializes_with_layout_tag() {
        let json = serde_json::to_value(abc()).unwrap();
        assert_eq!(json["layout"], "category");
        assert_eq!(json["categories"][2], "2");
        assert_eq!(json["series"][0]["name"], "a");
    }

    #[test]
    fn mismatched_data_is_caught_before_any_chart_draws() {
        let scatter_on_categories = Chart::new(
            ChartKind::Scatter {
                lines: false,
                markers: true,
                smooth: false,
            },
            abc(),
        );
        assert!(scatter_on_categories.check().is_err());

        let mut design = GridNode::<ShapeList>::column(
            12.0,
            vec![
                GridNode::row_leaf(6.0, Chart::column(Stacking::Standard, abc())),
                GridNode::row_leaf(6.0, scatter_on_categories),
            ],
        );
        let mut surface = ShapeList::default();
        let err = design
            .build(Rect::new(0.0, 0.0, 6.0, 4.0), &mut surface)
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Render(ListError::Component(ComponentError::ChartDataMismatch { .. }))
        ));
        assert!(surface.shapes.is_empty());
    }
}
