// ABOUTME: Built-in slide designs used by the demo command.
// ABOUTME: Each design is a nested row/column tree built in code.

use clap::ValueEnum;
use grid_components::{
    BarStyle, Chart, ChartData, ChartKind, Image, PieSplit, Series, Stacking, Table, Text,
};
use grid_core::{Color, Config};
use grid_layout::GridNode;

use crate::shape_log::ShapeLog;

type Node = GridNode<ShapeLog>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Eleven outlined text boxes in a nested grid
    Grid,
    /// Stacked area chart next to a table and a caption
    Report,
    /// One panel per chart family, unsupported kinds included
    Charts,
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::Grid => "Grid layout",
            Demo::Report => "My shiny analysis",
            Demo::Charts => "Chart gallery",
        }
    }

    pub fn design(&self, config: &Config) -> Node {
        match self {
            Demo::Grid => grid(config),
            Demo::Report => report(config),
            Demo::Charts => charts(),
        }
    }
}

fn boxed(label: &str, config: &Config) -> Text {
    Text::with_defaults(label, &config.text).outline(Color::BLACK)
}

fn grid(config: &Config) -> Node {
    let cell = |label: &str| boxed(label, config);
    let three_across = |labels: [&str; 3]| {
        Node::row(
            4.0,
            labels
                .into_iter()
                .map(|label| Node::column_leaf(4.0, cell(label)))
                .collect(),
        )
    };

    Node::row(
        12.0,
        vec![
            Node::column(
                6.0,
                vec![
                    three_across(["a", "b", "c"]),
                    Node::row_leaf(4.0, cell("d")),
                    three_across(["e", "f", "g"]),
                ],
            ),
            Node::column_leaf(3.0, cell("h")),
            Node::column(
                3.0,
                vec![
                    Node::row_leaf(6.0, cell("i")),
                    Node::row(
                        6.0,
                        vec![
                            Node::column_leaf(6.0, cell("j")),
                            Node::column_leaf(6.0, cell("k")),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn abc_series() -> Vec<Series<f64>> {
    vec![
        Series::new("a", [1.0, 2.0, 9.0]),
        Series::new("b", [4.0, 1.0, 6.0]),
        Series::new("c", [7.0, 8.0, 2.0]),
    ]
}

fn abc_data() -> ChartData {
    ChartData::category([0, 1, 2], abc_series())
}

fn report(config: &Config) -> Node {
    let chart = Chart::area(Stacking::Stacked, abc_data());
    let table = Table::new(
        ["a", "b", "c"],
        vec![vec![1, 4, 7], vec![2, 1, 8], vec![9, 6, 2]],
    );
    let text = Text::with_defaults("some explanatory text here", &config.text);

    Node::row(
        12.0,
        vec![
            Node::column_leaf(6.0, chart),
            Node::column(
                6.0,
                vec![Node::row_leaf(6.0, table), Node::row_leaf(6.0, text)],
            ),
        ],
    )
}

fn charts() -> Node {
    let scatter = ChartData::Xy {
        series: vec![Series::new("trend", [(0.0, 1.0), (1.0, 2.5), (2.0, 2.0)])],
    };
    let bubbles = ChartData::Bubble {
        series: vec![Series::new("size", [(1.0, 1.0, 3.0), (2.0, 3.0, 1.0)])],
    };

    let panel = |weight: f64, kind: ChartKind, data: ChartData| {
        Node::row_leaf(weight, Chart::new(kind, data))
    };

    Node::row(
        12.0,
        vec![
            Node::column(
                4.0,
                vec![
                    Node::row_leaf(4.0, Chart::column(Stacking::Standard, abc_data())),
                    Node::row_leaf(4.0, Chart::bar(Stacking::Stacked100, abc_data())),
                    panel(
                        4.0,
                        ChartKind::Column {
                            style: BarStyle::Cylinder,
                            stacking: Stacking::Standard,
                        },
                        abc_data(),
                    ),
                ],
            ),
            Node::column(
                4.0,
                vec![
                    Node::row_leaf(4.0, Chart::line(true, abc_data())),
                    Node::row_leaf(4.0, Chart::pie(abc_data())),
                    panel(
                        4.0,
                        ChartKind::Pie {
                            three_d: false,
                            doughnut: false,
                            exploded: false,
                            split: Some(PieSplit::BarOfPie),
                        },
                        abc_data(),
                    ),
                ],
            ),
            Node::column(
                4.0,
                vec![
                    panel(
                        4.0,
                        ChartKind::Scatter {
                            lines: true,
                            markers: true,
                            smooth: false,
                        },
                        scatter,
                    ),
                    panel(4.0, ChartKind::Bubble { three_d: false }, bubbles),
                    Node::row_leaf(4.0, Image::new("assets/logo.png")),
                ],
            ),
        ],
    )
}
