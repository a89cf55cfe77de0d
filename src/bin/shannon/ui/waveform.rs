//! Time-domain view widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use shannon_demo::{
    present::{AMPLITUDE_BOUNDS, TIME_BOUNDS},
    DemoFrame,
};

/// Render the dense reference trace with the sampling instants on top
pub fn render_time_view(frame: &mut Frame, area: Rect, demo: &DemoFrame) {
    let block = Block::default()
        .title(" Original and Sampled Signals ")
        .borders(Borders::ALL);

    let reference = demo.time_view.reference.points();
    let sampled = demo.time_view.sampled.points();

    let datasets = vec![
        Dataset::default()
            .name("Original")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&reference),
        Dataset::default()
            .name("Samples")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&sampled),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title("Time (s)")
                .bounds(TIME_BOUNDS)
                .labels(vec!["-0.01", "0", "0.01"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds(AMPLITUDE_BOUNDS)
                .labels(vec!["-1", "0", "1"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
