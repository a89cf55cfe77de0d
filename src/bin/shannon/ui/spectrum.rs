//! Spectral view widget
//!
//! Original spectrum, replicas of the sampled spectrum and the ±Fs/2 markers
//! on a shared, rate-normalized magnitude axis.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use shannon_demo::{
    present::{clip_to_bounds, SPECTRUM_FREQ_BOUNDS, SPECTRUM_MAGNITUDE_BOUNDS},
    DemoFrame,
};

/// Render the spectral view
pub fn render_spectrum(frame: &mut Frame, area: Rect, demo: &DemoFrame) {
    let block = Block::default()
        .title(" Spectral View of Original and Sampled Signals ")
        .borders(Borders::ALL);

    let original = clip_to_bounds(&demo.reference_spectrum.points(), SPECTRUM_FREQ_BOUNDS);
    let replicas = clip_to_bounds(&demo.replicas.points(), SPECTRUM_FREQ_BOUNDS);

    let top = SPECTRUM_MAGNITUDE_BOUNDS[1];
    let [left, right] = demo.nyquist_markers;
    let left_marker = [(left, 0.0), (left, top)];
    let right_marker = [(right, 0.0), (right, top)];

    let datasets = vec![
        Dataset::default()
            .name("Original spectrum")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&original),
        Dataset::default()
            .name("Sampled spectrum")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&replicas),
        Dataset::default()
            .name("Nyquist Fs/2")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&left_marker),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&right_marker),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title("Frequency (Hz)")
                .bounds(SPECTRUM_FREQ_BOUNDS)
                .labels(vec!["-2000", "-1000", "0", "1000", "2000"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Magnitude")
                .bounds(SPECTRUM_MAGNITUDE_BOUNDS)
                .labels(vec!["0", "0.003", "0.006"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
