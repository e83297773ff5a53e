use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, text, Column, Container, Row,
    },
    Alignment, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Task, Theme,
};
use log::error;
use spectrumcore::plot::{PanelLimits, Series};
use spectrumcore::{analyze, Analysis, Scenario};

const MAX_POINTS: usize = 2_000;
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 34.0;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(state: &Visualizer) -> String {
    match state.figures.get(state.selected) {
        Some(figure) => format!("FFT Spectrum Viewer - {}", figure.name),
        None => "FFT Spectrum Viewer".into(),
    }
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    figures: Vec<Figure>,
    selected: usize,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Select(usize),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let mut figures = Vec::new();
        let mut failures = Vec::new();
        for scenario in Scenario::builtin() {
            match analyze(&scenario) {
                Ok(analysis) => figures.push(Figure::from_analysis(&analysis)),
                Err(err) => {
                    error!("{}: {}", scenario.name, err);
                    failures.push(format!("{}: {}", scenario.name, err));
                }
            }
        }

        let status = if failures.is_empty() {
            format!("{} signals analysed", figures.len())
        } else {
            format!("Analysis failed for {}", failures.join("; "))
        };

        (
            Visualizer {
                figures,
                selected: 0,
                status,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Select(index) => {
                if index < state.figures.len() {
                    state.selected = index;
                }
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let selector = state.figures.iter().enumerate().fold(
            Row::new().spacing(10),
            |row, (idx, figure)| {
                let label = button(text(figure.name.clone()).size(14)).padding(8);
                let label = if idx == state.selected {
                    label
                } else {
                    label.on_press(Message::Select(idx))
                };
                row.push(label)
            },
        );

        let header = row![text("Signals").size(22), selector, text(&state.status).size(14)]
            .spacing(16)
            .align_y(Alignment::Center);

        let body: Element<'_, Message> = match state.figures.get(state.selected) {
            Some(figure) => figure.panels.iter().fold(
                Column::new().spacing(6).push(text(&figure.summary).size(16)),
                |col, panel| {
                    col.push(text(panel.title).size(14)).push(
                        Canvas::new(panel.clone())
                            .width(Length::Fill)
                            .height(Length::Fixed(230.0)),
                    )
                },
            )
            .into(),
            None => text("No signal to display").size(18).into(),
        };

        Container::new(column![header, body].spacing(14).padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Three panels for one analysed signal.
#[derive(Debug)]
struct Figure {
    name: String,
    summary: String,
    panels: Vec<Panel>,
}

impl Figure {
    fn from_analysis(analysis: &Analysis) -> Self {
        let figure = &analysis.figure;
        let summary = match analysis.peak {
            Some(peak) => format!(
                "{}: peak {:.3} Hz, |X| = {:.2}",
                analysis.scenario.signal.label(),
                peak.frequency,
                peak.magnitude
            ),
            None => analysis.scenario.signal.label(),
        };

        Self {
            name: analysis.scenario.name.clone(),
            summary,
            panels: vec![
                Panel::new(
                    "Time domain",
                    "Time(s)",
                    "Signal amplitude (A.U.)",
                    &analysis.time_series(),
                    figure.time,
                ),
                Panel::new(
                    "Magnitude spectrum",
                    "Frequency(Hz)",
                    "FFT magnitude (A.U.)",
                    &analysis.magnitude_series(),
                    figure.magnitude,
                ),
                Panel::new(
                    "Phase spectrum",
                    "Frequency(Hz)",
                    "FFT phase (Degrees)",
                    &analysis.phase_series(),
                    figure.phase,
                ),
            ],
        }
    }
}

#[derive(Debug, Clone)]
struct Panel {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    points: Vec<(f64, f64)>,
    limits: PanelLimits,
}

impl Panel {
    fn new(
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        series: &Series,
        limits: PanelLimits,
    ) -> Self {
        let visible = series.visible(&limits);
        let stride = visible.len().div_ceil(MAX_POINTS).max(1);
        let points = visible
            .x
            .iter()
            .zip(visible.y.iter())
            .step_by(stride)
            .map(|(&x, &y)| (x, y))
            .collect();
        Self {
            title,
            x_label,
            y_label,
            points,
            limits,
        }
    }
}

fn label(content: String, position: Point, color: Color) -> canvas::Text {
    canvas::Text {
        content,
        position,
        color,
        size: Pixels(12.0),
        ..canvas::Text::default()
    }
}

impl canvas::Program<Message> for Panel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let plot_width = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let (x_lo, x_hi) = self.limits.x;
        let (y_lo, y_hi) = self.limits.y;
        let x_span = (x_hi - x_lo).max(f64::EPSILON);
        let y_span = (y_hi - y_lo).max(f64::EPSILON);

        let to_screen = |x: f64, y: f64| {
            let nx = ((x - x_lo) / x_span) as f32;
            let ny = ((y - y_lo) / y_span).clamp(0.0, 1.0) as f32;
            Point::new(
                MARGIN_LEFT + nx * plot_width,
                MARGIN_TOP + plot_height - ny * plot_height,
            )
        };

        let axis_color = Color::from_rgb(0.35, 0.35, 0.45);
        let border = Path::rectangle(
            Point::new(MARGIN_LEFT, MARGIN_TOP),
            iced::Size::new(plot_width, plot_height),
        );
        frame.stroke(&border, Stroke::default().with_color(axis_color).with_width(1.0));

        if x_lo < 0.0 && x_hi > 0.0 {
            let zero = Path::new(|builder| {
                builder.move_to(to_screen(0.0, y_lo));
                builder.line_to(to_screen(0.0, y_hi));
            });
            frame.stroke(&zero, Stroke::default().with_color(axis_color).with_width(0.5));
        }

        if self.points.len() > 1 {
            let path = Path::new(|builder| {
                for (i, &(x, y)) in self.points.iter().enumerate() {
                    let point = to_screen(x, y);
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(1.5)
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
            );
        }

        let tick_color = Color::from_rgb(0.7, 0.7, 0.75);
        let bottom = MARGIN_TOP + plot_height;
        frame.fill_text(label(
            format!("{x_lo:.3}"),
            Point::new(MARGIN_LEFT, bottom + 4.0),
            tick_color,
        ));
        frame.fill_text(label(
            format!("{x_hi:.3}"),
            Point::new(MARGIN_LEFT + plot_width - 48.0, bottom + 4.0),
            tick_color,
        ));
        frame.fill_text(label(
            format!("{y_hi:.2}"),
            Point::new(4.0, MARGIN_TOP),
            tick_color,
        ));
        frame.fill_text(label(
            format!("{y_lo:.2}"),
            Point::new(4.0, bottom - 14.0),
            tick_color,
        ));
        frame.fill_text(label(
            self.x_label.to_string(),
            Point::new(MARGIN_LEFT + plot_width / 2.0 - 40.0, bottom + 18.0),
            Color::WHITE,
        ));
        frame.fill_text(label(
            self.y_label.to_string(),
            Point::new(MARGIN_LEFT + 8.0, MARGIN_TOP + 4.0),
            Color::WHITE,
        ));

        vec![frame.into_geometry()]
    }
}
