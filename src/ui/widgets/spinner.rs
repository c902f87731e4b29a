// SPDX-License-Identifier: MPL-2.0
//! Indeterminate progress spinner drawn on a Canvas.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const STROKE_WIDTH: f32 = 3.0;
/// Fraction of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75 * TAU;

/// Rotating arc spinner. The rotation angle is owned by the caller and
/// advanced on the application tick, keeping the widget itself stateless.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl Spinner {
    /// Creates a spinner of `diameter` pixels at the given rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32, diameter: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            diameter,
        }
    }

    /// Wraps the spinner into a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Faint full track under the moving arc.
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                // The moving arc starts at the top and sweeps most of the
                // circle; rotation is applied by shifting the start angle.
                let start = self.rotation - PI / 2.0;
                let arc = Path::new(|builder| {
                    builder.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle: iced::Radians(start),
                        end_angle: iced::Radians(start + ARC_SWEEP),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
