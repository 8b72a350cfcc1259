use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn rgba_u8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> DeckResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DeckError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// How data values are turned into on-chart labels and axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// `8.5` renders as `8.5%`.
    Percent,
    Plain,
}

impl LabelFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Percent => format!("{value}%"),
            Self::Plain => format!("{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    Center,
    Top,
}

/// Value labels drawn on top of data points (the label extension's job).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelSpec {
    pub format: LabelFormat,
    pub color: Color,
    pub bold: bool,
    pub font_size: Option<f64>,
    pub anchor: Option<LabelAnchor>,
    pub align: Option<LabelAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Hidden,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub position: LegendPosition,
    pub padding: Option<f64>,
    pub font_size: Option<f64>,
}

impl LegendSpec {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            position: LegendPosition::Hidden,
            padding: None,
            font_size: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    pub tick_format: LabelFormat,
    pub tick_font_size: Option<f64>,
    pub show_grid: bool,
}

impl AxisSpec {
    #[must_use]
    pub const fn value_axis(max: f64, tick_format: LabelFormat) -> Self {
        Self {
            begin_at_zero: true,
            max: Some(max),
            tick_format,
            tick_font_size: None,
            show_grid: true,
        }
    }

    #[must_use]
    pub const fn category_axis(tick_font_size: f64) -> Self {
        Self {
            begin_at_zero: false,
            max: None,
            tick_format: LabelFormat::Plain,
            tick_font_size: Some(tick_font_size),
            show_grid: true,
        }
    }

    #[must_use]
    pub const fn without_grid(mut self) -> Self {
        self.show_grid = false;
        self
    }

    #[must_use]
    pub const fn with_tick_font_size(mut self, size: f64) -> Self {
        self.tick_font_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
    pub padding_bottom: f64,
}

/// One data series. `background` holds one color, or one per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub background: Vec<Color>,
    pub border: Vec<Color>,
    /// `None` leaves the width to the backend default.
    pub border_width: Option<f64>,
    pub tension: Option<f64>,
    pub fill: bool,
}

impl DatasetSpec {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            label: None,
            values,
            background: Vec::new(),
            border: Vec::new(),
            border_width: None,
            tension: None,
            fill: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, colors: Vec<Color>) -> Self {
        self.background = colors;
        self
    }

    #[must_use]
    pub fn with_border(mut self, colors: Vec<Color>) -> Self {
        self.border = colors;
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_area_fill(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self.fill = true;
        self
    }
}

/// Declarative chart configuration handed to the chart backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
    pub legend: LegendSpec,
    pub value_labels: ValueLabelSpec,
    /// Tooltip text uses this rule when set; the backend default otherwise.
    pub tooltip_format: Option<LabelFormat>,
    pub title: Option<TitleSpec>,
    pub y_axis: Option<AxisSpec>,
    pub x_axis: Option<AxisSpec>,
    pub layout_padding_top: Option<f64>,
    pub maintain_aspect_ratio: bool,
}

impl ChartSpec {
    pub fn validate(&self) -> DeckResult<()> {
        if self.labels.is_empty() {
            return Err(DeckError::InvalidConfig(
                "chart must have at least one category label".to_owned(),
            ));
        }

        for dataset in &self.datasets {
            if dataset.values.len() != self.labels.len() {
                return Err(DeckError::InvalidConfig(format!(
                    "dataset has {} values for {} labels",
                    dataset.values.len(),
                    self.labels.len()
                )));
            }
            if dataset.values.iter().any(|value| !value.is_finite()) {
                return Err(DeckError::InvalidConfig(
                    "dataset values must be finite".to_owned(),
                ));
            }
            for color in dataset.background.iter().chain(dataset.border.iter()) {
                color.validate()?;
            }
        }

        self.value_labels.color.validate()
    }

    /// Labels the value-label extension draws for each dataset, in order.
    #[must_use]
    pub fn formatted_value_labels(&self) -> Vec<Vec<String>> {
        self.datasets
            .iter()
            .map(|dataset| {
                dataset
                    .values
                    .iter()
                    .map(|value| self.value_labels.format.format(*value))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LabelFormat};

    #[test]
    fn color_channels_must_be_normalized() {
        assert!(Color::rgba_u8(0x25, 0x63, 0xeb, 0.5).validate().is_ok());
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn percent_format_keeps_fractional_values() {
        assert_eq!(LabelFormat::Percent.format(7.0), "7%");
        assert_eq!(LabelFormat::Percent.format(8.5), "8.5%");
        assert_eq!(LabelFormat::Plain.format(89.4), "89.4");
    }
}
