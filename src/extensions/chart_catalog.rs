use serde::{Deserialize, Serialize};

use super::chart_spec::{
    AxisSpec, ChartKind, ChartSpec, Color, DatasetSpec, LabelAlign, LabelAnchor, LabelFormat,
    LegendPosition, LegendSpec, TitleSpec, ValueLabelSpec,
};

const BLUE: Color = rgb_hex(0x25, 0x63, 0xeb);
const GREEN: Color = rgb_hex(0x16, 0xa3, 0x4a);
const AMBER: Color = rgb_hex(0xfb, 0xbf, 0x24);
const RED: Color = rgb_hex(0xef, 0x44, 0x44);
const GRAY: Color = rgb_hex(0x9c, 0xa3, 0xaf);
const ORANGE: Color = rgb_hex(0xea, 0x58, 0x0c);
const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Stable names of the charts the deck knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartName {
    Energy,
    Polish,
    Apple,
    Netguru,
    Generation,
    Cdpr,
}

impl ChartName {
    pub const ALL: [Self; 6] = [
        Self::Energy,
        Self::Polish,
        Self::Apple,
        Self::Netguru,
        Self::Generation,
        Self::Cdpr,
    ];

    /// Id of the element the chart is mounted into.
    #[must_use]
    pub const fn mount_point(self) -> &'static str {
        match self {
            Self::Energy => "energyChart",
            Self::Polish => "polishChart",
            Self::Apple => "appleChart",
            Self::Netguru => "netguruChart",
            Self::Generation => "generationChart",
            Self::Cdpr => "cdprChart",
        }
    }

    /// Static configuration. `Cdpr` has none and is skipped by `build_all`.
    #[must_use]
    pub fn spec(self) -> Option<ChartSpec> {
        match self {
            Self::Energy => Some(energy_chart()),
            Self::Polish => Some(polish_chart()),
            Self::Apple => Some(apple_chart()),
            Self::Netguru => Some(netguru_chart()),
            Self::Generation => Some(generation_chart()),
            Self::Cdpr => None,
        }
    }
}

fn energy_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: labels(&["2020", "2022", "2024", "2026", "2028", "2030"]),
        datasets: vec![
            DatasetSpec::new(vec![7.0, 8.5, 10.0, 11.5, 12.5, 13.0])
                .with_label("Zużycie energii przez IT (%)")
                .with_background(vec![with_alpha(BLUE, 0x20)])
                .with_border(vec![BLUE])
                .with_area_fill(0.4),
        ],
        legend: LegendSpec::hidden(),
        value_labels: ValueLabelSpec {
            format: LabelFormat::Percent,
            color: BLUE,
            bold: true,
            font_size: None,
            anchor: Some(LabelAnchor::End),
            align: Some(LabelAlign::Top),
        },
        tooltip_format: None,
        title: None,
        y_axis: Some(AxisSpec::value_axis(15.0, LabelFormat::Percent)),
        x_axis: None,
        layout_padding_top: None,
        maintain_aspect_ratio: false,
    }
}

fn polish_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: labels(&[
            "Strategiczne podejście",
            "Podstawowe działania",
            "Brak działań",
        ]),
        datasets: vec![
            DatasetSpec::new(vec![11.0, 44.0, 45.0])
                .with_background(vec![GREEN, AMBER, RED])
                .with_border_width(0.0),
        ],
        legend: LegendSpec {
            position: LegendPosition::Bottom,
            padding: Some(10.0),
            font_size: Some(11.0),
        },
        value_labels: centered_white_labels(LabelFormat::Percent, 14.0),
        tooltip_format: None,
        title: None,
        y_axis: None,
        x_axis: None,
        layout_padding_top: None,
        maintain_aspect_ratio: false,
    }
}

fn apple_chart() -> ChartSpec {
    let shades = [0.6, 0.4, 0.8, 1.0, 0.7]
        .into_iter()
        .map(|alpha| Color::rgba_u8(22, 163, 74, alpha))
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        labels: labels(&[
            "Redukcja emisji CO₂",
            "Cel do 2030 roku",
            "Materiały z recyklingu",
            "Energia odnawialna",
            "Efektywność energetyczna",
        ]),
        datasets: vec![
            DatasetSpec::new(vec![60.0, 75.0, 100.0, 100.0, 70.0])
                .with_label("Apple - postęp (%)")
                .with_background(shades)
                .with_border(vec![GREEN])
                .with_border_width(1.0),
        ],
        legend: LegendSpec::hidden(),
        value_labels: centered_white_labels(LabelFormat::Percent, 14.0),
        tooltip_format: Some(LabelFormat::Percent),
        title: None,
        y_axis: Some(AxisSpec::value_axis(100.0, LabelFormat::Percent)),
        x_axis: Some(AxisSpec::category_axis(10.0)),
        layout_padding_top: None,
        maintain_aspect_ratio: false,
    }
}

fn netguru_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: labels(&["Netguru", "Mediana branży"]),
        datasets: vec![
            DatasetSpec::new(vec![89.4, 50.9])
                .with_label("B Impact Score")
                .with_background(vec![
                    Color::rgba_u8(22, 163, 74, 0.8),
                    Color::rgba_u8(156, 163, 175, 0.5),
                ])
                .with_border(vec![GREEN, GRAY])
                .with_border_width(1.0),
        ],
        legend: LegendSpec::hidden(),
        value_labels: centered_white_labels(LabelFormat::Plain, 12.0),
        tooltip_format: None,
        title: Some(TitleSpec {
            text: "B Impact Score (min. 80 punktów)".to_owned(),
            color: GREEN,
            font_size: 11.0,
            padding_bottom: 10.0,
        }),
        y_axis: Some(
            AxisSpec::value_axis(100.0, LabelFormat::Plain)
                .with_tick_font_size(10.0)
                .without_grid(),
        ),
        x_axis: Some(AxisSpec::category_axis(10.0).without_grid()),
        layout_padding_top: Some(10.0),
        maintain_aspect_ratio: false,
    }
}

fn generation_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: labels(&[
            "Gen Z\n(86%)",
            "Millennials\n(89%)",
            "Klimat <30 lat\n(76%)",
        ]),
        datasets: vec![
            DatasetSpec::new(vec![86.0, 89.0, 76.0])
                .with_label("Preferencje proekologiczne")
                .with_background(vec![
                    ORANGE,
                    with_alpha(ORANGE, 0x80),
                    with_alpha(ORANGE, 0x60),
                ])
                .with_border(vec![ORANGE])
                .with_border_width(1.0),
        ],
        legend: LegendSpec::hidden(),
        value_labels: centered_white_labels(LabelFormat::Percent, 14.0),
        tooltip_format: None,
        title: None,
        y_axis: Some(AxisSpec::value_axis(100.0, LabelFormat::Percent)),
        x_axis: Some(AxisSpec::category_axis(10.0)),
        layout_padding_top: None,
        maintain_aspect_ratio: false,
    }
}

fn centered_white_labels(format: LabelFormat, font_size: f64) -> ValueLabelSpec {
    ValueLabelSpec {
        format,
        color: WHITE,
        bold: true,
        font_size: Some(font_size),
        anchor: Some(LabelAnchor::Center),
        align: Some(LabelAlign::Center),
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

const fn rgb_hex(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

const fn with_alpha(color: Color, alpha: u8) -> Color {
    Color::rgba(color.red, color.green, color.blue, alpha as f64 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::ChartName;

    #[test]
    fn every_configured_chart_is_valid() {
        for name in ChartName::ALL {
            if let Some(spec) = name.spec() {
                spec.validate().expect("static chart config");
            }
        }
    }

    #[test]
    fn mount_points_are_unique() {
        let mut mounts: Vec<&str> = ChartName::ALL.iter().map(|name| name.mount_point()).collect();
        mounts.sort_unstable();
        mounts.dedup();
        assert_eq!(mounts.len(), ChartName::ALL.len());
    }
}
