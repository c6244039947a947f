use serde::Serialize;

use crate::depth_scale::{DEPTH_BANDS, UNKNOWN_DEPTH_COLOR};

/// One legend entry: a swatch color and the depth range it stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub label: String,
    pub color: &'static str,
}

/// Build the legend for the depth scale.
///
/// Rows are derived from [`DEPTH_BANDS`] so the legend can never disagree
/// with marker coloring, plus a trailing row for the unknown-depth sentinel.
pub fn legend_rows() -> Vec<LegendRow> {
    let mut rows = Vec::with_capacity(DEPTH_BANDS.len() + 1);

    for (i, band) in DEPTH_BANDS.iter().enumerate() {
        let label = match DEPTH_BANDS.get(i + 1) {
            Some(next) => format!("{}\u{2013}{}", band.floor_km, next.floor_km),
            None => format!("{}+", band.floor_km),
        };
        rows.push(LegendRow {
            label,
            color: band.color,
        });
    }

    rows.push(LegendRow {
        label: "unknown".to_string(),
        color: UNKNOWN_DEPTH_COLOR,
    });

    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::legend_rows;
    use crate::depth_scale::{DEPTH_BANDS, UNKNOWN_DEPTH_COLOR, depth_color};

    #[test]
    fn one_row_per_band_plus_unknown() {
        let rows = legend_rows();
        assert_eq!(rows.len(), DEPTH_BANDS.len() + 1);
    }

    #[test]
    fn row_colors_match_the_band_table() {
        let rows = legend_rows();
        for (row, band) in rows.iter().zip(DEPTH_BANDS.iter()) {
            assert_eq!(row.color, band.color);
        }
        assert_eq!(rows.last().unwrap().color, UNKNOWN_DEPTH_COLOR);
    }

    #[test]
    fn labels_render_the_depth_ranges() {
        let labels: Vec<String> = legend_rows().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "-10\u{2013}10",
                "10\u{2013}30",
                "30\u{2013}50",
                "50\u{2013}70",
                "70\u{2013}90",
                "90+",
                "unknown",
            ]
        );
    }

    #[test]
    fn legend_and_classifier_agree_on_sample_depths() {
        // A depth just past each band floor must color like that band's row.
        let rows = legend_rows();
        for (i, band) in DEPTH_BANDS.iter().enumerate() {
            assert_eq!(depth_color(Some(band.floor_km + 0.5)), rows[i].color);
        }
    }
}
