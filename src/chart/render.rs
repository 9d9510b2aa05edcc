use crate::chart::{
    error::{RenderErr, drawing_err},
    style::ChartStyle,
};
use crate::compute::{compare_cvr_distributions, types::CvrComparison};
use crate::error::CvrErr;
use crate::normal::{curve::DensityCurve, normal_dist::NormalDist};
use crate::sample::types::{Arm, ArmStatistics};
use crate::significance::types::{CriticalValues, SignificanceParams};
use plotters::coord::{Shift, cartesian::Cartesian2d, types::RangedCoordf64};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

// Fractions of the tallest density used for vertical layout
const Y_FLOOR: f64 = -0.1;
const Y_CEIL: f64 = 1.1;
const RATE_LABEL_Y: f64 = -0.07;
const X_PAD: f64 = 0.05;

#[derive(Clone, Copy)]
enum TailSide {
    Lower,
    Upper,
}

/// Computes the comparison, then draws it onto `root`. Sample and alpha
/// errors surface before anything is drawn.
pub fn plot_cvr_distributions<DB, C, E>(
    root: &DrawingArea<DB, Shift>,
    control: &[C],
    experimental: &[E],
    params: &SignificanceParams,
    style: &ChartStyle,
) -> Result<CvrComparison, CvrErr>
where
    DB: DrawingBackend,
    C: Copy + Into<f64>,
    E: Copy + Into<f64>,
{
    let comparison = compare_cvr_distributions(control, experimental, params)?;
    draw_cvr_chart(root, &comparison, style)?;
    Ok(comparison)
}

/// Draws both sampling distributions, the shaded rejection region(s) of the
/// control distribution and the observed rates.
pub fn draw_cvr_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    cmp: &CvrComparison,
    style: &ChartStyle,
) -> Result<(), CvrErr> {
    //----------------------------------------
    // Axis ranges
    let x_range = chart_x_range(cmp)?;
    let (curve_lo, curve_hi) = x_range.curves;
    let (axis_lo, axis_hi) = x_range.axis;
    let pad = X_PAD * (axis_hi - axis_lo);
    let y_max = cmp.peak_density().filter(|&p| p > 0.0).unwrap_or(1.0);
    let y_top = Y_CEIL * y_max;

    root.fill(&WHITE).map_err(drawing_err)?;
    let mut chart = ChartBuilder::on(root)
        .caption(
            &style.title,
            (style.font_family.as_str(), style.title_font_size),
        )
        .margin(20)
        .build_cartesian_2d((axis_lo - pad)..(axis_hi + pad), (Y_FLOOR * y_max)..y_top)
        .map_err(drawing_err)?;
    // no mesh: the chart is read through its annotations

    //----------------------------------------
    // Density curves
    for (curve, arm, color) in [
        (&cmp.control_curve, Arm::Control, style.control()),
        (&cmp.experimental_curve, Arm::Experimental, style.experimental()),
    ] {
        chart
            .draw_series(LineSeries::new(curve.finite_points(), color.stroke_width(2)))
            .map_err(drawing_err)?
            .label(arm.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    //----------------------------------------
    // Rejection region(s) on the control curve
    let control_dist = NormalDist::new(cmp.control.rate, cmp.control.std_error)?;
    let tails = match cmp.critical_values {
        CriticalValues::OneTailed { upper } => vec![(upper, TailSide::Upper)],
        CriticalValues::TwoTailed { lower, upper } => {
            vec![(lower, TailSide::Lower), (upper, TailSide::Upper)]
        }
    };
    for &(boundary, side) in &tails {
        let region = tail_region(&cmp.control_curve, &control_dist, boundary, side);
        if region.len() > 1 {
            let fill = style.tail_fill().mix(style.tail_fill_opacity).filled();
            chart
                .draw_series(AreaSeries::new(region, 0.0, fill))
                .map_err(drawing_err)?;
        }
        let top = marker_top(control_dist.pdf(boundary), y_top);
        chart
            .draw_series(DashedLineSeries::new(
                vec![(boundary, 0.0), (boundary, top)],
                5,
                3,
                style.marker().stroke_width(1),
            ))
            .map_err(drawing_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format_rate(boundary),
                (boundary, top),
                text_style(style, VPos::Bottom),
            )))
            .map_err(drawing_err)?;
    }

    //----------------------------------------
    // Baseline
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(curve_lo, 0.0), (curve_hi, 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(drawing_err)?;

    //----------------------------------------
    // Observed rates
    for (stats, curve) in [
        (&cmp.experimental, &cmp.experimental_curve),
        (&cmp.control, &cmp.control_curve),
    ] {
        draw_observed_rate(&mut chart, stats, curve, y_max, y_top, style)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((style.font_family.as_str(), style.legend_font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_err)?;

    root.present().map_err(drawing_err)?;
    Ok(())
}

fn draw_observed_rate<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    stats: &ArmStatistics,
    curve: &DensityCurve,
    y_max: f64,
    y_top: f64,
    style: &ChartStyle,
) -> Result<(), CvrErr> {
    let rate = stats.rate;
    if !rate.is_finite() {
        return Ok(());
    }
    let top = marker_top(curve.peak().unwrap_or(f64::INFINITY), y_top);
    chart
        .draw_series(DashedLineSeries::new(
            vec![(rate, 0.0), (rate, top)],
            5,
            3,
            style.marker().stroke_width(1),
        ))
        .map_err(drawing_err)?;
    chart
        .draw_series(std::iter::once(Circle::new(
            (rate, 0.0),
            style.point_radius as i32,
            BLACK.filled(),
        )))
        .map_err(drawing_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format_rate(rate),
            (rate, RATE_LABEL_Y * y_max),
            text_style(style, VPos::Center),
        )))
        .map_err(drawing_err)?;
    Ok(())
}

/// Points of the control curve on one side of `boundary`, closed off with
/// the boundary itself so the shading starts exactly at the critical value.
fn tail_region(
    curve: &DensityCurve,
    dist: &NormalDist,
    boundary: f64,
    side: TailSide,
) -> Vec<(f64, f64)> {
    let edge = (boundary, dist.pdf(boundary));
    let mut region: Vec<(f64, f64)> = match side {
        TailSide::Lower => curve.finite_points().filter(|&(x, _)| x <= boundary).collect(),
        TailSide::Upper => curve.finite_points().filter(|&(x, _)| x >= boundary).collect(),
    };
    if edge.1.is_finite() {
        match side {
            TailSide::Lower => region.push(edge),
            TailSide::Upper => region.insert(0, edge),
        }
    }
    region
}

struct ChartXRange {
    /// Extent of both density curves; the baseline spans this.
    curves: (f64, f64),
    /// Curves plus critical values and observed rates.
    axis: (f64, f64),
}

/// Horizontal extent of everything the chart places. Any NaN statistic
/// (from non-binary input) makes the chart undrawable.
fn chart_x_range(cmp: &CvrComparison) -> Result<ChartXRange, CvrErr> {
    let nan_pair = (f64::NAN, f64::NAN);
    let (c_lo, c_hi) = cmp.control_curve.x_range().unwrap_or(nan_pair);
    let (e_lo, e_hi) = cmp.experimental_curve.x_range().unwrap_or(nan_pair);
    let curve_ends = [c_lo, c_hi, e_lo, e_hi];
    let marks: Vec<f64> = curve_ends
        .iter()
        .copied()
        .chain(cmp.critical_values.boundaries())
        .chain([cmp.control.rate, cmp.experimental.rate])
        .collect();

    let (axis_lo, axis_hi) = extent(&marks);
    if !axis_lo.is_finite() || !axis_hi.is_finite() {
        return Err(RenderErr::NonFiniteRange {
            x_lo: axis_lo,
            x_hi: axis_hi,
        }
        .into());
    }
    let curves = extent(&curve_ends);
    if axis_lo == axis_hi {
        // both arms are point masses at the same rate
        return Ok(ChartXRange {
            curves,
            axis: (axis_lo - 0.05, axis_hi + 0.05),
        });
    }
    Ok(ChartXRange {
        curves,
        axis: (axis_lo, axis_hi),
    })
}

/// Min and max of `values`; NaN if any value is NaN.
fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            if v.is_nan() || lo.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (lo.min(v), hi.max(v))
            }
        })
}

fn marker_top(density: f64, y_top: f64) -> f64 {
    if density.is_finite() {
        density.min(y_top)
    } else {
        y_top
    }
}

fn text_style(style: &ChartStyle, v_pos: VPos) -> TextStyle<'_> {
    TextStyle::from((style.font_family.as_str(), style.annotation_font_size).into_font())
        .pos(Pos::new(HPos::Center, v_pos))
}

/// Rate rounded to 4 decimals with trailing zeros dropped: 0.5 -> "0.5",
/// 0.123456 -> "0.1235", 1 -> "1.0".
pub fn format_rate(x: f64) -> String {
    let fixed = format!("{:.4}", x);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::significance::types::Tails;

    fn svg_texts(svg: &str) -> Vec<String> {
        svg.split("<text")
            .skip(1)
            .filter_map(|chunk| {
                let body = &chunk[chunk.find('>')? + 1..];
                let end = body.find("</text>")?;
                Some(body[..end].trim().to_string())
            })
            .collect()
    }

    fn svg_for(control: &[u8], experimental: &[u8], params: &SignificanceParams) -> String {
        let style = ChartStyle::default();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            plot_cvr_distributions(&root, control, experimental, params, &style)
                .expect("failed to plot distributions");
        }
        svg
    }

    #[test]
    fn format_rate_trims() {
        assert_eq!(format_rate(0.5), "0.5");
        assert_eq!(format_rate(0.75), "0.75");
        assert_eq!(format_rate(0.123456), "0.1235");
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(0.0), "0.0");
        assert_eq!(format_rate(-0.01234), "-0.0123");
    }

    #[test]
    fn two_tailed_chart_annotations() {
        let svg = svg_for(&[1, 0, 1, 0], &[1, 1, 1, 0], &SignificanceParams::default());
        let texts = svg_texts(&svg);
        assert!(svg.contains("CVR: experimental vs control"));
        assert!(texts.contains(&"0.5".to_string()));
        assert!(texts.contains(&"0.75".to_string()));
        assert!(texts.contains(&"control".to_string()));
        assert!(texts.contains(&"experimental".to_string()));
        // 0.5 -/+ 1.959964 * sqrt(0.125)
        assert!(texts.contains(&"-0.193".to_string()));
        assert!(texts.contains(&"1.193".to_string()));
    }

    #[test]
    fn one_tailed_chart_draws() {
        let params = SignificanceParams::new(0.05, Tails::OneTailed).unwrap();
        let svg = svg_for(
            &[1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0],
            &[0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1],
            &params,
        );
        let texts = svg_texts(&svg);
        assert!(texts.contains(&"0.3636".to_string()));
        assert!(texts.contains(&"0.5455".to_string()));
    }

    #[test]
    fn degenerate_arms_still_draw() {
        let svg = svg_for(&[0, 0, 0, 0], &[1, 1, 1], &SignificanceParams::default());
        let texts = svg_texts(&svg);
        assert!(texts.contains(&"0.0".to_string()));
        assert!(texts.contains(&"1.0".to_string()));
    }

    #[test]
    fn empty_sample_fails_before_drawing() {
        let style = ChartStyle::default();
        let mut svg = String::new();
        let empty: [u8; 0] = [];
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            let err = plot_cvr_distributions(
                &root,
                &empty,
                &[1u8, 0],
                &SignificanceParams::default(),
                &style,
            )
            .unwrap_err();
            assert!(err.is_empty_sample());
        }
        assert!(!svg.contains("CVR: experimental vs control"));
    }

    #[test]
    fn nan_rates_cannot_be_drawn() {
        let style = ChartStyle::default();
        let mut svg = String::new();
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        let err = plot_cvr_distributions(
            &root,
            &[3.0f64, 3.0],
            &[2.0f64, 2.0],
            &SignificanceParams::default(),
            &style,
        )
        .unwrap_err();
        assert!(matches!(err, CvrErr::Render(RenderErr::NonFiniteRange { .. })));
    }

    #[test]
    fn single_nan_arm_cannot_be_drawn() {
        let style = ChartStyle::default();
        let mut svg = String::new();
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        let err = plot_cvr_distributions(
            &root,
            &[3.0f64, 0.0],
            &[1.0f64, 0.0, 1.0],
            &SignificanceParams::default(),
            &style,
        )
        .unwrap_err();
        assert!(matches!(err, CvrErr::Render(RenderErr::NonFiniteRange { .. })));

        let cmp = compare_cvr_distributions(
            &[1.0f64, 0.0, 1.0],
            &[3.0f64, 0.0],
            &SignificanceParams::default(),
        )
        .unwrap();
        assert!(chart_x_range(&cmp).is_err());
    }

    #[test]
    fn axis_covers_far_critical_values() {
        let params = SignificanceParams::new(1e-9, Tails::TwoTailed).unwrap();
        let cmp = compare_cvr_distributions(&[1u8, 0, 1, 0], &[1u8, 1, 1, 0], &params).unwrap();
        let CriticalValues::TwoTailed { lower, upper } = cmp.critical_values else {
            panic!()
        };
        let (curve_lo, curve_hi) = cmp.x_range().unwrap();
        // beyond the four-sigma curve grid
        assert!(lower < curve_lo && upper > curve_hi);

        let x_range = chart_x_range(&cmp).unwrap();
        assert!(x_range.axis.0 <= lower && x_range.axis.1 >= upper);
        assert_eq!(x_range.curves, (curve_lo, curve_hi));
    }

    #[test]
    fn mixed_element_types_plot() {
        let style = ChartStyle::default();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            plot_cvr_distributions(
                &root,
                &[1u8, 0, 1, 0],
                &[1.0f64, 1.0, 1.0, 0.0],
                &SignificanceParams::default(),
                &style,
            )
            .unwrap();
        }
        assert!(svg_texts(&svg).contains(&"0.75".to_string()));
    }

    #[test]
    fn tail_region_starts_at_boundary() {
        let dist = NormalDist::new(0.0, 1.0).unwrap();
        let curve = DensityCurve::around(&dist, Default::default());
        let upper = tail_region(&curve, &dist, 1.96, TailSide::Upper);
        assert_eq!(upper[0].0, 1.96);
        assert!(upper.iter().all(|&(x, _)| x >= 1.96));
        let lower = tail_region(&curve, &dist, -1.96, TailSide::Lower);
        assert_eq!(lower.last().unwrap().0, -1.96);
    }
}
