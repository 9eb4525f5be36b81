//! Relative error of rank k approximations.
//!
//! The error of the truncated reconstruction is compared with the Eckart-Young
//! prediction computed from the discarded singular values. The curves are saved in
//! `rank_error.png`.

use plotters::prelude::*;
use svd_image_compression::*;

pub fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let dimension = (200, 100);

    let mut rng = rand::thread_rng();

    let mat = f64::random_approximate_low_rank_matrix(dimension, 1.0, 1E-10, &mut rng)?;
    let svd = SVD::<f64>::compute_from(mat.view())?;
    let norm = svd.s.iter().map(|item| item * item).sum::<f64>().sqrt();

    let mut exact = Vec::new();
    let mut predicted = Vec::new();
    for k in (1..svd.rank()).step_by(5) {
        let approx = svd.truncated_reconstruct(k)?;
        exact.push((k, f64::rel_diff_fro(approx.view(), mat.view())));
        predicted.push((k, svd.truncation_error(k)? / norm));
    }

    let root = BitMapBackend::new("rank_error.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(20)
        .y_label_area_size(50)
        .build_cartesian_2d(1..svd.rank(), (1E-12..1.0).log_scale())?;

    chart
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|item| format!("{:.1E}", item))
        .y_desc("Relative Error")
        .draw()?;

    chart
        .draw_series(LineSeries::new(predicted, &BLACK))?
        .label("Eckart-Young prediction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(exact, &RED))?
        .label("truncated reconstruction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.configure_series_labels().draw()?;

    println!("Saved rank_error.png for ranks up to {}", svd.rank());

    Ok(())
}
