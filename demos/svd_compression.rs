use ndarray::Axis;
use svd_image_compression::*;

pub fn main() -> Result<()> {
    let nrows = 10;
    let ncols = 5;

    let mut rng = rand::thread_rng();
    let mat = f64::random_gaussian((nrows, ncols), &mut rng);

    let svd = SVD::<f64>::compute_from(mat.view())?;
    let truncated = svd.compress(CompressionType::RANK(3))?;

    println!(
        "Shape of U: {}x{}",
        truncated.u.len_of(Axis(0)),
        truncated.u.len_of(Axis(1))
    );
    println!(
        "Shape of Vt: {}x{}",
        truncated.vt.len_of(Axis(0)),
        truncated.vt.len_of(Axis(1))
    );
    println!("Storage ratio: {:.3}", truncated.compression_ratio());
    println!(
        "Relative error: {:1.2E}",
        f64::rel_diff_fro(truncated.to_mat().view(), mat.view())
    );

    println!("Success.");

    Ok(())
}
