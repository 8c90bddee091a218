/*!
 * Small building blocks shared by both networks, plus test helpers.
 */

use tch::{nn, Kind, Tensor};

/// Leaky rectification with a configurable negative slope, usable with
/// `nn::SequentialT::add_fn`.
pub fn leaky_relu(slope: f64) -> impl Fn(&Tensor) -> Tensor + Send + 'static {
    move |x| x.maximum(&(x * slope))
}

/// Batch-norm configuration with the 0.8 smoothing term used on every
/// normalization stage except the generator's first.
pub fn smoothed_batch_norm() -> nn::BatchNormConfig {
    nn::BatchNormConfig {
        eps: 0.8,
        ..Default::default()
    }
}

/**
 * Tile a batch of generated images into a single grid for inspection.
 *
 * # Arguments
 * imgs: &Tensor - Images in (-1, 1) [N, C, H, W], N >= rows * cols
 * rows: i64 - The number of grid rows
 * cols: i64 - The number of grid columns
 *
 * # Returns
 * Tensor - A uint8 grid image [C, rows * H, cols * W], samples laid out
 * row-major. Panics if the batch holds fewer than rows * cols images.
 */
pub fn tile_images(imgs: &Tensor, rows: i64, cols: i64) -> Tensor {
    debug_assert!(
        imgs.size()[0] >= rows * cols,
        "Batch too small for a {rows}x{cols} grid"
    );
    let imgs = ((imgs + 1.0) * 127.5).clamp(0.0, 255.0).to_kind(Kind::Uint8);
    let mut strips = Vec::new();
    for i in 0..rows {
        strips.push(Tensor::cat(
            &(0..cols)
                .map(|j| imgs.narrow(0, cols * i + j, 1))
                .collect::<Vec<_>>(),
            3,
        ));
    }
    Tensor::cat(&strips, 2).squeeze_dim(0)
}

pub fn assert_close(a: &Tensor, b: &Tensor, tol: f64) {
    assert_eq!(a.size(), b.size(), "Tensors must have the same shape");
    let delta = f64::from((a - b).abs().max());
    assert!(delta < tol, "Max deviation {delta} above tolerance {tol}");
}
