/*!
 * # Sampling
 *
 * Draws from the latent priors the generator consumes: a standard-normal
 * noise vector and a uniform (-1, 1) structured code. The seeded variant
 * produces identical draws across runs, for fixed inspection batches.
 */

use rand::{distributions, Rng, SeedableRng};
use tch::Tensor;

/**
 * Draw unstructured noise from a standard normal prior.
 *
 * # Arguments
 * n: i64 - The number of samples
 * latent_dim: i64 - The length of each noise vector
 * options: (tch::Kind, tch::Device) - The kind and device of the result
 *
 * # Returns
 * Tensor - The noise draw [N, latent_dim]
 */
pub fn sample_noise(n: i64, latent_dim: i64, options: (tch::Kind, tch::Device)) -> Tensor {
    Tensor::randn(&[n, latent_dim], options)
}

/**
 * Draw a structured code uniformly from (-1, 1).
 *
 * # Arguments
 * n: i64 - The number of samples
 * code_dim: i64 - The length of each code vector
 * options: (tch::Kind, tch::Device) - The kind and device of the result
 *
 * # Returns
 * Tensor - The code draw [N, code_dim]
 */
pub fn sample_code(n: i64, code_dim: i64, options: (tch::Kind, tch::Device)) -> Tensor {
    Tensor::rand(&[n, code_dim], options) * 2.0 - 1.0
}

/**
 * Deterministic variant of [`sample_code`].
 *
 * # Arguments
 * n: i64 - The number of samples
 * code_dim: i64 - The length of each code vector
 * seed: u64 - The seed for the random number generator
 * options: (tch::Kind, tch::Device) - The kind and device of the result
 *
 * # Returns
 * Tensor - The code draw [N, code_dim]
 */
pub fn sample_code_seeded(
    n: i64,
    code_dim: i64,
    seed: u64,
    options: (tch::Kind, tch::Device),
) -> Tensor {
    let (kind, device) = options;
    let rng = rand::rngs::StdRng::seed_from_u64(seed);
    let draw = rng
        .sample_iter(distributions::Uniform::new(-1.0, 1.0))
        .take((n * code_dim) as usize)
        .collect::<Vec<f64>>();

    Tensor::of_slice(&draw)
        .view([n, code_dim])
        .to_device(device)
        .to_kind(kind)
}
