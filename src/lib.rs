/*!
 * # infogan-tch - InfoGAN network definitions for the tch-rs crate
 *
 * Generator and discriminator topologies for an InfoGAN model over square
 * images. Both modules are plain forward maps built on `tch::nn`; the
 * adversarial training loop, losses and optimizers live outside this crate
 * and drive the parameters through the `nn::VarStore` the modules are
 * built in.
 *
 * ## Features
 * - Generator : (noise, code) -> image, values in (-1, 1)
 * - Discriminator : image -> (validity logit, reconstructed code)
 * - Prior sampling : noise and code draws, optionally seeded
 * - Image tiling : batch of samples -> single inspection grid
 *
 * ## Conventions
 *
 * ### Shapes
 * - N : The number of samples
 * - C : The number of channels
 * - H : The height of the image
 * - W : The width of the image
 *
 * - [N, C, H, W] : A batch of N images of shape [C, H, W]
 * - [N, D] : A batch of N feature vectors of length D
 *
 * Images handed to the discriminator and produced by the generator are
 * always [N, C, H, W] with H == W == `img_size`.
 */

pub mod config;
pub mod discriminator;
pub mod generator;
pub mod sampling;
pub mod utils;

pub use config::{ConfigError, GanConfig};
pub use discriminator::Discriminator;
pub use generator::Generator;
