/*!
 * # Generator
 *
 * Maps a (noise, code) pair to an image. A linear stage projects the
 * concatenated input onto a 128-channel feature map of side `img_size / 4`;
 * two upsample-then-convolve stages then restore the full resolution, which
 * avoids the checkerboard artifacts of learned upsampling.
 */

use tch::nn::{self, Module, ModuleT};
use tch::Tensor;

use crate::config::{GanConfig, Result};
use crate::utils::{leaky_relu, smoothed_batch_norm};

#[derive(Debug)]
pub struct Generator {
    l1: nn::Linear,
    conv_blocks: nn::SequentialT,
    init_size: i64,
}

/// Doubles the spatial extent with nearest-neighbour interpolation.
fn upsample2x(x: &Tensor) -> Tensor {
    let size = x.size();
    x.upsample_nearest2d(&[size[2] * 2, size[3] * 2], None, None)
}

impl Generator {
    /**
     * Build the generator under `path`, failing fast on configurations
     * whose shape arithmetic cannot work out.
     *
     * # Arguments
     * path: &nn::Path - Where the learnable parameters are registered
     * config: GanConfig - Shared model dimensions, requires img_size % 4 == 0
     */
    pub fn new(path: &nn::Path, config: GanConfig) -> Result<Generator> {
        config.validate_generator()?;
        let init_size = config.init_size();
        let conv_cfg = nn::ConvConfig {
            stride: 1,
            padding: 1,
            ..Default::default()
        };

        let l1 = nn::linear(
            path / "l1",
            config.input_dim(),
            128 * init_size * init_size,
            Default::default(),
        );
        let conv_blocks = nn::seq_t()
            .add(nn::batch_norm2d(path / "bn1", 128, Default::default()))
            .add_fn(upsample2x)
            .add(nn::conv2d(path / "conv1", 128, 128, 3, conv_cfg))
            .add(nn::batch_norm2d(path / "bn2", 128, smoothed_batch_norm()))
            .add_fn(leaky_relu(0.2))
            .add_fn(upsample2x)
            .add(nn::conv2d(path / "conv2", 128, 64, 3, conv_cfg))
            .add(nn::batch_norm2d(path / "bn3", 64, smoothed_batch_norm()))
            .add_fn(leaky_relu(0.2))
            .add(nn::conv2d(path / "conv3", 64, config.channels, 3, conv_cfg))
            .add_fn(Tensor::tanh);

        Ok(Generator {
            l1,
            conv_blocks,
            init_size,
        })
    }

    /**
     * Generate a batch of images.
     *
     * # Arguments
     * noise: &Tensor - The noise prior draw [N, latent_dim]
     * code: &Tensor - The structured code draw [N, code_dim]
     * train: bool - Whether batch statistics are used for normalization
     *
     * # Returns
     * Tensor - Images [N, channels, img_size, img_size], values in (-1, 1)
     */
    pub fn forward_t(&self, noise: &Tensor, code: &Tensor, train: bool) -> Tensor {
        let gen_input = Tensor::cat(&[noise, code], 1);
        let out = self.l1.forward(&gen_input);
        let out = out.view([-1, 128, self.init_size, self.init_size]);
        self.conv_blocks.forward_t(&out, train)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::assert_close;
    use tch::{Device, Kind};

    fn cfg(img_size: i64) -> GanConfig {
        GanConfig {
            channels: 1,
            img_size,
            latent_dim: 62,
            code_dim: 2,
        }
    }

    #[test]
    fn output_shape_and_range() {
        for img_size in [28, 32, 64] {
            let vs = nn::VarStore::new(Device::Cpu);
            let gen = Generator::new(&vs.root(), cfg(img_size)).unwrap();
            let noise = Tensor::randn(&[4, 62], (Kind::Float, Device::Cpu));
            let code = Tensor::randn(&[4, 2], (Kind::Float, Device::Cpu));
            let img = gen.forward_t(&noise, &code, true);
            assert_eq!(img.size(), &[4, 1, img_size, img_size]);
            assert!(f64::from(img.abs().max()) < 1.0);
        }
    }

    #[test]
    fn rejects_unusable_img_size() {
        let vs = nn::VarStore::new(Device::Cpu);
        assert!(Generator::new(&vs.root(), cfg(30)).is_err());
    }

    #[test]
    fn batch_independence_in_eval() {
        let vs = nn::VarStore::new(Device::Cpu);
        let gen = Generator::new(&vs.root(), cfg(32)).unwrap();
        let noise = Tensor::randn(&[2, 62], (Kind::Float, Device::Cpu));
        let code = Tensor::randn(&[2, 2], (Kind::Float, Device::Cpu));

        let full = gen.forward_t(&noise, &code, false);
        let first = gen.forward_t(&noise.narrow(0, 0, 1), &code.narrow(0, 0, 1), false);
        let second = gen.forward_t(&noise.narrow(0, 1, 1), &code.narrow(0, 1, 1), false);

        assert_close(&full, &Tensor::cat(&[first, second], 0), 1e-5);
    }
}
