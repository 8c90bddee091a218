/*!
 * # Discriminator
 *
 * Maps an image to a real-vs-fake validity logit and a reconstruction of
 * the structured latent code. Both heads share one convolutional trunk, so
 * the code reconstruction reads the same features the adversarial decision
 * uses, instead of paying for a separate tower.
 */

use tch::nn::{self, Module, ModuleT};
use tch::Tensor;

use crate::config::{GanConfig, Result};
use crate::utils::{leaky_relu, smoothed_batch_norm};

#[derive(Debug)]
pub struct Discriminator {
    conv_blocks: nn::SequentialT,
    adv_layer: nn::Linear,
    latent_layer: nn::Linear,
}

// Halves the spatial extent. The first block skips normalization so the raw
// input distribution is not normalized away; the channel-wise dropout only
// fires in train mode.
fn downsample_block(path: nn::Path, c_in: i64, c_out: i64, norm: bool) -> nn::SequentialT {
    let conv_cfg = nn::ConvConfig {
        stride: 2,
        padding: 1,
        ..Default::default()
    };
    let block = nn::seq_t()
        .add(nn::conv2d(&path / "conv", c_in, c_out, 3, conv_cfg))
        .add_fn(leaky_relu(0.2))
        .add_fn_t(|x, train| x.feature_dropout(0.25, train));
    if norm {
        block.add(nn::batch_norm2d(&path / "bn", c_out, smoothed_batch_norm()))
    } else {
        block
    }
}

impl Discriminator {
    /**
     * Build the discriminator under `path`, failing fast on configurations
     * whose shape arithmetic cannot work out.
     *
     * # Arguments
     * path: &nn::Path - Where the learnable parameters are registered
     * config: GanConfig - Shared model dimensions, requires img_size % 16 == 0
     */
    pub fn new(path: &nn::Path, config: GanConfig) -> Result<Discriminator> {
        config.validate_discriminator()?;
        let conv_blocks = nn::seq_t()
            .add(downsample_block(path / "block1", config.channels, 16, false))
            .add(downsample_block(path / "block2", 16, 32, true))
            .add(downsample_block(path / "block3", 32, 64, true))
            .add(downsample_block(path / "block4", 64, 128, true));

        let ds_size = config.ds_size();
        let flat_dim = 128 * ds_size * ds_size;
        let adv_layer = nn::linear(path / "adv", flat_dim, 1, Default::default());
        let latent_layer = nn::linear(path / "latent", flat_dim, config.code_dim, Default::default());

        Ok(Discriminator {
            conv_blocks,
            adv_layer,
            latent_layer,
        })
    }

    /**
     * Score a batch of images.
     *
     * # Arguments
     * img: &Tensor - Images [N, channels, img_size, img_size]
     * train: bool - Enables dropout and batch-statistics normalization
     *
     * # Returns
     * (Tensor, Tensor) - The validity logit [N, 1] and the reconstructed
     * code [N, code_dim], both unbounded; bounding nonlinearities are the
     * loss functions' business.
     */
    pub fn forward_t(&self, img: &Tensor, train: bool) -> (Tensor, Tensor) {
        let out = self.conv_blocks.forward_t(img, train);
        let out = out.flatten(1, -1);
        let validity = self.adv_layer.forward(&out);
        let latent_code = self.latent_layer.forward(&out);
        (validity, latent_code)
    }
}
