use f4_field::Field;
use f4_symmetric::MixingLayer;

/// A source-heavy generalized Feistel mixing layer over the state ring.
///
/// Step `i` of a round updates `state[(i+1) % WIDTH] += state[i]^3 + rc[i]`,
/// sequentially on the already-updated state. Each step adjusts a single
/// coordinate by a function of the others, so the round is a bijection for
/// any constants, over any field. Cubing is not a linearized polynomial in
/// characteristic 2, keeping the layer nonlinear in both field families.
#[derive(Clone, Copy, Debug, Default)]
pub struct CubeFeistel;

fn cube<F: Field>(x: F) -> F {
    x * x * x
}

impl<F: Field, const WIDTH: usize> MixingLayer<F, WIDTH> for CubeFeistel {
    fn mix(&self, state: &mut [F; WIDTH], round_constants: &[F; WIDTH]) {
        for i in 0..WIDTH {
            let feedback = cube(state[i]) + round_constants[i];
            state[(i + 1) % WIDTH] += feedback;
        }
    }
}
