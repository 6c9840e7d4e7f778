/// Seeded gradient noise (improved Perlin) used for terrain heights.
///
/// The permutation table is shuffled from a ChaCha stream so a given seed
/// produces the same table on every platform and every run.
use noise::NoiseFn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PERM_SIZE: usize = 256;
const PERM_MASK: i32 = 255;

#[derive(Clone)]
pub struct NoiseGenerator {
    seed: u64,
    // 256 entries duplicated so corner hashes never need to wrap
    perm: [u8; PERM_SIZE * 2],
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut permutation: [u8; PERM_SIZE] = std::array::from_fn(|i| i as u8);
        for i in 0..PERM_SIZE {
            let j = rng.gen_range(0..PERM_SIZE);
            permutation.swap(i, j);
        }

        let perm = std::array::from_fn(|i| permutation[i % PERM_SIZE]);
        Self { seed, perm }
    }

    /// Generator with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 3D gradient noise, roughly in [-1, 1]. Zero on every integer lattice point.
    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());

        let xi = (xf as i32 & PERM_MASK) as usize;
        let yi = (yf as i32 & PERM_MASK) as usize;
        let zi = (zf as i32 & PERM_MASK) as usize;

        let x = x - xf;
        let y = y - yf;
        let z = z - zf;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = |i: usize| self.perm[i] as usize;

        let a = p(xi) + yi;
        let aa = p(a) + zi;
        let ab = p(a + 1) + zi;
        let b = p(xi + 1) + yi;
        let ba = p(b) + zi;
        let bb = p(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p(aa), x, y, z), grad(p(ba), x - 1.0, y, z)),
                lerp(
                    u,
                    grad(p(ab), x, y - 1.0, z),
                    grad(p(bb), x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p(aa + 1), x, y, z - 1.0),
                    grad(p(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p(ab + 1), x, y - 1.0, z - 1.0),
                    grad(p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Height-map sample: the y = 0 slice of the 3D field.
    #[inline]
    pub fn noise2d(&self, x: f64, z: f64) -> f64 {
        self.noise3d(x, 0.0, z)
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl NoiseFn<f64, 3> for NoiseGenerator {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.noise3d(point[0], point[1], point[2])
    }
}

impl NoiseFn<f64, 2> for NoiseGenerator {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.noise2d(point[0], point[1])
    }
}

/// 6t^5 - 15t^4 + 10t^3
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// 12 edge gradients selected by the low 4 bits of the hash
/// (4 of the 16 slots repeat).
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
